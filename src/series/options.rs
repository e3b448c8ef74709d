use serde::{Deserialize, Serialize};

use crate::animation::{ADDING_DATA_ANIMATION_DURATION_MS, Easing};
use crate::core::{Dimension, LabelTheme, SERIES_EXPAND_SIZE};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackType {
    Normal,
    Percent,
}

/// Line/area series behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesOptions {
    /// Put the first and last category on the plot edges.
    #[serde(default)]
    pub aligned: bool,
    /// Streaming updates scroll the graph left instead of squeezing it.
    #[serde(default)]
    pub shifting: bool,
    #[serde(default)]
    pub show_label: bool,
    #[serde(default)]
    pub stack_type: Option<StackType>,
    #[serde(default)]
    pub label_theme: LabelTheme,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: f64,
}

fn default_animation_duration_ms() -> f64 {
    ADDING_DATA_ANIMATION_DURATION_MS
}

impl Default for LineSeriesOptions {
    fn default() -> Self {
        Self {
            aligned: false,
            shifting: false,
            show_label: false,
            stack_type: None,
            label_theme: LabelTheme::default(),
            easing: Easing::Linear,
            animation_duration_ms: default_animation_duration_ms(),
        }
    }
}

impl LineSeriesOptions {
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack_type.is_some()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.animation_duration_ms.is_finite() || self.animation_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_theme.font_size_px.is_finite() || self.label_theme.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Series area and the expanded area that also covers stroke overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub series: Dimension,
    pub extended: Dimension,
}

impl SeriesBounds {
    /// Expands the series area by `SERIES_EXPAND_SIZE` on every side.
    #[must_use]
    pub fn from_series(series: Dimension) -> Self {
        Self {
            series,
            extended: Dimension::new(
                series.width + SERIES_EXPAND_SIZE * 2.0,
                series.height + SERIES_EXPAND_SIZE * 2.0,
            ),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        self.series.validate()?;
        self.extended.validate()
    }
}
