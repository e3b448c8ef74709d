use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of a chart area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.is_valid() {
            return Err(ChartError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Pixel position of one series item.
///
/// `start_top` is only present for range items (area ranges, stacked areas).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_top: Option<f64>,
}

impl Position {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            start_top: None,
        }
    }

    #[must_use]
    pub fn with_start_top(mut self, start_top: f64) -> Self {
        self.start_top = Some(start_top);
        self
    }
}

/// Pixel rectangle passed to overlay renderers such as the group tooltip line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub dimension: Dimension,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimit {
    pub min: f64,
    pub max: f64,
}

impl AxisLimit {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "axis limit must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Horizontal axis state relevant to series geometry.
///
/// `size_ratio`/`position_ratio` describe the zoom window of a coordinate
/// axis: the visible width is scaled by `size_ratio` and shifted left by
/// `position_ratio` of the series width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XAxisData {
    #[serde(default)]
    pub limit: Option<AxisLimit>,
    #[serde(default)]
    pub size_ratio: Option<f64>,
    #[serde(default)]
    pub position_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YAxisData {
    pub limit: AxisLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxesData {
    pub x_axis: XAxisData,
    pub y_axis: YAxisData,
}

impl AxesData {
    #[must_use]
    pub fn new(x_axis: XAxisData, y_limit: AxisLimit) -> Self {
        Self {
            x_axis,
            y_axis: YAxisData { limit: y_limit },
        }
    }
}
