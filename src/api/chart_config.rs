use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::FrameScheduler;
use crate::core::AxesData;
use crate::error::{ChartError, ChartResult};
use crate::render::GraphRenderer;
use crate::series::{LineSeriesOptions, LineTypeSeries, SeriesBounds};
use crate::tooltip::{ChartType, NormalTooltip, TooltipAlign};

/// Tooltip options as written by hosts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipOptions {
    /// `None` resolves to the orientation default on build.
    #[serde(default)]
    pub align: Option<TooltipAlign>,
    /// Appended to every tooltip value, e.g. a unit.
    #[serde(default)]
    pub suffix: String,
}

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    /// Member chart types of a combo chart.
    #[serde(default)]
    pub chart_types: Vec<ChartType>,
    #[serde(default = "default_is_vertical")]
    pub is_vertical: bool,
    #[serde(default)]
    pub coordinate_type: bool,
    #[serde(default)]
    pub series: LineSeriesOptions,
    #[serde(default)]
    pub tooltip: TooltipOptions,
}

fn default_is_vertical() -> bool {
    true
}

impl ChartConfig {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            chart_types: Vec::new(),
            is_vertical: default_is_vertical(),
            coordinate_type: chart_type.is_coordinate_type_chart(),
            series: LineSeriesOptions::default(),
            tooltip: TooltipOptions::default(),
        }
    }

    #[must_use]
    pub fn with_chart_types(mut self, chart_types: Vec<ChartType>) -> Self {
        self.chart_types = chart_types;
        self
    }

    #[must_use]
    pub fn with_vertical(mut self, is_vertical: bool) -> Self {
        self.is_vertical = is_vertical;
        self
    }

    #[must_use]
    pub fn with_coordinate_type(mut self, coordinate_type: bool) -> Self {
        self.coordinate_type = coordinate_type;
        self
    }

    #[must_use]
    pub fn with_series_options(mut self, series: LineSeriesOptions) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_tooltip_options(mut self, tooltip: TooltipOptions) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.chart_type == ChartType::Combo && self.chart_types.is_empty() {
            return Err(ChartError::InvalidData(
                "combo chart requires member chart types".to_owned(),
            ));
        }
        if self.chart_types.contains(&ChartType::Combo) {
            return Err(ChartError::InvalidData(
                "combo chart cannot contain another combo chart".to_owned(),
            ));
        }
        self.series.validate()
    }

    /// Builds the single-item tooltip with align resolved.
    pub fn build_tooltip(&self) -> ChartResult<NormalTooltip> {
        self.validate()?;
        let mut tooltip = NormalTooltip::new(self.chart_type, self.is_vertical)
            .with_chart_types(self.chart_types.clone())
            .with_suffix(self.tooltip.suffix.clone())
            .with_align(self.tooltip.align);
        tooltip.set_default_tooltip_position_option();
        Ok(tooltip)
    }

    /// Builds a line-type series over the host's renderer and scheduler.
    pub fn build_line_series<G: GraphRenderer, S: FrameScheduler>(
        &self,
        renderer: G,
        scheduler: S,
        bounds: SeriesBounds,
        axes: AxesData,
    ) -> ChartResult<LineTypeSeries<G, S>> {
        self.validate()?;
        let has_line_type = self.chart_type.is_line_type_chart()
            || self.chart_types.iter().any(|chart| chart.is_line_type_chart());
        if !has_line_type {
            return Err(ChartError::InvalidData(format!(
                "chart type `{}` has no line-type series",
                self.chart_type
            )));
        }

        debug!(
            chart_type = %self.chart_type,
            coordinate_type = self.coordinate_type,
            shifting = self.series.shifting,
            "building line-type series"
        );
        LineTypeSeries::new(
            renderer,
            scheduler,
            self.series.clone(),
            self.coordinate_type,
            bounds,
            axes,
        )
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
