use serde::{Deserialize, Serialize};

/// Normalized coordinate of a coordinate-type item (scatter, line with x values).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioMap {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub start: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub value: f64,
    pub label: String,
    pub ratio: f64,
}

/// Five-number summary of a boxplot item, as display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxplotLabels {
    pub min: String,
    pub lower_quartile: String,
    pub median: String,
    pub upper_quartile: String,
    pub max: String,
}

/// Chart-schema specific part of a series item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesItemDetail {
    #[default]
    Value,
    Range {
        start_value: f64,
        start_label: String,
        start_ratio: f64,
    },
    Pie {
        ratio_label: String,
    },
    Coordinate {
        #[serde(default)]
        x: Option<String>,
        #[serde(default)]
        y: Option<String>,
        #[serde(default)]
        r: Option<String>,
        ratio_map: RatioMap,
    },
    Boxplot {
        labels: BoxplotLabels,
        #[serde(default)]
        outliers: Vec<Outlier>,
    },
}

/// Display values of an item that tooltips may reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipValueMap {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boxplot: Option<BoxplotLabels>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outliers: Vec<Outlier>,
}

impl TooltipValueMap {
    /// Looks up one of the `x`/`y`/`r` value-type labels by name.
    #[must_use]
    pub fn value_type(&self, name: &str) -> Option<&str> {
        match name {
            "x" => self.x.as_deref(),
            "y" => self.y.as_deref(),
            "r" => self.r.as_deref(),
            _ => None,
        }
    }
}

/// A single observed value with its normalized ratio and display label.
///
/// `ratio` is already normalized against the value axis limit, so geometry
/// code never needs the raw limits again. Coordinate items carry their raw
/// `y` in `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesItem {
    pub value: f64,
    pub label: String,
    pub ratio: f64,
    #[serde(default)]
    pub tooltip_label: Option<String>,
    #[serde(default)]
    pub end_label: Option<String>,
    #[serde(default)]
    pub detail: SeriesItemDetail,
}

impl SeriesItem {
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>, ratio: f64) -> Self {
        Self {
            value,
            label: label.into(),
            ratio,
            tooltip_label: None,
            end_label: None,
            detail: SeriesItemDetail::Value,
        }
    }

    #[must_use]
    pub fn with_range(
        mut self,
        start_value: f64,
        start_label: impl Into<String>,
        start_ratio: f64,
    ) -> Self {
        self.detail = SeriesItemDetail::Range {
            start_value,
            start_label: start_label.into(),
            start_ratio,
        };
        self
    }

    #[must_use]
    pub fn with_end_label(mut self, end_label: impl Into<String>) -> Self {
        self.end_label = Some(end_label.into());
        self
    }

    #[must_use]
    pub fn with_tooltip_label(mut self, tooltip_label: impl Into<String>) -> Self {
        self.tooltip_label = Some(tooltip_label.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: SeriesItemDetail) -> Self {
        self.detail = detail;
        self
    }

    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self.detail, SeriesItemDetail::Range { .. })
    }

    #[must_use]
    pub fn start_ratio(&self) -> Option<f64> {
        match &self.detail {
            SeriesItemDetail::Range { start_ratio, .. } => Some(*start_ratio),
            _ => None,
        }
    }

    #[must_use]
    pub fn start_label(&self) -> Option<&str> {
        match &self.detail {
            SeriesItemDetail::Range { start_label, .. } => Some(start_label),
            _ => None,
        }
    }

    #[must_use]
    pub fn ratio_map(&self) -> Option<RatioMap> {
        match &self.detail {
            SeriesItemDetail::Coordinate { ratio_map, .. } => Some(*ratio_map),
            _ => None,
        }
    }

    #[must_use]
    pub fn outliers(&self) -> &[Outlier] {
        match &self.detail {
            SeriesItemDetail::Boxplot { outliers, .. } => outliers,
            _ => &[],
        }
    }

    /// Label drawn at the item's end point.
    #[must_use]
    pub fn end_or_label(&self) -> &str {
        self.end_label.as_deref().unwrap_or(&self.label)
    }

    /// Collects the values a tooltip template may reference.
    #[must_use]
    pub fn pick_value_map_for_tooltip(&self) -> TooltipValueMap {
        let mut values = TooltipValueMap {
            value: self.value,
            end_label: self.end_label.clone(),
            ..TooltipValueMap::default()
        };

        match &self.detail {
            SeriesItemDetail::Value => {}
            SeriesItemDetail::Range { start_label, .. } => {
                values.start_label = Some(start_label.clone());
                if values.end_label.is_none() {
                    values.end_label = Some(self.label.clone());
                }
            }
            SeriesItemDetail::Pie { ratio_label } => {
                values.ratio_label = Some(ratio_label.clone());
            }
            SeriesItemDetail::Coordinate { x, y, r, .. } => {
                values.x = x.clone();
                values.y = y.clone();
                values.r = r.clone();
            }
            SeriesItemDetail::Boxplot { labels, outliers } => {
                values.boxplot = Some(labels.clone());
                values.outliers = outliers.clone();
            }
        }

        values
    }
}
