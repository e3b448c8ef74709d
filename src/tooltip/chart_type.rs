use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Column,
    Line,
    Area,
    Radial,
    Boxplot,
    Bullet,
    Pie,
    Scatter,
    Bubble,
    Heatmap,
    Treemap,
    Map,
    Combo,
}

impl ChartType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "column",
            Self::Line => "line",
            Self::Area => "area",
            Self::Radial => "radial",
            Self::Boxplot => "boxplot",
            Self::Bullet => "bullet",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::Heatmap => "heatmap",
            Self::Treemap => "treemap",
            Self::Map => "map",
            Self::Combo => "combo",
        }
    }

    #[must_use]
    pub fn is_pie_chart(self) -> bool {
        self == Self::Pie
    }

    /// Combo chart made only of pie series (pie + donut share the `pie` type).
    #[must_use]
    pub fn is_pie_donut_combo_chart(self, chart_types: &[ChartType]) -> bool {
        self == Self::Combo
            && !chart_types.is_empty()
            && chart_types.iter().all(|chart_type| chart_type.is_pie_chart())
    }

    #[must_use]
    pub fn is_boxplot_chart(self) -> bool {
        self == Self::Boxplot
    }

    #[must_use]
    pub fn is_treemap_chart(self) -> bool {
        self == Self::Treemap
    }

    #[must_use]
    pub fn is_line_type_chart(self) -> bool {
        matches!(self, Self::Line | Self::Area | Self::Radial)
    }

    /// Chart types whose items are positioned by x/y ratios.
    #[must_use]
    pub fn is_coordinate_type_chart(self) -> bool {
        matches!(self, Self::Scatter | Self::Bubble)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let chart_type = match value.trim().to_ascii_lowercase().as_str() {
            "bar" => Self::Bar,
            "column" => Self::Column,
            "line" => Self::Line,
            "area" => Self::Area,
            "radial" => Self::Radial,
            "boxplot" => Self::Boxplot,
            "bullet" => Self::Bullet,
            "pie" => Self::Pie,
            "scatter" => Self::Scatter,
            "bubble" => Self::Bubble,
            "heatmap" => Self::Heatmap,
            "treemap" => Self::Treemap,
            "map" => Self::Map,
            "combo" => Self::Combo,
            other => {
                return Err(ChartError::InvalidData(format!(
                    "unknown chart type `{other}`"
                )));
            }
        };
        Ok(chart_type)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartType;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Pie ".parse::<ChartType>().ok(), Some(ChartType::Pie));
        assert!("donut-ish".parse::<ChartType>().is_err());
    }

    #[test]
    fn pie_donut_combo_requires_only_pie_members() {
        let pies = [ChartType::Pie, ChartType::Pie];
        let mixed = [ChartType::Pie, ChartType::Column];

        assert!(ChartType::Combo.is_pie_donut_combo_chart(&pies));
        assert!(!ChartType::Combo.is_pie_donut_combo_chart(&mixed));
        assert!(!ChartType::Combo.is_pie_donut_combo_chart(&[]));
        assert!(!ChartType::Pie.is_pie_donut_combo_chart(&pies));
    }
}
