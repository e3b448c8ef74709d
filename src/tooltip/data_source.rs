use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_unix_millis;
use crate::core::{SeriesDataModel, SeriesGroup};
use crate::error::{ChartError, ChartResult};
use crate::tooltip::ChartType;

/// Legend labels as exposed by the data layer.
///
/// Single-type charts expose one list; combo charts key lists by chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LegendLabels {
    Single(Vec<String>),
    PerChartType(IndexMap<ChartType, Vec<String>>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendItem {
    pub chart_type: ChartType,
    pub label: String,
}

/// Data-processing boundary consumed by tooltips.
pub trait TooltipDataSource {
    fn legend_labels(&self) -> LegendLabels;

    /// Legend entry by global legend index.
    fn legend_item(&self, index: usize) -> Option<LegendItem>;

    /// Visits every series group with its index and owning chart type.
    ///
    /// `pivot` visits legend-major groups instead of category-major ones.
    fn each_by_series_group(
        &self,
        pivot: bool,
        visit: &mut dyn FnMut(&SeriesGroup, usize, Option<ChartType>),
    );

    fn make_tooltip_category(
        &self,
        group_index: usize,
        index: usize,
        is_vertical: bool,
    ) -> Option<String>;

    fn raw_category(&self, group_index: usize) -> Option<String>;

    fn is_coordinate_type(&self) -> bool;
}

/// In-memory data source for hosts that already hold processed series.
#[derive(Debug, Clone, Default)]
pub struct SeriesDataSet {
    series: IndexMap<ChartType, SeriesDataModel>,
    legends: Vec<LegendItem>,
    categories: Vec<String>,
    y_categories: Vec<String>,
    date_format: Option<String>,
    coordinate_type: bool,
}

impl SeriesDataSet {
    #[must_use]
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    /// Adds one chart type's series with its legend labels, in legend order.
    pub fn with_series(
        mut self,
        chart_type: ChartType,
        legend_labels: Vec<String>,
        model: SeriesDataModel,
    ) -> ChartResult<Self> {
        if !model.is_empty() && legend_labels.len() != model.legend_count() {
            return Err(ChartError::InvalidData(format!(
                "{chart_type} series has {} legends but {} labels",
                model.legend_count(),
                legend_labels.len()
            )));
        }
        if self.series.contains_key(&chart_type) {
            return Err(ChartError::InvalidData(format!(
                "{chart_type} series registered twice"
            )));
        }

        self.legends.extend(
            legend_labels
                .into_iter()
                .map(|label| LegendItem { chart_type, label }),
        );
        self.series.insert(chart_type, model);
        Ok(self)
    }

    /// Second category axis (heatmaps); tooltip categories become `"x, y"`.
    #[must_use]
    pub fn with_y_categories(mut self, y_categories: Vec<String>) -> Self {
        self.y_categories = y_categories;
        self
    }

    /// Treats categories as unix milliseconds and formats them with a
    /// `chrono` strftime pattern in tooltips.
    #[must_use]
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_coordinate_type(mut self, coordinate_type: bool) -> Self {
        self.coordinate_type = coordinate_type;
        self
    }

    #[must_use]
    pub fn series(&self, chart_type: ChartType) -> Option<&SeriesDataModel> {
        self.series.get(&chart_type)
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    fn tooltip_category(&self, group_index: usize) -> Option<String> {
        let raw = self.categories.get(group_index)?;
        let formatted = self.date_format.as_deref().and_then(|pattern| {
            raw.trim()
                .parse::<i64>()
                .ok()
                .and_then(|millis| format_unix_millis(millis, pattern))
        });
        Some(formatted.unwrap_or_else(|| raw.clone()))
    }
}

impl TooltipDataSource for SeriesDataSet {
    fn legend_labels(&self) -> LegendLabels {
        if self.series.len() <= 1 {
            let labels = self.legends.iter().map(|item| item.label.clone()).collect();
            return LegendLabels::Single(labels);
        }

        let mut per_type: IndexMap<ChartType, Vec<String>> = IndexMap::new();
        for item in &self.legends {
            per_type
                .entry(item.chart_type)
                .or_default()
                .push(item.label.clone());
        }
        LegendLabels::PerChartType(per_type)
    }

    fn legend_item(&self, index: usize) -> Option<LegendItem> {
        self.legends.get(index).cloned()
    }

    fn each_by_series_group(
        &self,
        pivot: bool,
        visit: &mut dyn FnMut(&SeriesGroup, usize, Option<ChartType>),
    ) {
        for (chart_type, model) in &self.series {
            for (group_index, group) in model.groups_by(pivot).iter().enumerate() {
                visit(group, group_index, Some(*chart_type));
            }
        }
    }

    fn make_tooltip_category(
        &self,
        group_index: usize,
        index: usize,
        is_vertical: bool,
    ) -> Option<String> {
        let category = self.tooltip_category(group_index)?;
        match self.y_categories.get(index) {
            Some(y_category) if is_vertical => Some(format!("{category}, {y_category}")),
            Some(y_category) => Some(format!("{y_category}, {category}")),
            None => Some(category),
        }
    }

    fn raw_category(&self, group_index: usize) -> Option<String> {
        self.categories.get(group_index).cloned()
    }

    fn is_coordinate_type(&self) -> bool {
        self.coordinate_type
    }
}
