use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{SeriesItem, TooltipValueMap};
use crate::tooltip::datum::{LabelFormatterFn, TooltipDatum, make_tooltip_datum};
use crate::tooltip::template::{
    TooltipItem, escape_html, tpl_boxplot_default, tpl_boxplot_outlier, tpl_coordinate,
    tpl_default, tpl_pie,
};
use crate::tooltip::{ChartType, LegendLabels, TooltipAlign, TooltipDataSource};

/// Value types listed under coordinate tooltips.
pub const COORDINATE_VALUE_TYPES: [&str; 3] = ["x", "y", "r"];

/// Custom tooltip template: `(category, item, raw_category) -> html`.
pub type TooltipTemplateFn =
    Arc<dyn Fn(&str, &TooltipItem, Option<&str>) -> String + Send + Sync + 'static>;

/// Tooltip data indexed as `[chart_type][group][item]`.
pub type TooltipData = IndexMap<ChartType, Vec<Vec<TooltipDatum>>>;

/// Hovered item address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipIndexes {
    pub group_index: usize,
    pub index: usize,
    #[serde(default)]
    pub outlier_index: Option<usize>,
}

impl TooltipIndexes {
    #[must_use]
    pub fn new(group_index: usize, index: usize) -> Self {
        Self {
            group_index,
            index,
            outlier_index: None,
        }
    }

    #[must_use]
    pub fn with_outlier(mut self, outlier_index: usize) -> Self {
        self.outlier_index = Some(outlier_index);
        self
    }
}

/// Payload of the user-facing "tooltip shown" event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowTooltipParams {
    pub chart_type: ChartType,
    pub legend: String,
    pub legend_index: usize,
    pub index: usize,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Tooltip showing one hovered item at a time.
pub struct NormalTooltip {
    chart_type: ChartType,
    chart_types: Vec<ChartType>,
    is_vertical: bool,
    suffix: String,
    align: Option<TooltipAlign>,
    coordinate_type: bool,
    template: Option<TooltipTemplateFn>,
    label_formatter: Option<LabelFormatterFn>,
    data: TooltipData,
}

impl fmt::Debug for NormalTooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalTooltip")
            .field("chart_type", &self.chart_type)
            .field("chart_types", &self.chart_types)
            .field("is_vertical", &self.is_vertical)
            .field("suffix", &self.suffix)
            .field("align", &self.align)
            .field("coordinate_type", &self.coordinate_type)
            .field("has_template", &self.template.is_some())
            .field("has_label_formatter", &self.label_formatter.is_some())
            .finish_non_exhaustive()
    }
}

impl NormalTooltip {
    #[must_use]
    pub fn new(chart_type: ChartType, is_vertical: bool) -> Self {
        Self {
            chart_type,
            chart_types: Vec::new(),
            is_vertical,
            suffix: String::new(),
            align: None,
            coordinate_type: false,
            template: None,
            label_formatter: None,
            data: TooltipData::new(),
        }
    }

    /// Member chart types of a combo chart.
    #[must_use]
    pub fn with_chart_types(mut self, chart_types: Vec<ChartType>) -> Self {
        self.chart_types = chart_types;
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: Option<TooltipAlign>) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: TooltipTemplateFn) -> Self {
        self.template = Some(template);
        self
    }

    #[must_use]
    pub fn with_label_formatter(mut self, formatter: LabelFormatterFn) -> Self {
        self.label_formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn align(&self) -> Option<TooltipAlign> {
        self.align
    }

    #[must_use]
    pub fn data(&self) -> &TooltipData {
        &self.data
    }

    /// Fills in the align option when the host did not configure one.
    pub fn set_default_tooltip_position_option(&mut self) {
        if self.align.is_some() {
            return;
        }
        self.align = Some(TooltipAlign::default_for(self.is_vertical));
    }

    /// Rebuilds tooltip data from the data source.
    pub fn update_tooltip_data(&mut self, source: &dyn TooltipDataSource) {
        self.coordinate_type = source.is_coordinate_type();
        self.data = self.make_tooltip_data(source);
        debug!(
            chart_type = %self.chart_type,
            chart_type_count = self.data.len(),
            "tooltip data rebuilt"
        );
    }

    /// Builds per chart type, per group, per item tooltip datums.
    #[must_use]
    pub fn make_tooltip_data(&self, source: &dyn TooltipDataSource) -> TooltipData {
        let legend_labels = source.legend_labels();
        let is_pivot = self.chart_type.is_treemap_chart();
        let mut tooltip_data = TooltipData::new();

        source.each_by_series_group(is_pivot, &mut |group, group_index, chart_type| {
            let chart_type = chart_type.unwrap_or(self.chart_type);
            let labels = match &legend_labels {
                LegendLabels::Single(labels) => Some(labels),
                LegendLabels::PerChartType(labels) => labels.get(&chart_type),
            };
            let row: Vec<TooltipDatum> = group
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let category =
                        source.make_tooltip_category(group_index, index, self.is_vertical);
                    let legend = labels.and_then(|labels| labels.get(index));
                    self.make_tooltip_datum(legend.map(String::as_str), category.as_deref(), item)
                })
                .collect();

            tooltip_data.entry(chart_type).or_default().push(row);
        });

        tooltip_data
    }

    #[must_use]
    pub fn make_tooltip_datum(
        &self,
        legend_label: Option<&str>,
        category: Option<&str>,
        item: &SeriesItem,
    ) -> TooltipDatum {
        make_tooltip_datum(legend_label, category, item, self.label_formatter.as_ref())
    }

    /// `<div>x: 3</div>`-style rows for every present value type.
    #[must_use]
    pub fn make_html_for_value_types(values: &TooltipValueMap, value_types: &[&str]) -> String {
        value_types
            .iter()
            .filter_map(|value_type| {
                values
                    .value_type(value_type)
                    .filter(|value| !value.is_empty())
                    .map(|value| format!("<div>{value_type}: {}</div>", escape_html(value)))
            })
            .collect()
    }

    /// Selects the built-in template for this chart and renders `item`.
    #[must_use]
    pub fn make_tooltip_html(&self, category: &str, item: &TooltipItem) -> String {
        if self.chart_type.is_boxplot_chart() {
            let outlier = item
                .outlier_index
                .and_then(|outlier_index| item.values.outliers.get(outlier_index));
            return match outlier {
                Some(outlier) => tpl_boxplot_outlier(category, item, &outlier.label),
                None => tpl_boxplot_default(category, item),
            };
        }

        let is_pie_or_pie_donut_combo = self.chart_type.is_pie_chart()
            || self.chart_type.is_pie_donut_combo_chart(&self.chart_types);

        if is_pie_or_pie_donut_combo {
            tpl_pie(category, item)
        } else if self.coordinate_type {
            tpl_coordinate(category, item)
        } else {
            tpl_default(category, item)
        }
    }

    /// Renders the tooltip for one hovered item.
    ///
    /// Returns `None` when no datum exists at `indexes`.
    #[must_use]
    pub fn make_single_tooltip_html(
        &self,
        source: &dyn TooltipDataSource,
        chart_type: ChartType,
        indexes: TooltipIndexes,
    ) -> Option<String> {
        let datum = self
            .data
            .get(&chart_type)?
            .get(indexes.group_index)?
            .get(indexes.index)?;

        let outlier_index = if self.chart_type.is_boxplot_chart() {
            indexes.outlier_index
        } else {
            None
        };

        let item = TooltipItem {
            legend: datum.legend.clone(),
            label: datum.label.clone(),
            category: datum.category.clone(),
            suffix: self.suffix.clone(),
            value_types: Self::make_html_for_value_types(&datum.values, &COORDINATE_VALUE_TYPES),
            values: datum.values.clone(),
            outlier_index,
        };
        trace!(
            chart_type = %chart_type,
            group_index = indexes.group_index,
            index = indexes.index,
            "render single tooltip"
        );

        let html = match &self.template {
            Some(template) => {
                let raw_category = source.raw_category(indexes.group_index);
                template(&item.category, &item, raw_category.as_deref())
            }
            None => self.make_tooltip_html(&item.category, &item),
        };
        Some(html)
    }

    /// Builds the "tooltip shown" event payload.
    ///
    /// Returns `None` when the legend index does not resolve.
    #[must_use]
    pub fn make_show_tooltip_params(
        &self,
        source: &dyn TooltipDataSource,
        indexes: TooltipIndexes,
        extra: serde_json::Map<String, serde_json::Value>,
    ) -> Option<ShowTooltipParams> {
        let legend_index = indexes.index;
        let legend_item = source.legend_item(legend_index)?;

        Some(ShowTooltipParams {
            chart_type: legend_item.chart_type,
            legend: legend_item.label,
            legend_index,
            index: indexes.group_index,
            extra,
        })
    }
}
