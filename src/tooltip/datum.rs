use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{SeriesItem, TooltipValueMap};
use crate::tooltip::template::escape_html;

/// Separator placed between the legend and the label in tooltips.
pub const LABEL_PREFIX: &str = ":&nbsp;";

/// Presentation record of one series item, prepared once per data update.
///
/// `label` is markup: the item label is HTML-escaped and prefixed with the
/// optional legend separator. `legend` and `category` stay plain text and are
/// escaped by the templates, so markup passed in labels, legends or
/// categories is shown literally. Hosts that need markup in the label use a
/// label formatter, whose output is not escaped again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipDatum {
    pub legend: String,
    pub label: String,
    pub category: String,
    pub values: TooltipValueMap,
}

/// Rewrites a datum before the category is attached.
///
/// Receives the source item, the default datum and the label prefix in use.
pub type LabelFormatterFn =
    Arc<dyn Fn(&SeriesItem, TooltipDatum, &str) -> TooltipDatum + Send + Sync + 'static>;

/// Builds the tooltip datum for one item.
///
/// `tooltip_label` wins over the prefixed label. Both are HTML-escaped before
/// the formatter runs.
pub fn make_tooltip_datum(
    legend_label: Option<&str>,
    category: Option<&str>,
    item: &SeriesItem,
    label_formatter: Option<&LabelFormatterFn>,
) -> TooltipDatum {
    let legend = legend_label.unwrap_or_default();
    let label_prefix = if !legend.is_empty() && !item.label.is_empty() {
        LABEL_PREFIX
    } else {
        ""
    };

    let label = match item.tooltip_label.as_deref() {
        Some(tooltip_label) if !tooltip_label.is_empty() => escape_html(tooltip_label),
        _ if !item.label.is_empty() => format!("{label_prefix}{}", escape_html(&item.label)),
        _ => String::new(),
    };

    let mut datum = TooltipDatum {
        legend: legend.to_owned(),
        label,
        category: String::new(),
        values: TooltipValueMap::default(),
    };

    if let Some(formatter) = label_formatter {
        datum = formatter(item, datum, label_prefix);
    }

    datum.category = category.unwrap_or_default().to_owned();
    datum.values = item.pick_value_map_for_tooltip();
    datum
}
