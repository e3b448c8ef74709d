//! Built-in tooltip HTML templates.
//!
//! Plain text fields (legend, category, suffix, value labels) are escaped.
//! `label` and `value_types` are already markup: the label may carry the
//! `:&nbsp;` legend separator and value types are rendered `<div>` rows.

use crate::core::TooltipValueMap;

/// Everything a template may interpolate for one hovered item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipItem {
    pub legend: String,
    pub label: String,
    pub category: String,
    pub suffix: String,
    pub values: TooltipValueMap,
    pub outlier_index: Option<usize>,
    pub value_types: String,
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn category_visible(category: &str) -> &'static str {
    if category.is_empty() { "hide" } else { "show" }
}

fn category_row(category: &str) -> String {
    format!(
        r#"<div class="{}">{}</div>"#,
        category_visible(category),
        escape_html(category)
    )
}

pub fn tpl_default(category: &str, item: &TooltipItem) -> String {
    format!(
        r#"<div class="chart-default-tooltip">{}<div><span>{}</span><span>{}</span><span>{}</span></div></div>"#,
        category_row(category),
        escape_html(&item.legend),
        item.label,
        escape_html(&item.suffix)
    )
}

pub fn tpl_pie(category: &str, item: &TooltipItem) -> String {
    let ratio_label = item.values.ratio_label.as_deref().unwrap_or_default();
    let amount = if item.suffix.is_empty() {
        item.label.clone()
    } else {
        format!("{} {}", item.label, escape_html(&item.suffix))
    };
    format!(
        r#"<div class="chart-default-tooltip">{}<div><span>{}</span><span>{}</span><span>&nbsp;({})</span></div></div>"#,
        category_row(category),
        escape_html(&item.legend),
        escape_html(ratio_label),
        amount
    )
}

pub fn tpl_coordinate(category: &str, item: &TooltipItem) -> String {
    format!(
        r#"<div class="chart-default-tooltip">{}<div><span>{}</span><span>{}</span></div>{}</div>"#,
        category_row(category),
        escape_html(&item.legend),
        item.label,
        item.value_types
    )
}

pub fn tpl_boxplot_default(category: &str, item: &TooltipItem) -> String {
    let suffix = escape_html(&item.suffix);
    let rows: String = match &item.values.boxplot {
        Some(labels) => [
            ("Maximum", &labels.max),
            ("Upper Quartile", &labels.upper_quartile),
            ("Median", &labels.median),
            ("Lower Quartile", &labels.lower_quartile),
            ("Minimum", &labels.min),
        ]
        .iter()
        .map(|(name, value)| {
            format!(
                "<div><span>{name}: </span><span>{}</span><span>{suffix}</span></div>",
                escape_html(value)
            )
        })
        .collect(),
        None => String::new(),
    };

    format!(
        r#"<div class="chart-default-tooltip">{}<div><span>{}</span></div>{rows}</div>"#,
        category_row(category),
        escape_html(&item.legend)
    )
}

/// Outlier rows show the outlier's own label instead of the five-number summary.
pub fn tpl_boxplot_outlier(category: &str, item: &TooltipItem, outlier_label: &str) -> String {
    format!(
        r#"<div class="chart-default-tooltip">{}<div><span>{}</span></div><div><span>Outlier: </span><span>{}</span><span>{}</span></div></div>"#,
        category_row(category),
        escape_html(&item.legend),
        escape_html(outlier_label),
        escape_html(&item.suffix)
    )
}
