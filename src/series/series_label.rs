use crate::core::LabelPosition;
use crate::tooltip::template::escape_html;

#[must_use]
pub fn css_text_for_line_type(position: LabelPosition) -> String {
    format!("left:{}%;top:{}%", position.left, position.top)
}

/// HTML of one series value label.
///
/// Start labels of range items carry `data-range="true"` so streaming updates
/// can remove them together with their end label.
#[must_use]
pub fn make_series_label_html(
    position: LabelPosition,
    label: &str,
    group_index: usize,
    index: usize,
    is_start: bool,
) -> String {
    let range_attr = if is_start { r#" data-range="true""# } else { "" };
    format!(
        r#"<div class="chart-series-label" style="{}" data-group-index="{group_index}" data-index="{index}"{range_attr}>{}</div>"#,
        css_text_for_line_type(position),
        escape_html(label)
    )
}
