use serde::{Deserialize, Serialize};

use crate::core::primitives::SERIES_LABEL_PADDING;
use crate::core::{Dimension, Position};
use crate::error::ChartResult;

/// Font settings used to size series value labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelTheme {
    pub font_size_px: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

fn default_font_family() -> String {
    "Verdana".to_owned()
}

impl Default for LabelTheme {
    fn default() -> Self {
        Self {
            font_size_px: 11.0,
            font_family: default_font_family(),
        }
    }
}

/// Measures rendered label text.
///
/// Hosts with access to real text metrics plug them in here; headless use
/// falls back to `EstimatedLabelMeasurer`.
pub trait LabelMeasurer {
    fn label_width(&self, text: &str, theme: &LabelTheme) -> f64;
    fn label_height(&self, text: &str, theme: &LabelTheme) -> f64;
}

/// Width estimate from per-glyph advance factors of a proportional sans font.
///
/// Values are advances in em. Series labels are mostly numbers, so digits and
/// separators get their own factors; other ASCII uses an average letter and
/// non-ASCII glyphs a full em.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedLabelMeasurer;

impl EstimatedLabelMeasurer {
    fn glyph_advance_em(ch: char) -> f64 {
        match ch {
            '0'..='9' => 0.56,
            '.' | ',' | ':' | '\'' => 0.28,
            '-' | '+' => 0.58,
            '%' => 0.89,
            ' ' => 0.28,
            'A'..='Z' => 0.67,
            _ if ch.is_ascii() => 0.5,
            _ => 1.0,
        }
    }
}

impl LabelMeasurer for EstimatedLabelMeasurer {
    fn label_width(&self, text: &str, theme: &LabelTheme) -> f64 {
        let em: f64 = text.chars().map(Self::glyph_advance_em).sum();
        (em * theme.font_size_px).ceil()
    }

    fn label_height(&self, _text: &str, theme: &LabelTheme) -> f64 {
        (theme.font_size_px * 1.2).ceil()
    }
}

/// Label placement in percent of the extended series area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPosition {
    pub left: f64,
    pub top: f64,
}

/// Top pixel of a value label relative to its point.
///
/// Stacked series center the label between the point and its start; otherwise
/// positive end labels and negative start labels go above the point.
#[must_use]
pub fn calculate_label_position_top(
    base: Position,
    value: f64,
    label_height: f64,
    is_start: bool,
    stacked: bool,
) -> f64 {
    let base_top = base.top;

    if stacked {
        let start_top = base.start_top.unwrap_or(base_top);
        (start_top + base_top - label_height) / 2.0 + 1.0
    } else if (value >= 0.0 && !is_start) || (value < 0.0 && is_start) {
        base_top - label_height - SERIES_LABEL_PADDING
    } else {
        base_top + SERIES_LABEL_PADDING
    }
}

/// Input for placing one series label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub base: Position,
    pub label_width: f64,
    pub label_height: f64,
    pub value: f64,
    pub is_start: bool,
    pub stacked: bool,
}

pub fn make_label_position(
    placement: LabelPlacement,
    extended_dimension: Dimension,
) -> ChartResult<LabelPosition> {
    extended_dimension.validate()?;

    let top = calculate_label_position_top(
        placement.base,
        placement.value,
        placement.label_height,
        placement.is_start,
        placement.stacked,
    );

    Ok(LabelPosition {
        left: (placement.base.left - placement.label_width / 2.0) / extended_dimension.width
            * 100.0,
        top: top / extended_dimension.height * 100.0,
    })
}
