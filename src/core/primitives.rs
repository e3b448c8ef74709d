use chrono::DateTime;
use chrono::format::{Item, StrftimeItems};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::error::{ChartError, ChartResult};

pub const SERIES_EXPAND_SIZE: f64 = 10.0;
pub const SERIES_LABEL_PADDING: f64 = 5.0;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Multiplies two floats through `Decimal` so ratios such as `0.1 * 3`
/// do not pick up binary rounding noise.
///
/// Falls back to plain float multiplication when either operand is outside
/// the decimal range.
#[must_use]
pub fn precise_multiply(a: f64, b: f64) -> f64 {
    match (Decimal::from_f64(a), Decimal::from_f64(b)) {
        (Some(a_dec), Some(b_dec)) => a_dec
            .checked_mul(b_dec)
            .and_then(|product| decimal_to_f64(product, "product").ok())
            .unwrap_or(a * b),
        _ => a * b,
    }
}

/// Formats a unix timestamp in milliseconds with a `chrono` strftime pattern.
///
/// Returns `None` when the timestamp is out of range or the pattern is invalid.
#[must_use]
pub fn format_unix_millis(millis: i64, pattern: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let time = DateTime::from_timestamp_millis(millis)?;
    Some(time.format_with_items(items.into_iter()).to_string())
}
