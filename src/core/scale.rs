use serde::{Deserialize, Serialize};

use crate::core::AxisLimit;
use crate::core::primitives::SERIES_EXPAND_SIZE;
use crate::error::{ChartError, ChartResult};

/// Maps raw values to ratios of an axis limit and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioScale {
    limit: AxisLimit,
}

impl RatioScale {
    pub fn new(limit: AxisLimit) -> ChartResult<Self> {
        if !limit.min.is_finite() || !limit.max.is_finite() || limit.span() == 0.0 {
            return Err(ChartError::InvalidData(
                "ratio scale limit must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self { limit })
    }

    #[must_use]
    pub fn limit(self) -> AxisLimit {
        self.limit
    }

    pub fn value_to_ratio(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok((value - self.limit.min) / self.limit.span())
    }

    pub fn ratio_to_value(self, ratio: f64) -> ChartResult<f64> {
        if !ratio.is_finite() {
            return Err(ChartError::InvalidData("ratio must be finite".to_owned()));
        }
        Ok(self.limit.min + ratio * self.limit.span())
    }
}

/// Pixel distances from the zero line to the top (`to_max`) and bottom
/// (`to_min`) of an area, measured along the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZeroPointDistance {
    pub to_max: f64,
    pub to_min: f64,
}

/// Locates the zero line inside an axis of `size` pixels.
///
/// Limits that do not contain zero pin the line to the nearest edge:
/// all-positive limits give `to_max = size`, all-negative limits give zeros.
#[must_use]
pub fn limit_distance_from_zero_point(size: f64, limit: AxisLimit) -> ZeroPointDistance {
    let AxisLimit { min, max } = limit;
    let distance = max - min;

    if min <= 0.0 && max >= 0.0 {
        if distance == 0.0 {
            return ZeroPointDistance::default();
        }
        ZeroPointDistance {
            to_max: (distance + min) / distance * size,
            to_min: (distance - max) / distance * size,
        }
    } else if min > 0.0 {
        ZeroPointDistance {
            to_max: size,
            to_min: 0.0,
        }
    } else {
        ZeroPointDistance::default()
    }
}

/// Top of the zero line used as the baseline of newly appended points.
#[must_use]
pub fn zero_top_for_adding_data(series_height: f64, y_limit: AxisLimit) -> f64 {
    limit_distance_from_zero_point(series_height, y_limit).to_max + SERIES_EXPAND_SIZE
}
