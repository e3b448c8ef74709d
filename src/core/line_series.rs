#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{SERIES_EXPAND_SIZE, precise_multiply};
use crate::core::{Dimension, Position, SeriesDataModel, SeriesGroup, SeriesItem, XAxisData};
use crate::error::{ChartError, ChartResult};

/// How category positions are laid out along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PositionMode {
    /// Evenly spaced categories. `aligned` puts the first and last category on
    /// the edges instead of centering each one in its slot.
    Default { aligned: bool },
    /// Continuous x ratios, scaled by the x axis zoom window.
    Coordinate { x_axis: XAxisData },
}

/// Positions indexed as `[legend][category]`.
pub type GroupPositions = Vec<Vec<Position>>;

fn resolve_width(dimension: Dimension, series_width: Option<f64>) -> f64 {
    series_width
        .filter(|width| width.is_finite() && *width != 0.0)
        .or(Some(dimension.width).filter(|width| width.is_finite()))
        .unwrap_or(0.0)
}

fn ratio_to_top(ratio: f64, height: f64) -> f64 {
    height - (ratio * height) + SERIES_EXPAND_SIZE
}

/// First left offset and category step for the default layout.
///
/// An empty series has no step; a single aligned category sits on the left
/// edge instead of dividing by zero.
#[must_use]
pub fn default_type_step(width: f64, group_count: usize, aligned: bool) -> (f64, f64) {
    let start = SERIES_EXPAND_SIZE;
    if group_count == 0 {
        return (start, 0.0);
    }

    let len = group_count as f64;
    if aligned {
        if group_count == 1 {
            return (start, 0.0);
        }
        (start, width / (len - 1.0))
    } else {
        let step = width / len;
        (start + step / 2.0, step)
    }
}

/// Positions for categorical (default) data.
///
/// `series_width` overrides the dimension width, which lets streaming updates
/// lay out one extra tick before the container actually grows.
#[must_use]
pub fn make_positions_for_default_type(
    model: &SeriesDataModel,
    dimension: Dimension,
    series_width: Option<f64>,
    aligned: bool,
) -> GroupPositions {
    let width = resolve_width(dimension, series_width);
    let height = dimension.height;
    let (start, step) = default_type_step(width, model.group_count(), aligned);

    let project_group = |group: &SeriesGroup| -> Vec<Position> {
        group
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let left = start + step * index as f64;
                let position = Position::new(left, ratio_to_top(item.ratio, height));
                match item.start_ratio() {
                    Some(start_ratio) => {
                        position.with_start_top(ratio_to_top(start_ratio, height))
                    }
                    None => position,
                }
            })
            .collect()
    };

    #[cfg(feature = "parallel-projection")]
    {
        model.pivot_groups().par_iter().map(project_group).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        model.pivot_groups().iter().map(project_group).collect()
    }
}

/// Positions for coordinate-type data (items carrying x/y ratios).
pub fn make_positions_for_coordinate_type(
    model: &SeriesDataModel,
    dimension: Dimension,
    series_width: Option<f64>,
    x_axis: XAxisData,
) -> ChartResult<GroupPositions> {
    let mut width = resolve_width(dimension, series_width);
    let height = dimension.height;
    let mut additional_left = 0.0;

    if let Some(size_ratio) = x_axis
        .size_ratio
        .filter(|ratio| *ratio != 0.0 && ratio.is_finite())
    {
        additional_left = precise_multiply(width, x_axis.position_ratio);
        width = precise_multiply(width, size_ratio);
    }

    let project_item = |item: &SeriesItem| -> ChartResult<Position> {
        let ratio_map = item.ratio_map().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "coordinate position requires a ratio map (item `{}`)",
                item.label
            ))
        })?;
        let position = Position::new(
            ratio_map.x * width + additional_left + SERIES_EXPAND_SIZE,
            ratio_to_top(ratio_map.y, height),
        );
        Ok(match ratio_map.start {
            Some(start) => position.with_start_top(ratio_to_top(start, height)),
            None => position,
        })
    };

    #[cfg(feature = "parallel-projection")]
    {
        model
            .pivot_groups()
            .par_iter()
            .map(|group| {
                group
                    .iter()
                    .map(project_item)
                    .collect::<ChartResult<Vec<Position>>>()
            })
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(model.legend_count());
        for group in model.pivot_groups() {
            let mut row = Vec::with_capacity(group.len());
            for item in group.iter() {
                row.push(project_item(item)?);
            }
            out.push(row);
        }
        Ok(out)
    }
}

/// Computes base positions for rendering a line-type graph.
pub fn make_basic_positions(
    model: &SeriesDataModel,
    dimension: Dimension,
    series_width: Option<f64>,
    mode: PositionMode,
) -> ChartResult<GroupPositions> {
    match mode {
        PositionMode::Default { aligned } => Ok(make_positions_for_default_type(
            model,
            dimension,
            series_width,
            aligned,
        )),
        PositionMode::Coordinate { x_axis } => {
            make_positions_for_coordinate_type(model, dimension, series_width, x_axis)
        }
    }
}
