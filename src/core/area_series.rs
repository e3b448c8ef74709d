use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Vertex in pixel coordinates used by area geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Geometry for one area series row.
///
/// `line_points` follows the item positions.
/// `fill_polygon` is an explicitly closed polygon against the baseline: the
/// start tops for range rows, the zero line otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub fill_polygon: Vec<AreaVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects one legend row of positions into area geometry.
#[must_use]
pub fn project_area_geometry(positions: &[Position], zero_top: f64) -> AreaGeometry {
    let Some(first) = positions.first() else {
        return AreaGeometry::empty();
    };

    let line_points: Vec<AreaVertex> = positions
        .iter()
        .map(|position| AreaVertex {
            x: position.left,
            y: position.top,
        })
        .collect();

    let mut fill_polygon = Vec::with_capacity(line_points.len() * 2 + 1);
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.extend(positions.iter().rev().map(|position| AreaVertex {
        x: position.left,
        y: position.start_top.unwrap_or(zero_top),
    }));
    // Repeat the first vertex so consumers can draw a closed polygon without
    // implicit closure rules.
    fill_polygon.push(AreaVertex {
        x: first.left,
        y: first.top,
    });

    AreaGeometry {
        line_points,
        fill_polygon,
    }
}
