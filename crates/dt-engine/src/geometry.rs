//! Regular polygon vertices for die tiles.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Fraction of the half-cell used as the circumradius.
const RADIUS_FRACTION: f32 = 0.85;

/// A point in tile-local pixel coordinates (origin at the top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset, growing downwards.
    pub y: f32,
}

/// Vertices of a regular polygon inscribed in a square cell.
///
/// The first vertex points straight up. Four-vertex shapes get an extra
/// quarter-turn offset so they render as an axis-aligned square.
/// `rotation` (radians) is added on top for spin frames.
pub fn regular_polygon_vertices(
    vertex_count: u32,
    cell_size: f32,
    rotation: f32,
) -> Result<Vec<Vertex>, GeometryError> {
    if vertex_count < 3 {
        return Err(GeometryError::Degenerate(vertex_count));
    }
    let center = cell_size / 2.0;
    let radius = center * RADIUS_FRACTION;
    let quirk = if vertex_count == 4 { FRAC_PI_4 } else { 0.0 };
    let offset = -FRAC_PI_2 + quirk + rotation;

    Ok((0..vertex_count)
        .map(|i| {
            let theta = TAU * i as f32 / vertex_count as f32 + offset;
            Vertex {
                x: center + radius * theta.cos(),
                y: center + radius * theta.sin(),
            }
        })
        .collect())
}
