//! Fitting a variable number of result tiles into the display area.
//!
//! Tiles start large and shrink by a constant factor until the grid fits
//! vertically. The shrink stops at the configured floor, where an
//! overflowing plan is accepted so the loop always terminates.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Pixel size of the area available for tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl AreaSize {
    /// Create an area size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Position of a tile in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Index into the roll results.
    pub index: usize,
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub column: u32,
}

/// A grid that holds every tile of one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Edge length of a tile in pixels.
    pub tile_size: u32,
    /// Tiles per full row.
    pub columns: u32,
    /// Number of rows, the last possibly partial.
    pub rows: u32,
    /// Gap between neighbouring tiles.
    pub padding: u32,
    /// Number of tiles placed.
    pub tile_count: usize,
    /// True when the floor was reached and the grid is taller than the area.
    pub overflow: bool,
}

/// Compute a grid for `tile_count` tiles of a die with `sides` sides.
pub fn compute_layout(
    area: AreaSize,
    tile_count: usize,
    sides: u32,
    config: &LayoutConfig,
) -> LayoutPlan {
    let padding = config.padding;
    let floor = config.floor();
    let mut tile_size = config.start_tile(sides);
    let mut steps = 0u32;

    loop {
        let pitch = tile_size + padding;
        let columns = (area.width / pitch).max(1);
        let rows = tile_count.div_ceil(columns as usize) as u32;
        let fits = u64::from(rows) * u64::from(pitch) <= u64::from(area.height);

        if fits || tile_size <= floor {
            if !fits {
                log::debug!(
                    "layout for {tile_count} tiles overflows {}x{} at floor {floor}",
                    area.width,
                    area.height
                );
            }
            log::trace!("layout settled after {steps} shrink steps: {tile_size}px, {columns}x{rows}");
            return LayoutPlan {
                tile_size,
                columns,
                rows,
                padding,
                tile_count,
                overflow: !fits,
            };
        }

        let shrunk = (f64::from(tile_size) * config.shrink_factor) as u32;
        tile_size = shrunk.clamp(floor, tile_size - 1);
        steps += 1;
    }
}

impl LayoutPlan {
    /// Row-major cell assignment for every tile, in result order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let columns = self.columns.max(1) as usize;
        (0..self.tile_count).map(move |index| GridCell {
            index,
            row: (index / columns) as u32,
            column: (index % columns) as u32,
        })
    }

    /// Number of tiles in the given row.
    pub fn tiles_in_row(&self, row: u32) -> u32 {
        let before = row as usize * self.columns as usize;
        self.tile_count
            .saturating_sub(before)
            .min(self.columns as usize) as u32
    }

    /// Distance between the origins of neighbouring tiles.
    pub fn pitch(&self) -> u32 {
        self.tile_size + self.padding
    }

    /// Top-left pixel of a tile inside an area of width `area_width`.
    ///
    /// Each row is centered horizontally; every tile keeps half the padding
    /// as margin on all sides.
    pub fn tile_origin(&self, cell: GridCell, area_width: u32) -> (f32, f32) {
        let pitch = self.pitch() as f32;
        let row_width = self.tiles_in_row(cell.row) as f32 * pitch;
        let left = ((area_width as f32 - row_width) / 2.0).max(0.0);
        let margin = self.padding as f32 / 2.0;
        (
            left + cell.column as f32 * pitch + margin,
            cell.row as f32 * pitch + margin,
        )
    }
}
