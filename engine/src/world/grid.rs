//! Grid Configuration Module
//!
//! Cell snapping and world bounds for the 2D arena.
//!
//! ## Coordinates
//! Screen-style coordinates: origin at the top-left corner, +X to the right,
//! +Y downwards. 1 unit = 1 pixel of the default 800x600 canvas.
//!
//! ## Snapping
//! Placement snaps *down* (floor division), so every point inside a cell maps
//! to the cell's top-left corner. This differs from rounding to the nearest
//! line: (79, 79) with a 40 px cell lands in cell (1, 1) at (40, 40).

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Integer index of a grid cell (column, row).
pub type CellCoord = IVec2;

/// Grid configuration for structure placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length of one square cell
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 40.0 }
    }
}

impl GridConfig {
    /// Create a grid with the given cell size.
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Cell index containing `pos` (floor division on both axes).
    pub fn cell_of(&self, pos: Vec2) -> CellCoord {
        IVec2::new(
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    /// World-space top-left corner of a cell.
    pub fn cell_origin(&self, cell: CellCoord) -> Vec2 {
        cell.as_vec2() * self.cell_size
    }

    /// Snap a position down to the top-left corner of its cell.
    pub fn snap_to_grid(&self, pos: Vec2) -> Vec2 {
        self.cell_origin(self.cell_of(pos))
    }
}

/// Rectangular world extent `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Inclusive containment test. A point exactly on an edge is still inside.
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}
