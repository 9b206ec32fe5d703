//! World Module
//!
//! World-space configuration: grid snapping and arena bounds.

pub mod grid;

pub use grid::{CellCoord, GridConfig, WorldBounds};
