//! Physics module
//!
//! Minimal 2D physics primitives for the arena.
//!
//! # Unit System
//!
//! Distances are canvas pixels and all rates are *per tick*: the simulation
//! advances in fixed frames, so velocities are pixels/tick and gravity is
//! pixels/tick².
//!
//! # Submodules
//!
//! - [`collision`] - Axis-aligned rectangle overlap tests

pub mod collision;

pub use collision::Aabb2;
