//! Brickfire Engine Library
//!
//! A 2D action/building arena simulation. The engine-level modules are small,
//! game-agnostic building blocks; the game itself lives in [`game`].
//!
//! # Modules
//!
//! - [`input`] - Abstract per-frame control snapshot and held-key tracking
//! - [`physics`] - Axis-aligned boxes and overlap tests
//! - [`world`] - World bounds and grid snapping
//! - [`game`] - Simulation state, systems, catalogs and the frame driver
//!
//! # Example
//!
//! ```ignore
//! use brickfire_engine::game::{FrameDriver, NullRenderer, World, WorldConfig};
//! use brickfire_engine::input::InputSnapshot;
//! use std::time::Duration;
//!
//! let world = World::new(WorldConfig::default());
//! let mut driver = FrameDriver::new(world, NullRenderer);
//!
//! let fire = InputSnapshot { fire: true, ..InputSnapshot::idle() };
//! let report = driver.frame(&fire, Duration::from_millis(16));
//! println!("spawned {} projectiles", report.projectiles_spawned);
//! ```

pub mod input;
pub mod physics;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export world types for convenience
pub use world::{CellCoord, GridConfig, WorldBounds};
// Re-export commonly used input types
pub use input::{Control, ControlState, InputSnapshot};
// Re-export collision primitive
pub use physics::Aabb2;
