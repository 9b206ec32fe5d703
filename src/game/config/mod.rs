//! Config Module
//!
//! Centralized configuration for world constants, catalogs and key bindings.

pub mod error;
pub mod input_config;
pub mod world_config;

pub use error::ConfigError;
pub use input_config::InputConfig;
pub use world_config::{
    CollisionResponse, CombatConfig, PhysicsConfig, PlayerConfig, ReloadSwitchPolicy,
    ResourceConfig, ResourceSeed, WorldConfig,
};
