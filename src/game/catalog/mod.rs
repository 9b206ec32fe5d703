//! Catalog Module
//!
//! Immutable stat tables for weapons and buildings.

pub mod buildings;
pub mod weapons;

pub use buildings::{BuildingCatalog, BuildingDef, BuildingId, BuildingShape};
pub use weapons::{WeaponArchetype, WeaponCatalog, WeaponDef, WeaponId};
