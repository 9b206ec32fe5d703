//! Game systems — self-contained modules that own state and logic.

pub mod building_system;
pub mod collision_system;
pub mod combat_system;
pub mod movement_system;
pub mod projectile_system;
pub mod resource_system;

pub use building_system::{BuildOutcome, BuildingSystem};
pub use collision_system::CollisionSystem;
pub use combat_system::{CombatSystem, CombatUpdate, FireOutcome};
pub use movement_system::MovementSystem;
pub use projectile_system::ProjectileSystem;
pub use resource_system::{HarvestReport, ResourceSystem};
