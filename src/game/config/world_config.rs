//! World Configuration
//!
//! Every tunable constant of the simulation in one serde-friendly struct.
//! `Default` returns the standard arena: an 800x600 world, a 40x60 player
//! spawned at (400, 300), 100 starting materials and a 40 px build grid.
//!
//! Configs can be loaded from JSON; every field is optional and falls back to
//! its default, so a file only needs to list what it changes:
//!
//! ```json
//! { "ground_offset": 80.0, "combat": { "enforce_fire_rate": false } }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::game::catalog::{BuildingCatalog, WeaponArchetype, WeaponCatalog};
use crate::game::economy::STARTING_MATERIALS;
use crate::game::state::ResourceKind;
use crate::world::{GridConfig, WorldBounds};

/// How the player reacts to overlapping a block after moving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionResponse {
    /// Any overlap sends the player back to its pre-move position on both
    /// axes. A player standing inside a freshly placed block cannot move.
    #[default]
    FullRevert,
    /// Like `FullRevert`, but blocks that already overlapped the pre-move
    /// body are ignored, so the player can walk out of them.
    AllowEscape,
}

/// Per-tick movement constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration added to vertical velocity each tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_impulse: f32,
    /// Horizontal displacement per tick while a move control is held
    pub move_speed: f32,
    pub collision_response: CollisionResponse,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: -12.0,
            move_speed: 5.0,
            collision_response: CollisionResponse::FullRevert,
        }
    }
}

/// Player body and spawn point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Top-left corner at spawn
    pub spawn: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(400.0, 300.0),
            width: 40.0,
            height: 60.0,
            health: 100,
        }
    }
}

/// What happens to an in-flight reload when the player switches weapons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadSwitchPolicy {
    /// The reload keeps running and refills the weapon that was active when it
    /// started, even if another weapon is selected by then.
    #[default]
    Continue,
    /// Switching weapons aborts the reload; no pool is refilled.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Reload duration for weapons without their own `reload_ms`
    pub default_reload_ms: u64,
    /// Gate shots by each weapon's `fire_rate_ms`
    pub enforce_fire_rate: bool,
    pub reload_switch_policy: ReloadSwitchPolicy,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            default_reload_ms: 2000,
            enforce_fire_rate: true,
            reload_switch_policy: ReloadSwitchPolicy::Continue,
        }
    }
}

/// A resource node present when the world is created.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceSeed {
    pub position: Vec2,
    pub kind: ResourceKind,
    pub health: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Max distance from the player's center to a node's position
    pub interaction_radius: f32,
    /// Health removed from each node in range per tick
    pub harvest_rate: i32,
    /// Materials credited when a node is depleted
    pub harvest_reward: i32,
    pub nodes: Vec<ResourceSeed>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            interaction_radius: 60.0,
            harvest_rate: 1,
            harvest_reward: 25,
            nodes: vec![
                ResourceSeed {
                    position: Vec2::new(120.0, 530.0),
                    kind: ResourceKind::Tree,
                    health: 100,
                },
                ResourceSeed {
                    position: Vec2::new(260.0, 530.0),
                    kind: ResourceKind::Rock,
                    health: 150,
                },
                ResourceSeed {
                    position: Vec2::new(620.0, 530.0),
                    kind: ResourceKind::Tree,
                    health: 100,
                },
                ResourceSeed {
                    position: Vec2::new(730.0, 530.0),
                    kind: ResourceKind::Metal,
                    health: 200,
                },
            ],
        }
    }
}

/// Central configuration for a simulation session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub bounds: WorldBounds,
    /// Distance of the ground line above the bottom edge of the world
    pub ground_offset: f32,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub starting_materials: i32,
    pub grid: GridConfig,
    pub weapons: WeaponCatalog,
    pub buildings: BuildingCatalog,
    pub combat: CombatConfig,
    pub resources: ResourceConfig,
    /// Seed for projectile jitter; `None` seeds from the OS
    pub rng_seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: WorldBounds::default(),
            ground_offset: 50.0,
            physics: PhysicsConfig::default(),
            player: PlayerConfig::default(),
            starting_materials: STARTING_MATERIALS,
            grid: GridConfig::default(),
            weapons: WeaponCatalog::default(),
            buildings: BuildingCatalog::default(),
            combat: CombatConfig::default(),
            resources: ResourceConfig::default(),
            rng_seed: None,
        }
    }
}

impl WorldConfig {
    /// Y coordinate of the ground line. The player's lower edge never passes it.
    pub fn ground_y(&self) -> f32 {
        self.bounds.height - self.ground_offset
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.bounds.width <= 0.0 || self.bounds.height <= 0.0 {
            return invalid(format!(
                "world size must be positive, got {}x{}",
                self.bounds.width, self.bounds.height
            ));
        }
        if !(0.0..self.bounds.height).contains(&self.ground_offset) {
            return invalid(format!(
                "ground_offset {} must lie within the world height {}",
                self.ground_offset, self.bounds.height
            ));
        }
        if self.player.width <= 0.0 || self.player.height <= 0.0 {
            return invalid("player size must be positive".to_string());
        }
        if self.grid.cell_size <= 0.0 {
            return invalid(format!(
                "grid cell_size must be positive, got {}",
                self.grid.cell_size
            ));
        }
        if self.physics.move_speed < 0.0 {
            return invalid("move_speed must not be negative".to_string());
        }

        if self.weapons.is_empty() {
            return invalid("weapon catalog is empty".to_string());
        }
        if let Some(id) = self.weapons.duplicate_id() {
            return invalid(format!("duplicate weapon id {id}"));
        }
        for weapon in self.weapons.iter() {
            if !weapon.projectile_speed.is_finite() {
                return invalid(format!(
                    "weapon {} has a non-finite projectile_speed",
                    weapon.name
                ));
            }
            if weapon.ammo_capacity == 0 {
                return invalid(format!("weapon {} has zero ammo capacity", weapon.name));
            }
            if let WeaponArchetype::Spread {
                pellets,
                speed_jitter,
            } = weapon.archetype
            {
                if pellets == 0 {
                    return invalid(format!("spread weapon {} has zero pellets", weapon.name));
                }
                if !speed_jitter.is_finite() || speed_jitter < 0.0 {
                    return invalid(format!(
                        "spread weapon {} needs a finite, non-negative speed_jitter",
                        weapon.name
                    ));
                }
            }
        }

        if self.buildings.is_empty() {
            return invalid("building catalog is empty".to_string());
        }
        if let Some(id) = self.buildings.duplicate_id() {
            return invalid(format!("duplicate building id {id}"));
        }
        if self.buildings.iter().any(|b| b.material_cost < 0) {
            return invalid("building costs must not be negative".to_string());
        }

        if self.resources.harvest_rate <= 0 {
            return invalid("harvest_rate must be positive".to_string());
        }
        if self.resources.interaction_radius < 0.0 {
            return invalid("interaction_radius must not be negative".to_string());
        }

        Ok(())
    }
}
