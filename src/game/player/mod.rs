//! Player Module
//!
//! The single player entity: body, facing, jump state, health, selected
//! building and the weapon loadout.

pub mod loadout;

pub use loadout::{Loadout, ReloadTimer, WeaponSlot};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::game::catalog::{BuildingId, WeaponId};
use crate::game::config::WorldConfig;
use crate::physics::Aabb2;

/// Horizontal facing. Drives shot direction and ramp orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Player entity. Created once per session and never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
    /// Vertical velocity in pixels per tick (negative = up)
    pub vertical_velocity: f32,
    pub facing: Facing,
    pub health: i32,
    /// Cleared by a jump, restored on ground contact
    pub can_jump: bool,
    pub selected_building: BuildingId,
    pub loadout: Loadout,
}

impl Player {
    /// Spawn a player as described by `config`.
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            position: config.player.spawn,
            size: Vec2::new(config.player.width, config.player.height),
            vertical_velocity: 0.0,
            facing: Facing::Right,
            health: config.player.health,
            can_jump: false,
            selected_building: config.buildings.first().map(|b| b.id).unwrap_or_default(),
            loadout: Loadout::from_catalog(&config.weapons),
        }
    }

    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_pos_size(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Y coordinate of the player's lower edge.
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Projectile spawn point: the leading vertical edge at half height.
    pub fn muzzle(&self) -> Vec2 {
        let x = match self.facing {
            Facing::Right => self.position.x + self.size.x,
            Facing::Left => self.position.x,
        };
        Vec2::new(x, self.position.y + self.size.y * 0.5)
    }

    pub fn current_weapon(&self) -> WeaponId {
        self.loadout.current()
    }

    pub fn ammo(&self) -> u32 {
        self.loadout.ammo()
    }

    pub fn is_reloading(&self) -> bool {
        self.loadout.is_reloading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_from_default_config() {
        let player = Player::new(&WorldConfig::default());
        assert_eq!(player.position, Vec2::new(400.0, 300.0));
        assert_eq!(player.size, Vec2::new(40.0, 60.0));
        assert_eq!(player.facing, Facing::Right);
        assert_eq!(player.health, 100);
        assert_eq!(player.current_weapon(), 1);
        assert_eq!(player.selected_building, 1);
        assert_eq!(player.ammo(), 12);
    }

    #[test]
    fn test_muzzle_follows_facing() {
        let mut player = Player::new(&WorldConfig::default());
        assert_eq!(player.muzzle(), Vec2::new(440.0, 330.0));

        player.facing = Facing::Left;
        assert_eq!(player.muzzle(), Vec2::new(400.0, 330.0));
    }

    #[test]
    fn test_center_and_bottom() {
        let player = Player::new(&WorldConfig::default());
        assert_eq!(player.center(), Vec2::new(420.0, 330.0));
        assert_eq!(player.bottom(), 360.0);
    }
}
