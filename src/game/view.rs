//! Render Views
//!
//! Read-only per-frame views handed to a renderer. They borrow the world, so a
//! renderer can draw the scene and HUD without copying entity collections and
//! without any way to mutate simulation state.

use std::fmt;
use std::time::Duration;

use glam::Vec2;

use crate::game::catalog::{BuildingId, WeaponId};
use crate::game::player::{Facing, Player};
use crate::game::state::{Block, Projectile, ResourceNode};
use crate::world::WorldBounds;

/// Player pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub health: i32,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            position: player.position,
            size: player.size,
            facing: player.facing,
            health: player.health,
        }
    }
}

/// HUD values: weapon, ammo, selected building and materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudView<'a> {
    pub weapon: WeaponId,
    pub weapon_name: &'a str,
    pub ammo: u32,
    pub ammo_capacity: u32,
    /// Time left on the in-flight reload, if any
    pub reload_remaining: Option<Duration>,
    pub building: BuildingId,
    pub building_name: &'a str,
    pub building_cost: i32,
    pub materials: i32,
}

impl HudView<'_> {
    pub fn is_reloading(&self) -> bool {
        self.reload_remaining.is_some()
    }

    /// Whether the selected building is affordable right now.
    pub fn can_afford_building(&self) -> bool {
        self.materials >= self.building_cost
    }
}

impl fmt::Display for HudView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.weapon_name, self.ammo, self.ammo_capacity)?;
        if let Some(remaining) = self.reload_remaining {
            write!(f, " [reloading {:.1}s]", remaining.as_secs_f32())?;
        }
        write!(
            f,
            " | {} ({}) | Materials: {}",
            self.building_name, self.building_cost, self.materials
        )
    }
}

/// Everything a renderer may read for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub frame: u64,
    pub bounds: WorldBounds,
    pub ground_y: f32,
    pub player: PlayerView,
    pub projectiles: &'a [Projectile],
    pub blocks: &'a [Block],
    pub resources: &'a [ResourceNode],
    pub hud: HudView<'a>,
}
