//! Game State
//!
//! Central simulation state: the player, every entity collection and the
//! material balance, advanced one frame at a time by [`World::update`].
//!
//! Frame order:
//! 1. capture the player's pre-move position (collision rollback target)
//! 2. movement: horizontal move, jump, gravity, ground clamp
//! 3. combat: reload completion, weapon switch, manual reload,
//!    projectile advance/prune, firing
//! 4. building: selection, placement
//! 5. resources: harvesting and depletion
//! 6. collision: player vs blocks

use std::time::Duration;

use glam::Vec2;
use log::trace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::game::catalog::{BuildingId, BuildingShape, WeaponId};
use crate::game::config::WorldConfig;
use crate::game::economy::MaterialBalance;
use crate::game::player::{Facing, Player};
use crate::game::systems::{
    BuildOutcome, BuildingSystem, CollisionSystem, CombatSystem, FireOutcome, MovementSystem,
    ProjectileSystem, ResourceSystem,
};
use crate::game::view::{FrameView, HudView, PlayerView};
use crate::input::InputSnapshot;
use crate::physics::Aabb2;
use crate::world::CellCoord;

/// A moving shot. Carries the damage of the weapon that fired it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    pub damage: i32,
}

impl Projectile {
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }
}

/// Kind of a placed block. Only directional kinds carry an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Wall,
    Floor,
    Ramp { orientation: Facing },
}

impl BlockKind {
    /// Block kind for a catalog shape placed by a player facing `facing`.
    pub fn from_shape(shape: BuildingShape, facing: Facing) -> Self {
        match shape {
            BuildingShape::Wall => BlockKind::Wall,
            BuildingShape::Floor => BlockKind::Floor,
            BuildingShape::Ramp => BlockKind::Ramp {
                orientation: facing,
            },
        }
    }

    pub fn orientation(&self) -> Option<Facing> {
        match self {
            BlockKind::Ramp { orientation } => Some(*orientation),
            BlockKind::Wall | BlockKind::Floor => None,
        }
    }
}

/// A grid-aligned structure. At most one block exists per cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub building: BuildingId,
    pub cell: CellCoord,
    /// Top-left corner (the cell origin)
    pub position: Vec2,
    pub size: Vec2,
    pub kind: BlockKind,
}

impl Block {
    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_pos_size(self.position, self.size)
    }
}

/// Type tag of a harvestable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Tree,
    Rock,
    Metal,
}

impl ResourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Tree => "Tree",
            ResourceKind::Rock => "Rock",
            ResourceKind::Metal => "Metal",
        }
    }
}

/// A harvestable node. Removed from the world when its health reaches zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceNode {
    pub id: u32,
    pub position: Vec2,
    pub kind: ResourceKind,
    pub health: i32,
}

/// What happened during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    /// Result of the fire control, when it was held
    pub fire: Option<FireOutcome>,
    /// Result of the build control, when it was held
    pub build: Option<BuildOutcome>,
    pub projectiles_spawned: usize,
    pub projectiles_removed: usize,
    /// Weapon whose reload completed this frame
    pub reload_finished: Option<WeaponId>,
    pub nodes_depleted: usize,
    pub materials_earned: i32,
    /// The player was rolled back to its pre-move position
    pub collision_reverted: bool,
}

/// Complete simulation state for one session.
pub struct World {
    pub config: WorldConfig,
    pub player: Player,
    pub projectiles: ProjectileSystem,
    pub buildings: BuildingSystem,
    pub resources: ResourceSystem,
    pub materials: MaterialBalance,
    rng: StdRng,
    frame: u64,
    now: Duration,
}

static_assertions::assert_impl_all!(World: Send);

impl World {
    /// Build a fresh world from `config`. The config is expected to be valid
    /// (see [`WorldConfig::validate`]).
    pub fn new(config: WorldConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            player: Player::new(&config),
            projectiles: ProjectileSystem::new(),
            buildings: BuildingSystem::new(),
            resources: ResourceSystem::from_seeds(&config.resources.nodes),
            materials: MaterialBalance::new(config.starting_materials),
            rng,
            frame: 0,
            now: Duration::ZERO,
            config,
        }
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Time of the most recent frame.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Advance the simulation by one frame.
    ///
    /// `now` is the host's monotonic time since the session started. It only
    /// feeds time-based gates (reload, fire rate); movement is per frame.
    pub fn update(&mut self, input: &InputSnapshot, now: Duration) -> FrameReport {
        self.frame += 1;
        self.now = now;
        let mut report = FrameReport {
            frame: self.frame,
            ..FrameReport::default()
        };

        let previous_position = self.player.position;

        MovementSystem::update(
            &mut self.player,
            input,
            &self.config.physics,
            self.config.bounds.width,
            self.config.ground_y(),
        );

        let combat = CombatSystem::update(
            &mut self.player,
            input,
            &self.config,
            &mut self.projectiles,
            &mut self.rng,
            now,
        );
        report.fire = combat.fire;
        report.projectiles_spawned = combat.projectiles_spawned;
        report.projectiles_removed = combat.projectiles_removed;
        report.reload_finished = combat.reload_finished;

        if let Some(id) = input.select_building {
            self.buildings
                .select_building(&mut self.player, id, &self.config.buildings);
        }
        if input.build {
            report.build = Some(self.buildings.place(
                &self.player,
                &self.config.buildings,
                &self.config.grid,
                &mut self.materials,
            ));
        }

        let harvest = self.resources.harvest(
            self.player.center(),
            &self.config.resources,
            &mut self.materials,
        );
        report.nodes_depleted = harvest.depleted;
        report.materials_earned = harvest.reward;

        report.collision_reverted = CollisionSystem::resolve_player_blocks(
            &mut self.player,
            previous_position,
            self.buildings.blocks(),
            self.config.physics.collision_response,
        );

        trace!(
            "[Frame] {} pos=({:.1}, {:.1}) ammo={} materials={}",
            self.frame,
            self.player.position.x,
            self.player.position.y,
            self.player.ammo(),
            self.materials.get()
        );

        report
    }

    /// Read-only view of everything a renderer needs for this frame.
    pub fn view(&self) -> FrameView<'_> {
        let weapon = self.config.weapons.get(self.player.current_weapon());
        let building = self.config.buildings.get(self.player.selected_building);

        FrameView {
            frame: self.frame,
            bounds: self.config.bounds,
            ground_y: self.config.ground_y(),
            player: PlayerView::from(&self.player),
            projectiles: self.projectiles.as_slice(),
            blocks: self.buildings.blocks(),
            resources: self.resources.nodes(),
            hud: HudView {
                weapon: self.player.current_weapon(),
                weapon_name: weapon.map(|w| w.name.as_str()).unwrap_or("-"),
                ammo: self.player.ammo(),
                ammo_capacity: weapon.map(|w| w.ammo_capacity).unwrap_or(0),
                reload_remaining: self
                    .player
                    .loadout
                    .reload()
                    .map(|timer| timer.remaining(self.now)),
                building: self.player.selected_building,
                building_name: building.map(|b| b.name.as_str()).unwrap_or("-"),
                building_cost: building.map(|b| b.material_cost).unwrap_or(0),
                materials: self.materials.get(),
            },
        }
    }
}
