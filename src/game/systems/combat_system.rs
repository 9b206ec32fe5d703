//! Combat system — weapon state machine.
//!
//! Per player: Idle, Firing, Reloading. A shot needs ammo in the selected
//! weapon's pool, no reload in flight and (when enforced) the weapon's fire
//! interval elapsed since its previous shot. The shot that empties a pool
//! starts a reload. Reloads are timestamps checked at the start of every
//! frame, so completion happens inside the frame loop and never concurrently
//! with it.

use std::time::Duration;

use glam::Vec2;
use log::{debug, info};
use rand::Rng;

use super::ProjectileSystem;
use crate::game::catalog::{WeaponArchetype, WeaponCatalog, WeaponId};
use crate::game::config::{CombatConfig, ReloadSwitchPolicy, WorldConfig};
use crate::game::player::{Player, ReloadTimer};
use crate::game::state::Projectile;
use crate::input::InputSnapshot;

/// Result of a fire attempt. Only `Fired` changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired { projectiles: usize },
    /// Selected pool is empty
    Empty,
    /// A reload is in flight
    Reloading,
    /// Fire interval of the selected weapon has not elapsed
    Cooldown,
    /// Selected weapon id is missing from the catalog
    UnknownWeapon,
}

/// Combat events of one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatUpdate {
    pub fire: Option<FireOutcome>,
    pub projectiles_spawned: usize,
    pub projectiles_removed: usize,
    pub reload_finished: Option<WeaponId>,
}

/// Stateless combat step. Weapon state lives in the player's loadout.
pub struct CombatSystem;

impl CombatSystem {
    /// Run the combat phase of a frame: reload completion, weapon switch,
    /// manual reload, projectile advance, then the fire control.
    pub fn update<R: Rng + ?Sized>(
        player: &mut Player,
        input: &InputSnapshot,
        config: &WorldConfig,
        projectiles: &mut ProjectileSystem,
        rng: &mut R,
        now: Duration,
    ) -> CombatUpdate {
        let mut update = CombatUpdate {
            reload_finished: Self::finish_reload(player, &config.weapons, now),
            ..CombatUpdate::default()
        };

        if let Some(id) = input.select_weapon {
            Self::switch_weapon(player, id, &config.weapons, config.combat.reload_switch_policy);
        }
        if input.reload {
            Self::start_reload(player, &config.weapons, &config.combat, now);
        }

        update.projectiles_removed = projectiles.update(&config.bounds);

        if input.fire {
            let outcome = Self::fire(player, &config.weapons, &config.combat, projectiles, rng, now);
            if let FireOutcome::Fired { projectiles } = outcome {
                update.projectiles_spawned = projectiles;
            }
            update.fire = Some(outcome);
        }

        update
    }

    /// Complete the in-flight reload if its deadline has passed. The refilled
    /// pool is the one of the weapon that started the reload.
    pub fn finish_reload(
        player: &mut Player,
        weapons: &WeaponCatalog,
        now: Duration,
    ) -> Option<WeaponId> {
        let done = player.loadout.reload().is_some_and(|timer| timer.is_done(now));
        if !done {
            return None;
        }

        let timer = player.loadout.take_reload()?;
        let capacity = weapons.get(timer.weapon).map(|def| def.ammo_capacity)?;
        if let Some(slot) = player.loadout.slot_mut(timer.weapon) {
            slot.ammo = capacity;
        }
        info!("[Combat] Reload finished: weapon {} back to {} rounds", timer.weapon, capacity);
        Some(timer.weapon)
    }

    /// Select another catalog weapon. Unknown ids and the already selected
    /// weapon are ignored. Returns whether the selection changed.
    pub fn switch_weapon(
        player: &mut Player,
        id: WeaponId,
        weapons: &WeaponCatalog,
        policy: ReloadSwitchPolicy,
    ) -> bool {
        if id == player.loadout.current() {
            return false;
        }
        let Some(def) = weapons.get(id) else {
            debug!("[Combat] Ignoring switch to unknown weapon {}", id);
            return false;
        };

        player.loadout.select(id);
        if policy == ReloadSwitchPolicy::Cancel {
            if let Some(timer) = player.loadout.take_reload() {
                info!("[Combat] Reload of weapon {} cancelled by switch", timer.weapon);
            }
        }
        info!("[Combat] Switched to {} ({} rounds)", def.name, player.loadout.ammo());
        true
    }

    /// Start reloading the selected weapon. Skipped while a reload is in
    /// flight or when the pool is already full.
    pub fn start_reload(
        player: &mut Player,
        weapons: &WeaponCatalog,
        combat: &CombatConfig,
        now: Duration,
    ) -> bool {
        if player.loadout.is_reloading() {
            return false;
        }
        let Some(def) = weapons.get(player.loadout.current()) else {
            return false;
        };
        if player.loadout.ammo() >= def.ammo_capacity {
            return false;
        }

        let duration = def.reload_duration(combat.default_reload_ms);
        player.loadout.start_reload(ReloadTimer {
            weapon: def.id,
            started_at: now,
            duration,
        });
        info!("[Combat] Reloading {} ({:.1}s)", def.name, duration.as_secs_f32());
        true
    }

    /// Pull the trigger once.
    ///
    /// Every projectile starts at the muzzle and carries the damage of the
    /// weapon selected now. Directional jitter is uniform in [-1, 1) on both
    /// axes; spread weapons add independent speed jitter per pellet.
    pub fn fire<R: Rng + ?Sized>(
        player: &mut Player,
        weapons: &WeaponCatalog,
        combat: &CombatConfig,
        projectiles: &mut ProjectileSystem,
        rng: &mut R,
        now: Duration,
    ) -> FireOutcome {
        let Some(def) = weapons.get(player.loadout.current()) else {
            return FireOutcome::UnknownWeapon;
        };
        if player.loadout.is_reloading() {
            return FireOutcome::Reloading;
        }

        let origin = player.muzzle();
        let direction = player.facing.sign();
        let Some(slot) = player.loadout.current_slot_mut() else {
            return FireOutcome::UnknownWeapon;
        };
        if slot.ammo == 0 {
            debug!("[Combat] {} is empty", def.name);
            return FireOutcome::Empty;
        }
        if combat.enforce_fire_rate {
            if let Some(last) = slot.last_shot_at {
                if now.saturating_sub(last) < def.fire_interval() {
                    return FireOutcome::Cooldown;
                }
            }
        }

        slot.ammo -= 1;
        slot.last_shot_at = Some(now);
        let remaining = slot.ammo;

        let speed_jitter = match def.archetype {
            WeaponArchetype::Standard => 0.0,
            WeaponArchetype::Spread { speed_jitter, .. } => speed_jitter,
        };
        let count = def.archetype.projectiles_per_shot() as usize;
        for _ in 0..count {
            let speed = def.projectile_speed + symmetric(rng, speed_jitter);
            let velocity = Vec2::new(
                direction * speed + symmetric(rng, 1.0),
                symmetric(rng, 1.0),
            );
            projectiles.spawn(Projectile {
                position: origin,
                velocity,
                damage: def.damage,
            });
        }
        debug!(
            "[Combat] {} fired {} projectile(s), {} rounds left",
            def.name, count, remaining
        );

        if remaining == 0 {
            Self::start_reload(player, weapons, combat, now);
        }

        FireOutcome::Fired { projectiles: count }
    }
}

/// Uniform sample in `[-half_width, half_width)`; zero for a zero width.
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_width: f32) -> f32 {
    if half_width > 0.0 {
        rng.gen_range(-half_width..half_width)
    } else {
        0.0
    }
}
