//! Player Loadout
//!
//! Per-weapon ammo pools, the selected weapon and the in-flight reload.
//!
//! Every catalog weapon owns its own pool. Pools persist while a weapon is
//! not selected, so switching away and back never changes ammo. A reload is a
//! timestamp pair evaluated by the frame loop; nothing fires asynchronously.

use std::time::Duration;

use crate::game::catalog::{WeaponCatalog, WeaponId};

/// Ammo pool and shot bookkeeping for one weapon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponSlot {
    pub weapon: WeaponId,
    pub ammo: u32,
    /// Frame time of the last shot, for the fire-rate gate
    pub last_shot_at: Option<Duration>,
}

/// A reload in progress. Completes once `now >= started_at + duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTimer {
    /// Weapon whose pool gets refilled on completion
    pub weapon: WeaponId,
    pub started_at: Duration,
    pub duration: Duration,
}

impl ReloadTimer {
    pub fn finishes_at(&self) -> Duration {
        self.started_at + self.duration
    }

    pub fn is_done(&self, now: Duration) -> bool {
        now >= self.finishes_at()
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.finishes_at().saturating_sub(now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loadout {
    slots: Vec<WeaponSlot>,
    current: WeaponId,
    reload: Option<ReloadTimer>,
}

impl Loadout {
    /// One full pool per catalog weapon; the first catalog entry is selected.
    pub fn from_catalog(catalog: &WeaponCatalog) -> Self {
        let slots = catalog
            .iter()
            .map(|def| WeaponSlot {
                weapon: def.id,
                ammo: def.ammo_capacity,
                last_shot_at: None,
            })
            .collect();

        Self {
            slots,
            current: catalog.first().map(|def| def.id).unwrap_or_default(),
            reload: None,
        }
    }

    pub fn current(&self) -> WeaponId {
        self.current
    }

    /// Select a weapon. Callers check the id against the catalog first.
    pub fn select(&mut self, weapon: WeaponId) {
        self.current = weapon;
    }

    pub fn slot(&self, weapon: WeaponId) -> Option<&WeaponSlot> {
        self.slots.iter().find(|s| s.weapon == weapon)
    }

    pub fn slot_mut(&mut self, weapon: WeaponId) -> Option<&mut WeaponSlot> {
        self.slots.iter_mut().find(|s| s.weapon == weapon)
    }

    pub fn current_slot(&self) -> Option<&WeaponSlot> {
        self.slot(self.current)
    }

    pub fn current_slot_mut(&mut self) -> Option<&mut WeaponSlot> {
        let current = self.current;
        self.slot_mut(current)
    }

    /// Ammo left in the selected weapon's pool.
    pub fn ammo(&self) -> u32 {
        self.current_slot().map(|s| s.ammo).unwrap_or(0)
    }

    /// Ammo left in a specific weapon's pool.
    pub fn ammo_of(&self, weapon: WeaponId) -> u32 {
        self.slot(weapon).map(|s| s.ammo).unwrap_or(0)
    }

    pub fn reload(&self) -> Option<&ReloadTimer> {
        self.reload.as_ref()
    }

    pub fn is_reloading(&self) -> bool {
        self.reload.is_some()
    }

    pub(crate) fn start_reload(&mut self, timer: ReloadTimer) {
        self.reload = Some(timer);
    }

    pub(crate) fn take_reload(&mut self) -> Option<ReloadTimer> {
        self.reload.take()
    }
}
