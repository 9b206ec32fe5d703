//! Weapon Catalog
//!
//! Static weapon stats looked up by the player's current weapon id.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Catalog id of a weapon. Ids are what the select-weapon controls carry.
pub type WeaponId = u8;

/// How many projectiles a trigger pull emits.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeaponArchetype {
    /// One projectile along the facing direction
    #[default]
    Standard,
    /// Several projectiles per trigger pull, each with its own speed jitter
    Spread {
        /// Projectiles per trigger pull
        pellets: u32,
        /// Half-width of the uniform noise added to each pellet's speed
        speed_jitter: f32,
    },
}

impl WeaponArchetype {
    /// Shotgun: five pellets, +/-2 speed jitter.
    pub const fn shotgun() -> Self {
        WeaponArchetype::Spread {
            pellets: 5,
            speed_jitter: 2.0,
        }
    }

    /// Number of projectiles spawned per shot.
    pub fn projectiles_per_shot(&self) -> u32 {
        match self {
            WeaponArchetype::Standard => 1,
            WeaponArchetype::Spread { pellets, .. } => *pellets,
        }
    }
}

/// Immutable weapon stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponDef {
    pub id: WeaponId,
    pub name: String,
    /// Damage carried by each projectile
    pub damage: i32,
    /// Minimum interval between two shots of this weapon
    pub fire_rate_ms: u64,
    pub ammo_capacity: u32,
    /// Projectile speed in pixels per tick
    pub projectile_speed: f32,
    /// Reload duration override; `None` uses the world default
    #[serde(default)]
    pub reload_ms: Option<u64>,
    #[serde(default)]
    pub archetype: WeaponArchetype,
}

impl WeaponDef {
    pub fn fire_interval(&self) -> Duration {
        Duration::from_millis(self.fire_rate_ms)
    }

    /// Reload duration for this weapon, falling back to `default_ms`.
    pub fn reload_duration(&self, default_ms: u64) -> Duration {
        Duration::from_millis(self.reload_ms.unwrap_or(default_ms))
    }

    pub fn is_spread(&self) -> bool {
        matches!(self.archetype, WeaponArchetype::Spread { .. })
    }
}

/// Ordered weapon table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponCatalog {
    weapons: Vec<WeaponDef>,
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self::new(vec![
            WeaponDef {
                id: 1,
                name: "Pistol".to_string(),
                damage: 20,
                fire_rate_ms: 250,
                ammo_capacity: 12,
                projectile_speed: 15.0,
                reload_ms: None,
                archetype: WeaponArchetype::Standard,
            },
            WeaponDef {
                id: 2,
                name: "Rifle".to_string(),
                damage: 30,
                fire_rate_ms: 100,
                ammo_capacity: 30,
                projectile_speed: 20.0,
                reload_ms: Some(2500),
                archetype: WeaponArchetype::Standard,
            },
            WeaponDef {
                id: 3,
                name: "Shotgun".to_string(),
                damage: 12,
                fire_rate_ms: 800,
                ammo_capacity: 6,
                projectile_speed: 12.0,
                reload_ms: None,
                archetype: WeaponArchetype::shotgun(),
            },
            WeaponDef {
                id: 4,
                name: "Sniper".to_string(),
                damage: 80,
                fire_rate_ms: 1200,
                ammo_capacity: 5,
                projectile_speed: 25.0,
                reload_ms: Some(3000),
                archetype: WeaponArchetype::Standard,
            },
        ])
    }
}

impl WeaponCatalog {
    pub fn new(weapons: Vec<WeaponDef>) -> Self {
        Self { weapons }
    }

    pub fn get(&self, id: WeaponId) -> Option<&WeaponDef> {
        self.weapons.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: WeaponId) -> bool {
        self.get(id).is_some()
    }

    /// First weapon in catalog order (the starting weapon).
    pub fn first(&self) -> Option<&WeaponDef> {
        self.weapons.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponDef> {
        self.weapons.iter()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// First id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<WeaponId> {
        self.weapons.iter().enumerate().find_map(|(i, w)| {
            self.weapons[..i]
                .iter()
                .any(|earlier| earlier.id == w.id)
                .then_some(w.id)
        })
    }
}
