//! Projectile lifecycle management system.
//!
//! Owns the active projectiles. Each tick every projectile advances by its
//! velocity and any projectile that left the world rectangle is dropped in a
//! single filter pass, so no entry is skipped or processed twice.

use crate::game::state::Projectile;
use crate::world::WorldBounds;

/// Active projectile collection. Unbounded.
#[derive(Debug, Clone, Default)]
pub struct ProjectileSystem {
    projectiles: Vec<Projectile>,
}

impl ProjectileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Advance all projectiles by one tick and prune the ones outside
    /// `bounds`. Returns the number of projectiles removed.
    pub fn update(&mut self, bounds: &WorldBounds) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain_mut(|p| {
            p.advance();
            bounds.contains(p.position)
        });
        before - self.projectiles.len()
    }

    pub fn as_slice(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}
