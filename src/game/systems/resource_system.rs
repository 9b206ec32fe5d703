//! Resource system — proximity harvesting.
//!
//! Every tick, each node within the interaction radius of the player's center
//! loses `harvest_rate` health. A node that reaches zero is removed and pays
//! out the harvest reward once. Removal is a single filter pass over the
//! node list.

use glam::Vec2;
use log::{info, warn};

use crate::game::config::{ResourceConfig, ResourceSeed};
use crate::game::economy::MaterialBalance;
use crate::game::state::ResourceNode;

/// Per-tick harvesting summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestReport {
    /// Nodes that lost health this tick
    pub harvested: usize,
    /// Nodes removed this tick
    pub depleted: usize,
    /// Materials credited this tick
    pub reward: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceSystem {
    nodes: Vec<ResourceNode>,
}

impl ResourceSystem {
    /// Build the node list from config seeds. Seeds without health are
    /// skipped, since a depleted node never exists in the world.
    pub fn from_seeds(seeds: &[ResourceSeed]) -> Self {
        let nodes = seeds
            .iter()
            .enumerate()
            .filter_map(|(i, seed)| {
                if seed.health <= 0 {
                    warn!(
                        "[Resources] Skipping {} seed at ({}, {}) with health {}",
                        seed.kind.name(),
                        seed.position.x,
                        seed.position.y,
                        seed.health
                    );
                    return None;
                }
                Some(ResourceNode {
                    id: i as u32,
                    position: seed.position,
                    kind: seed.kind,
                    health: seed.health,
                })
            })
            .collect();

        Self { nodes }
    }

    /// Harvest every node in range of `center` and credit depletion rewards.
    pub fn harvest(
        &mut self,
        center: Vec2,
        config: &ResourceConfig,
        materials: &mut MaterialBalance,
    ) -> HarvestReport {
        let mut report = HarvestReport::default();

        for node in &mut self.nodes {
            if node.health <= 0 || node.position.distance(center) > config.interaction_radius {
                continue;
            }
            node.health = (node.health - config.harvest_rate).max(0);
            report.harvested += 1;
        }

        self.nodes.retain(|node| {
            if node.health > 0 {
                return true;
            }
            info!(
                "[Resources] {} #{} depleted, +{} materials",
                node.kind.name(),
                node.id,
                config.harvest_reward
            );
            report.depleted += 1;
            false
        });

        if report.depleted > 0 {
            report.reward = config.harvest_reward.saturating_mul(report.depleted as i32);
            materials.add(report.reward);
        }

        report
    }

    pub fn nodes(&self) -> &[ResourceNode] {
        &self.nodes
    }

    pub fn get(&self, id: u32) -> Option<&ResourceNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::ResourceKind;

    fn seed(x: f32, health: i32) -> ResourceSeed {
        ResourceSeed {
            position: Vec2::new(x, 0.0),
            kind: ResourceKind::Tree,
            health,
        }
    }

    fn config() -> ResourceConfig {
        ResourceConfig {
            interaction_radius: 60.0,
            harvest_rate: 2,
            harvest_reward: 25,
            nodes: Vec::new(),
        }
    }

    #[test]
    fn test_in_range_loses_health() {
        let mut system = ResourceSystem::from_seeds(&[seed(50.0, 10), seed(61.0, 10)]);
        let mut materials = MaterialBalance::new(0);

        let report = system.harvest(Vec2::ZERO, &config(), &mut materials);
        assert_eq!(report.harvested, 1);
        assert_eq!(system.get(0).unwrap().health, 8);
        assert_eq!(system.get(1).unwrap().health, 10);
        assert_eq!(materials.get(), 0);
    }

    #[test]
    fn test_radius_is_inclusive() {
        let mut system = ResourceSystem::from_seeds(&[seed(60.0, 10)]);
        let mut materials = MaterialBalance::new(0);
        system.harvest(Vec2::ZERO, &config(), &mut materials);
        assert_eq!(system.get(0).unwrap().health, 8);
    }

    #[test]
    fn test_health_strictly_decreases_until_removed() {
        let mut system = ResourceSystem::from_seeds(&[seed(0.0, 5)]);
        let mut materials = MaterialBalance::new(0);
        let mut last = 5;

        // 5 -> 3 -> 1 -> 0 (clamped), removed on the third tick
        for _ in 0..2 {
            let report = system.harvest(Vec2::ZERO, &config(), &mut materials);
            assert_eq!(report.depleted, 0);
            let health = system.get(0).unwrap().health;
            assert!(health < last);
            last = health;
        }
        let report = system.harvest(Vec2::ZERO, &config(), &mut materials);
        assert_eq!(report.depleted, 1);
        assert_eq!(report.reward, 25);
        assert!(system.is_empty());
        assert_eq!(materials.get(), 25);

        // Nothing left to harvest
        let report = system.harvest(Vec2::ZERO, &config(), &mut materials);
        assert_eq!(report, HarvestReport::default());
        assert_eq!(materials.get(), 25);
    }

    #[test]
    fn test_several_nodes_deplete_together() {
        let mut system =
            ResourceSystem::from_seeds(&[seed(0.0, 2), seed(10.0, 1), seed(500.0, 1)]);
        let mut materials = MaterialBalance::new(100);

        let report = system.harvest(Vec2::ZERO, &config(), &mut materials);
        assert_eq!(report.depleted, 2);
        assert_eq!(materials.get(), 150);
        assert_eq!(system.len(), 1);
        assert_eq!(system.nodes()[0].id, 2);
    }

    #[test]
    fn test_dead_seeds_are_skipped() {
        let system = ResourceSystem::from_seeds(&[seed(0.0, 0), seed(10.0, 4)]);
        assert_eq!(system.len(), 1);
        assert_eq!(system.nodes()[0].id, 1);
    }
}
