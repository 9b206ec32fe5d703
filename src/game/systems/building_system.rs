//! Building system — grid placement of blocks.
//!
//! A build action snaps the player's center to the grid (floor), checks the
//! cost gate, then the cell occupancy map, and only then pays and inserts.
//! Blocks are never removed, so the occupancy map only grows.

use std::collections::HashMap;

use log::{debug, info};

use crate::game::catalog::{BuildingCatalog, BuildingId};
use crate::game::economy::MaterialBalance;
use crate::game::player::Player;
use crate::game::state::{Block, BlockKind};
use crate::world::{CellCoord, GridConfig};

/// Result of a build attempt. Only `Placed` changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Placed { cell: CellCoord },
    /// Target cell already holds a block
    Occupied { cell: CellCoord },
    InsufficientMaterials { cost: i32, balance: i32 },
    /// Selected building id is missing from the catalog
    UnknownBuilding,
}

/// Placed blocks plus a cell -> block index for duplicate-cell checks.
#[derive(Debug, Clone, Default)]
pub struct BuildingSystem {
    blocks: Vec<Block>,
    by_cell: HashMap<CellCoord, usize>,
}

impl BuildingSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the player's selected building. Unknown ids are ignored.
    pub fn select_building(
        &self,
        player: &mut Player,
        id: BuildingId,
        catalog: &BuildingCatalog,
    ) -> bool {
        match catalog.get(id) {
            Some(def) if player.selected_building != id => {
                player.selected_building = id;
                info!("[Build] Selected {} (cost {})", def.name, def.material_cost);
                true
            }
            Some(_) => false,
            None => {
                debug!("[Build] Ignoring unknown building {}", id);
                false
            }
        }
    }

    /// Try to place the selected building at the player's grid cell.
    pub fn place(
        &mut self,
        player: &Player,
        catalog: &BuildingCatalog,
        grid: &GridConfig,
        materials: &mut MaterialBalance,
    ) -> BuildOutcome {
        let Some(def) = catalog.get(player.selected_building) else {
            return BuildOutcome::UnknownBuilding;
        };

        if !materials.can_afford(def.material_cost) {
            debug!(
                "[Build] Not enough materials for {}: {} < {}",
                def.name,
                materials.get(),
                def.material_cost
            );
            return BuildOutcome::InsufficientMaterials {
                cost: def.material_cost,
                balance: materials.get(),
            };
        }

        let cell = grid.cell_of(player.center());
        if self.is_occupied(cell) {
            debug!("[Build] Cell ({}, {}) already occupied", cell.x, cell.y);
            return BuildOutcome::Occupied { cell };
        }

        if !materials.pay(def.material_cost) {
            return BuildOutcome::InsufficientMaterials {
                cost: def.material_cost,
                balance: materials.get(),
            };
        }

        let block = Block {
            building: def.id,
            cell,
            position: grid.snap_to_grid(player.center()),
            size: glam::Vec2::new(def.width, def.height),
            kind: BlockKind::from_shape(def.shape, player.facing),
        };
        self.insert(block);

        info!(
            "[Build] Placed {} at cell ({}, {}), {} materials left",
            def.name,
            cell.x,
            cell.y,
            materials.get()
        );
        BuildOutcome::Placed { cell }
    }

    fn insert(&mut self, block: Block) {
        self.by_cell.insert(block.cell, self.blocks.len());
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_occupied(&self, cell: CellCoord) -> bool {
        self.by_cell.contains_key(&cell)
    }

    pub fn block_at(&self, cell: CellCoord) -> Option<&Block> {
        self.by_cell.get(&cell).and_then(|&i| self.blocks.get(i))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Insert the first catalog building at `cell` without any checks.
    #[cfg(test)]
    pub(crate) fn insert_for_test(
        &mut self,
        cell: CellCoord,
        config: &crate::game::config::WorldConfig,
    ) {
        let def = config
            .buildings
            .first()
            .expect("test config has a building");
        self.insert(Block {
            building: def.id,
            cell,
            position: config.grid.cell_origin(cell),
            size: glam::Vec2::new(def.width, def.height),
            kind: BlockKind::from_shape(def.shape, crate::game::player::Facing::Right),
        });
    }
}
