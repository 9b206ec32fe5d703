//! Building Catalog
//!
//! Placeable structure stats: footprint and material cost.

use serde::{Deserialize, Serialize};

/// Catalog id of a building. Ids are what the select-building controls carry.
pub type BuildingId = u8;

/// Shape family of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingShape {
    Wall,
    Floor,
    /// Directional piece; orientation follows the player's facing at placement
    Ramp,
}

impl BuildingShape {
    /// Whether placed blocks of this shape record an orientation.
    pub fn is_directional(&self) -> bool {
        matches!(self, BuildingShape::Ramp)
    }
}

/// Immutable building stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDef {
    pub id: BuildingId,
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub material_cost: i32,
    pub shape: BuildingShape,
}

/// Ordered building table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingCatalog {
    buildings: Vec<BuildingDef>,
}

impl Default for BuildingCatalog {
    fn default() -> Self {
        Self::new(vec![
            BuildingDef {
                id: 1,
                name: "Wall".to_string(),
                width: 40.0,
                height: 40.0,
                material_cost: 10,
                shape: BuildingShape::Wall,
            },
            BuildingDef {
                id: 2,
                name: "Floor".to_string(),
                width: 40.0,
                height: 10.0,
                material_cost: 10,
                shape: BuildingShape::Floor,
            },
            BuildingDef {
                id: 3,
                name: "Ramp".to_string(),
                width: 40.0,
                height: 40.0,
                material_cost: 15,
                shape: BuildingShape::Ramp,
            },
        ])
    }
}

impl BuildingCatalog {
    pub fn new(buildings: Vec<BuildingDef>) -> Self {
        Self { buildings }
    }

    pub fn get(&self, id: BuildingId) -> Option<&BuildingDef> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BuildingId) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&BuildingDef> {
        self.buildings.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildingDef> {
        self.buildings.iter()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// First id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<BuildingId> {
        self.buildings.iter().enumerate().find_map(|(i, b)| {
            self.buildings[..i]
                .iter()
                .any(|earlier| earlier.id == b.id)
                .then_some(b.id)
        })
    }
}
