//! Facilities - production sites owned by the world

use serde::{Deserialize, Serialize};

use crate::core::types::FacilityId;
use crate::economy::archetype::{Archetype, GoodAmount};

/// A production site converting input goods into output goods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub label: String,
    pub archetype: Archetype,
    /// Always >= 1; multiplies input needs and output yield
    pub level: u32,
    pub productivity: f64,
    /// Order is the order inputs are checked and drawn
    pub inputs: Vec<GoodAmount>,
    pub outputs: Vec<GoodAmount>,
    /// Per level, per tick
    pub maintenance_cost: f64,
}

impl Facility {
    /// Fresh level-1 facility built from an archetype's template
    pub fn from_archetype(id: FacilityId, archetype: Archetype) -> Self {
        let blueprint = archetype.blueprint();
        Self {
            id,
            label: blueprint.label.to_string(),
            archetype,
            level: 1,
            productivity: blueprint.productivity,
            inputs: blueprint.inputs.to_vec(),
            outputs: blueprint.outputs.to_vec(),
            maintenance_cost: blueprint.maintenance_cost,
        }
    }

    /// Maintenance this facility charges per tick at its current level
    pub fn maintenance(&self) -> f64 {
        self.maintenance_cost * self.level as f64
    }

    /// Throughput multiplier with every input fully available
    pub fn ideal_factor(&self) -> f64 {
        self.level as f64 * self.productivity
    }
}
