//! A single territory record

use serde::{Deserialize, Serialize};

use crate::core::config::TROOP_FLOOR;
use crate::core::types::Troops;

/// A named region with an owning faction color and a troop count
///
/// The troop count never drops below [`TROOP_FLOOR`]; constructors and the
/// combat resolver both restore the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub(crate) name: String,
    pub(crate) owner: String,
    pub(crate) troops: Troops,
}

impl Territory {
    /// Create a territory, lifting a zero troop count to the floor
    pub fn new(name: impl Into<String>, owner: impl Into<String>, troops: Troops) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            troops: troops.max(TROOP_FLOOR),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Faction color currently holding this territory
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn troops(&self) -> Troops {
        self.troops
    }

    pub fn is_owned_by(&self, faction: &str) -> bool {
        self.owner == faction
    }

    /// Restore the troop floor after a mutation
    pub(crate) fn clamp_troops(&mut self) {
        if self.troops < TROOP_FLOOR {
            self.troops = TROOP_FLOOR;
        }
    }
}
