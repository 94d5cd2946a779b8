//! Territory ledger: the ordered set of territories for one game
//!
//! Built once at startup. Only the combat resolver mutates entries, and only
//! through [`Ledger::attack`], which hands it two disjoint borrows.

pub mod territory;

pub use territory::Territory;

use serde::{Deserialize, Serialize};

use crate::combat::{resolve_attack, CombatOutcome, DiceRoller};
use crate::core::config::MIN_TERRITORIES;
use crate::core::error::{Result, WarError};
use crate::core::types::TerritoryIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    territories: Vec<Territory>,
}

impl Ledger {
    /// Create a ledger. At least two territories are needed for an attack.
    pub fn new(territories: Vec<Territory>) -> Result<Self> {
        if territories.len() < MIN_TERRITORIES {
            return Err(WarError::InvalidTerritoryCount {
                got: territories.len() as i64,
                min: MIN_TERRITORIES,
            });
        }
        Ok(Self { territories })
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: TerritoryIndex) -> Result<&Territory> {
        self.territories
            .get(index.get())
            .ok_or(WarError::IndexOutOfRange {
                index: index.display(),
                len: self.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Iterate over (TerritoryIndex, &Territory) pairs
    pub fn iter_indexed(&self) -> impl Iterator<Item = (TerritoryIndex, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryIndex(i), t))
    }

    /// Check that an attacker/defender selection names two real, distinct territories
    pub fn check_selection(&self, attacker: TerritoryIndex, defender: TerritoryIndex) -> Result<()> {
        self.get(attacker)?;
        self.get(defender)?;
        if attacker == defender {
            return Err(WarError::SameTerritory);
        }
        Ok(())
    }

    /// Mutable access to two distinct territories at once
    pub fn pair_mut(
        &mut self,
        first: TerritoryIndex,
        second: TerritoryIndex,
    ) -> Result<(&mut Territory, &mut Territory)> {
        self.check_selection(first, second)?;

        let (a, b) = (first.get(), second.get());
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Ok((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Ok((&mut right[0], &mut left[b]))
        }
    }

    /// Resolve an attack between two ledger entries
    ///
    /// Selection errors and rule violations leave the ledger untouched.
    pub fn attack(
        &mut self,
        attacker: TerritoryIndex,
        defender: TerritoryIndex,
        dice: &mut impl DiceRoller,
    ) -> Result<CombatOutcome> {
        let (att, def) = self.pair_mut(attacker, defender)?;
        Ok(resolve_attack(att, def, dice)?)
    }

    /// Distinct owner colors in first-appearance order
    pub fn factions(&self) -> Vec<String> {
        let mut factions: Vec<String> = Vec::new();
        for territory in &self.territories {
            if !factions.iter().any(|f| f == territory.owner()) {
                factions.push(territory.owner().to_string());
            }
        }
        factions
    }

    /// Number of territories currently held by a faction
    pub fn count_owned_by(&self, faction: &str) -> usize {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(faction))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ScriptedDice;

    fn sample() -> Ledger {
        Ledger::new(vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Argentina", "Azul", 3),
            Territory::new("Chile", "Verde", 2),
            Territory::new("Peru", "Vermelho", 4),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_territory_rejected() {
        let result = Ledger::new(vec![Territory::new("Brasil", "Verde", 5)]);
        assert!(matches!(result, Err(WarError::InvalidTerritoryCount { got: 1, .. })));
    }

    #[test]
    fn test_get_out_of_range() {
        let ledger = sample();
        assert_eq!(ledger.get(TerritoryIndex(0)).unwrap().name(), "Brasil");
        assert!(matches!(
            ledger.get(TerritoryIndex(4)),
            Err(WarError::IndexOutOfRange { index: 5, len: 4 })
        ));
    }

    #[test]
    fn test_factions_in_registration_order() {
        let ledger = sample();
        assert_eq!(ledger.factions(), vec!["Verde", "Azul", "Vermelho"]);
    }

    #[test]
    fn test_count_owned_by() {
        let ledger = sample();
        assert_eq!(ledger.count_owned_by("Verde"), 2);
        assert_eq!(ledger.count_owned_by("Azul"), 1);
        assert_eq!(ledger.count_owned_by("Amarelo"), 0);
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut ledger = sample();
        {
            let (a, b) = ledger.pair_mut(TerritoryIndex(3), TerritoryIndex(1)).unwrap();
            assert_eq!(a.name(), "Peru");
            assert_eq!(b.name(), "Argentina");
        }
        let (a, b) = ledger.pair_mut(TerritoryIndex(0), TerritoryIndex(2)).unwrap();
        assert_eq!(a.name(), "Brasil");
        assert_eq!(b.name(), "Chile");
    }

    #[test]
    fn test_pair_mut_same_index_rejected() {
        let mut ledger = sample();
        assert!(matches!(
            ledger.pair_mut(TerritoryIndex(1), TerritoryIndex(1)),
            Err(WarError::SameTerritory)
        ));
    }

    #[test]
    fn test_attack_bad_selection_leaves_ledger_untouched() {
        let mut ledger = sample();
        let before = ledger.clone();
        let mut dice = ScriptedDice::new(vec![6, 1]);

        assert!(ledger.attack(TerritoryIndex(0), TerritoryIndex(9), &mut dice).is_err());
        assert!(ledger.attack(TerritoryIndex(2), TerritoryIndex(2), &mut dice).is_err());
        assert_eq!(ledger, before);
        assert_eq!(dice.remaining(), 2);
    }

    #[test]
    fn test_attack_transfers_ownership() {
        let mut ledger = sample();
        let mut dice = ScriptedDice::new(vec![6, 2]);

        let outcome = ledger
            .attack(TerritoryIndex(0), TerritoryIndex(1), &mut dice)
            .unwrap();

        assert!(outcome.attacker_won);
        assert_eq!(ledger.count_owned_by("Verde"), 3);
        assert_eq!(ledger.count_owned_by("Azul"), 0);
        // factions() reflects current ownership
        assert_eq!(ledger.factions(), vec!["Verde", "Vermelho"]);
    }
}
