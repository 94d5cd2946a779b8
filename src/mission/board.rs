//! Per-faction missions and the end-of-attack victory check

use crate::combat::Dice;
use crate::ledger::Ledger;
use crate::mission::catalog::{catalog, MissionCard};
use crate::mission::kind::MissionKind;

/// A faction's secret objective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub owner: String,
    pub text: String,
    pub kind: MissionKind,
    pub fulfilled: bool,
}

impl Mission {
    pub fn new(owner: impl Into<String>, text: impl Into<String>, kind: MissionKind) -> Self {
        Self {
            owner: owner.into(),
            text: text.into(),
            kind,
            fulfilled: false,
        }
    }

    fn from_card(owner: &str, card: &MissionCard) -> Self {
        Self::new(owner, card.text, card.kind.clone())
    }

    /// Evaluate against the ledger without recording the result
    pub fn check(&self, ledger: &Ledger) -> bool {
        self.kind.is_fulfilled(ledger, &self.owner)
    }
}

/// Missions in faction-registration order
#[derive(Debug, Clone, Default)]
pub struct MissionBoard {
    missions: Vec<Mission>,
}

impl MissionBoard {
    pub fn from_missions(missions: Vec<Mission>) -> Self {
        Self { missions }
    }

    /// Deal one catalog card to each faction, with replacement
    ///
    /// Two factions may draw the same card.
    pub fn assign(factions: &[String], dice: &mut Dice) -> Self {
        let cards = catalog();
        let missions = factions
            .iter()
            .map(|faction| {
                let card = &cards[dice.pick(cards.len())];
                tracing::debug!(faction = %faction, mission = card.text, "mission assigned");
                Mission::from_card(faction, card)
            })
            .collect();
        Self { missions }
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn mission_for(&self, faction: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.owner == faction)
    }

    /// Poll each faction in order and stop at the first completed mission
    ///
    /// The winner's mission is marked fulfilled. Factions after it are not
    /// checked this turn.
    pub fn first_fulfilled(&mut self, ledger: &Ledger) -> Option<&Mission> {
        let winner = self.missions.iter().position(|m| m.check(ledger))?;
        let mission = &mut self.missions[winner];
        mission.fulfilled = true;
        tracing::info!(faction = %mission.owner, mission = %mission.text, "mission fulfilled");
        Some(&*mission)
    }
}
