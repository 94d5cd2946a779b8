//! Mission kinds and their win conditions

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

/// What a faction must achieve to win
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionKind {
    /// Hold at least this many territories at once
    HoldAtLeast(usize),
    /// No territory may remain with the target color
    Eliminate(String),
    /// Hold strictly more than half of the map
    Majority,
}

impl MissionKind {
    /// Map free-form mission text onto a kind using the classic keyword rules
    ///
    /// Matching is by substring, first rule wins. The "seguidos" wording is
    /// only flavour: a 4-territory mission counts territories, not streaks.
    pub fn classify(text: &str) -> Self {
        if text.contains("Conquistar 4 territórios seguidos") {
            MissionKind::HoldAtLeast(4)
        } else if text.contains("Eliminar") && text.contains("Vermelho") {
            MissionKind::Eliminate("Vermelho".to_string())
        } else if text.contains("Conquistar um total de 7 territórios") {
            MissionKind::HoldAtLeast(7)
        } else {
            MissionKind::Majority
        }
    }

    /// Does this condition hold for `faction` on the current ledger?
    pub fn is_fulfilled(&self, ledger: &Ledger, faction: &str) -> bool {
        match self {
            MissionKind::HoldAtLeast(count) => ledger.count_owned_by(faction) >= *count,
            MissionKind::Eliminate(target) => {
                faction != target && ledger.count_owned_by(target) == 0
            }
            MissionKind::Majority => ledger.count_owned_by(faction) * 2 > ledger.len(),
        }
    }
}
