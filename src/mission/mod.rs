//! Victory missions (optional variant)
//!
//! Each faction present at startup is dealt one mission. After every
//! resolved attack the board is polled in registration order and the first
//! completed mission ends the game.

pub mod board;
pub mod catalog;
pub mod kind;

pub use board::{Mission, MissionBoard};
pub use catalog::{catalog, MissionCard, MISSION_TEXTS};
pub use kind::MissionKind;

use crate::ledger::Ledger;

/// Is `kind` satisfied for `faction` on this ledger? Pure and repeatable.
pub fn is_mission_fulfilled(kind: &MissionKind, ledger: &Ledger, faction: &str) -> bool {
    kind.is_fulfilled(ledger, faction)
}
