//! Territory War - a text-menu war-of-territories game
//!
//! Players register territories, then pick attackers and defenders. Combat is
//! a single die per side; an optional mission variant ends the game when a
//! faction completes its objective.

pub mod combat;
pub mod core;
pub mod game;
pub mod ledger;
pub mod mission;
