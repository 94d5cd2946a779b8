//! Turn commands and the parsers that build them from console lines

use crate::core::config::{GameConfig, TROOP_FLOOR};
use crate::core::error::{Result, WarError};
use crate::core::types::{TerritoryIndex, Troops};

/// One structured request to the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Attack {
        attacker: TerritoryIndex,
        defender: TerritoryIndex,
    },
    Quit,
}

/// Top-level menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Attack,
    Quit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => MenuChoice::Attack,
            "0" => MenuChoice::Quit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// Parse a 1-based territory number typed by the player, checked against `len`
pub fn parse_territory_number(line: &str, len: usize) -> Result<TerritoryIndex> {
    let trimmed = line.trim();
    let number: usize = trimmed
        .parse()
        .map_err(|_| WarError::InvalidNumber(trimmed.to_string()))?;
    match TerritoryIndex::from_display(number) {
        Some(index) if index.get() < len => Ok(index),
        _ => Err(WarError::IndexOutOfRange { index: number, len }),
    }
}

/// Parse the territory count asked for at startup
pub fn parse_territory_count(line: &str, config: &GameConfig) -> Result<usize> {
    let trimmed = line.trim();
    let count: i64 = trimmed
        .parse()
        .map_err(|_| WarError::InvalidNumber(trimmed.to_string()))?;
    config.check_territory_count(count)
}

/// Troop count typed during registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TroopEntry {
    pub troops: Troops,
    /// The typed value was unusable and the floor was used instead
    pub corrected: bool,
}

/// Parse a troop count; anything non-positive, unreadable or too large for
/// [`Troops`] becomes the floor
pub fn parse_troops(line: &str) -> TroopEntry {
    match line.trim().parse::<Troops>() {
        Ok(troops) if troops >= TROOP_FLOOR => TroopEntry {
            troops,
            corrected: false,
        },
        _ => TroopEntry {
            troops: TROOP_FLOOR,
            corrected: true,
        },
    }
}
