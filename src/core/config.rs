//! Game configuration with documented constants
//!
//! The combat and mission rules are fixed; the only knobs are the ones a
//! player picks on the command line (seed, mission variant).

use crate::core::error::{Result, WarError};
use crate::core::types::Troops;

/// Number of faces on the single combat die
pub const DIE_FACES: u8 = 6;

/// Smallest ledger that still allows an attack
pub const MIN_TERRITORIES: usize = 2;

/// Troops an attacker needs before it may commit to combat
///
/// One troop must always stay home, so a territory with a single troop
/// cannot attack.
pub const MIN_ATTACKING_TROOPS: Troops = 2;

/// No territory ever holds fewer troops than this
pub const TROOP_FLOOR: Troops = 1;

/// Configuration for a game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Seed for the dice stream. `None` draws a fresh seed per process.
    pub seed: Option<u64>,

    /// Whether factions receive missions and the game ends on completion
    pub missions_enabled: bool,

    /// Smallest territory count accepted at startup. There is no upper bound.
    pub min_territories: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            missions_enabled: true,
            min_territories: MIN_TERRITORIES,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_missions(mut self, enabled: bool) -> Self {
        self.missions_enabled = enabled;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_territories < MIN_TERRITORIES {
            return Err(WarError::InvalidConfig(format!(
                "min_territories ({}) must be at least {}",
                self.min_territories, MIN_TERRITORIES
            )));
        }

        Ok(())
    }

    /// Check a territory count typed at startup
    pub fn check_territory_count(&self, count: i64) -> Result<usize> {
        match usize::try_from(count) {
            Ok(n) if n >= self.min_territories => Ok(n),
            _ => Err(WarError::InvalidTerritoryCount {
                got: count,
                min: self.min_territories,
            }),
        }
    }
}
