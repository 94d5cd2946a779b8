use thiserror::Error;

use crate::combat::RuleViolation;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Territory count must be at least {min}, got {got}")]
    InvalidTerritoryCount { got: i64, min: usize },

    #[error("Territory {index} does not exist (valid: 1 to {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Attacker and defender must be different territories")]
    SameTerritory,

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("Attack rejected: {0}")]
    Rule(#[from] RuleViolation),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Input closed before setup finished")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WarError {
    /// Errors that only abort the current action; the game loop carries on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WarError::IndexOutOfRange { .. }
                | WarError::SameTerritory
                | WarError::InvalidNumber(_)
                | WarError::Rule(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WarError>;
