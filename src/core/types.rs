//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Position of a territory in the ledger (0-based)
///
/// Players see 1-based numbers; use [`TerritoryIndex::from_display`] and
/// [`TerritoryIndex::display`] at the console boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryIndex(pub usize);

impl TerritoryIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Convert a 1-based number typed by the player. Zero has no territory.
    pub fn from_display(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    /// The 1-based number shown to the player
    pub fn display(self) -> usize {
        self.0 + 1
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TerritoryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Troop count carried by a territory
pub type Troops = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        let idx = TerritoryIndex::from_display(3).unwrap();
        assert_eq!(idx.get(), 2);
        assert_eq!(idx.display(), 3);
        assert_eq!(format!("{}", idx), "3");
    }

    #[test]
    fn test_zero_is_not_a_territory() {
        assert_eq!(TerritoryIndex::from_display(0), None);
    }

    #[test]
    fn test_index_ordering() {
        assert!(TerritoryIndex(0) < TerritoryIndex(1));
        assert_eq!(TerritoryIndex::new(4), TerritoryIndex(4));
    }
}
