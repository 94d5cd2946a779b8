//! Game session: owns the ledger, the dice and the mission board, and
//! applies one command per turn.

use crate::combat::{CombatOutcome, Dice, DiceRoller};
use crate::core::config::GameConfig;
use crate::core::error::WarError;
use crate::core::types::TerritoryIndex;
use crate::game::command::Command;
use crate::ledger::Ledger;
use crate::mission::{Mission, MissionBoard};

/// What a turn produced
#[derive(Debug)]
pub enum TurnReport {
    /// Combat happened; `winner` is set when it completed a mission
    Attacked {
        attacker: TerritoryIndex,
        defender: TerritoryIndex,
        outcome: CombatOutcome,
        winner: Option<Mission>,
    },
    /// Nothing changed; the error says why
    Rejected(WarError),
    /// The game is already over, or the player quit
    Finished,
}

#[derive(Debug)]
pub struct GameSession<D: DiceRoller = Dice> {
    ledger: Ledger,
    dice: D,
    missions: Option<MissionBoard>,
    winner: Option<Mission>,
    quit: bool,
    attacks: u32,
}

impl GameSession<Dice> {
    /// Start a live session: seed the dice and deal missions if enabled
    pub fn new(ledger: Ledger, config: &GameConfig) -> Self {
        let mut dice = match config.seed {
            Some(seed) => Dice::new(seed),
            None => Dice::from_entropy(),
        };
        tracing::info!(seed = dice.seed(), territories = ledger.len(), "session started");

        let missions = config
            .missions_enabled
            .then(|| MissionBoard::assign(&ledger.factions(), &mut dice));

        Self::with_parts(ledger, dice, missions)
    }
}

impl<D: DiceRoller> GameSession<D> {
    pub fn with_parts(ledger: Ledger, dice: D, missions: Option<MissionBoard>) -> Self {
        Self {
            ledger,
            dice,
            missions,
            winner: None,
            quit: false,
            attacks: 0,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn missions(&self) -> Option<&MissionBoard> {
        self.missions.as_ref()
    }

    pub fn winner(&self) -> Option<&Mission> {
        self.winner.as_ref()
    }

    /// Number of attacks that reached the dice
    pub fn attacks(&self) -> u32 {
        self.attacks
    }

    pub fn is_over(&self) -> bool {
        self.quit || self.winner.is_some()
    }

    pub fn apply(&mut self, command: Command) -> TurnReport {
        if self.is_over() {
            return TurnReport::Finished;
        }

        match command {
            Command::Quit => {
                self.quit = true;
                TurnReport::Finished
            }
            Command::Attack { attacker, defender } => self.attack(attacker, defender),
        }
    }

    fn attack(&mut self, attacker: TerritoryIndex, defender: TerritoryIndex) -> TurnReport {
        let outcome = match self.ledger.attack(attacker, defender, &mut self.dice) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(%attacker, %defender, error = %e, "attack rejected");
                return TurnReport::Rejected(e);
            }
        };
        self.attacks += 1;

        let winner = self
            .missions
            .as_mut()
            .and_then(|board| board.first_fulfilled(&self.ledger).cloned());
        self.winner = winner.clone();

        TurnReport::Attacked {
            attacker,
            defender,
            outcome,
            winner,
        }
    }
}
