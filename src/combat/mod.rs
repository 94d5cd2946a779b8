pub mod dice;
pub mod resolution;

pub use dice::{Dice, DiceRoller, ScriptedDice};
pub use resolution::{check_attack, resolve_attack, CombatOutcome, RuleViolation};
