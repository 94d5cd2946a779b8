//! Attack resolution
//!
//! One die each. Ties go to the defender. A winning attacker sends half its
//! troops (at least one) into the conquered territory, replacing whatever
//! was there.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combat::dice::DiceRoller;
use crate::core::config::MIN_ATTACKING_TROOPS;
use crate::core::types::Troops;
use crate::ledger::Territory;

/// Why an attack was refused before any die was rolled
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("{faction} cannot attack its own territory")]
    SelfAttack { faction: String },

    #[error("attacker has {troops} troop(s), needs at least {required}")]
    InsufficientTroops { troops: Troops, required: Troops },
}

/// Result of a resolved attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub attack_roll: u8,
    pub defend_roll: u8,
    pub attacker_won: bool,
    /// Troops moved into the conquered territory (attacker wins only)
    pub transferred: Option<Troops>,
}

/// Check the attack rules without touching either territory
pub fn check_attack(attacker: &Territory, defender: &Territory) -> Result<(), RuleViolation> {
    if attacker.owner == defender.owner {
        return Err(RuleViolation::SelfAttack {
            faction: attacker.owner.clone(),
        });
    }

    if attacker.troops < MIN_ATTACKING_TROOPS {
        return Err(RuleViolation::InsufficientTroops {
            troops: attacker.troops,
            required: MIN_ATTACKING_TROOPS,
        });
    }

    Ok(())
}

/// Resolve an attack, mutating both territories in place
///
/// # Arguments
/// * `attacker` - Territory committing troops
/// * `defender` - Territory under attack
/// * `dice` - Rolled once for the attacker, then once for the defender
///
/// # Returns
/// The rolls and what changed, or the rule that refused the attack. A
/// refused attack rolls nothing and changes nothing.
pub fn resolve_attack(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut impl DiceRoller,
) -> Result<CombatOutcome, RuleViolation> {
    check_attack(attacker, defender)?;

    let attack_roll = dice.roll();
    let defend_roll = dice.roll();
    let attacker_won = attack_roll > defend_roll;

    let transferred = if attacker_won {
        let moved = (attacker.troops / 2).max(1);
        defender.owner = attacker.owner.clone();
        attacker.troops -= moved;
        defender.troops = moved;
        Some(moved)
    } else {
        attacker.troops = attacker.troops.saturating_sub(1);
        None
    };

    attacker.clamp_troops();
    defender.clamp_troops();

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attack_roll,
        defend_roll,
        attacker_won,
        "attack resolved"
    );

    Ok(CombatOutcome {
        attack_roll,
        defend_roll,
        attacker_won,
        transferred,
    })
}
