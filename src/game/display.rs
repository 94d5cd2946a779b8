//! Console text for the map, combat results and missions

use std::fmt::Write;

use crate::combat::CombatOutcome;
use crate::ledger::{Ledger, Territory};
use crate::mission::{Mission, MissionBoard};

const RULE: &str = "=======================================";

/// World map block listing every territory
pub fn render_map(ledger: &Ledger) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "     MAPA DO MUNDO - ESTADO ATUAL");
    let _ = writeln!(out, "{}", RULE);
    for (index, territory) in ledger.iter_indexed() {
        let _ = writeln!(
            out,
            "{}. {} (Exército {}, Tropas: {})",
            index,
            territory.name(),
            territory.owner(),
            territory.troops()
        );
    }
    out
}

/// Combat log for one resolved attack, rendered from the post-combat territories
pub fn render_outcome(attacker: &Territory, defender: &Territory, outcome: &CombatOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- RESULTADO DA BATALHA ---");
    let _ = writeln!(out, "{} rolou um dado e tirou: {}", attacker.name(), outcome.attack_roll);
    let _ = writeln!(out, "{} rolou um dado e tirou: {}", defender.name(), outcome.defend_roll);

    match outcome.transferred {
        Some(moved) => {
            let _ = writeln!(
                out,
                "VITÓRIA DO ATAQUE! {} foi conquistado pelo exército {} com {} tropa(s).",
                defender.name(),
                defender.owner(),
                moved
            );
        }
        None => {
            let _ = writeln!(out, "VITÓRIA DA DEFESA! {} perdeu 1 tropa.", attacker.name());
        }
    }
    out
}

/// Mission list shown at the start of a game
pub fn render_missions(board: &MissionBoard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- MISSÕES ---");
    for mission in board.missions() {
        let _ = writeln!(out, "Exército {}: {}", mission.owner, mission.text);
    }
    out
}

pub fn render_victory(mission: &Mission) -> String {
    format!(
        "*** MISSÃO CUMPRIDA! O exército {} venceu: {} ***\n",
        mission.owner, mission.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::MissionKind;

    fn ledger() -> Ledger {
        Ledger::new(vec![
            Territory::new("Brasil", "Verde", 3),
            Territory::new("Argentina", "Verde", 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_map_lists_one_based() {
        let map = render_map(&ledger());
        assert!(map.contains("MAPA DO MUNDO"));
        assert!(map.contains("1. Brasil (Exército Verde, Tropas: 3)"));
        assert!(map.contains("2. Argentina (Exército Verde, Tropas: 2)"));
    }

    #[test]
    fn test_outcome_attacker_win() {
        let outcome = CombatOutcome {
            attack_roll: 6,
            defend_roll: 2,
            attacker_won: true,
            transferred: Some(2),
        };
        let attacker = Territory::new("Brasil", "Verde", 3);
        let defender = Territory::new("Argentina", "Verde", 2);
        let text = render_outcome(&attacker, &defender, &outcome);
        assert!(text.contains("Brasil rolou um dado e tirou: 6"));
        assert!(text.contains("Argentina rolou um dado e tirou: 2"));
        assert!(text.contains("VITÓRIA DO ATAQUE"));
        assert!(text.contains("exército Verde com 2 tropa(s)"));
    }

    #[test]
    fn test_outcome_defender_win() {
        let outcome = CombatOutcome {
            attack_roll: 3,
            defend_roll: 3,
            attacker_won: false,
            transferred: None,
        };
        let attacker = Territory::new("Brasil", "Verde", 1);
        let defender = Territory::new("Argentina", "Azul", 10);
        let text = render_outcome(&attacker, &defender, &outcome);
        assert!(text.contains("VITÓRIA DA DEFESA! Brasil perdeu 1 tropa."));
    }

    #[test]
    fn test_missions_and_victory() {
        let mission = Mission::new("Azul", "Dominar o mapa.", MissionKind::Majority);
        let board = MissionBoard::from_missions(vec![mission.clone()]);
        assert!(render_missions(&board).contains("Exército Azul: Dominar o mapa."));
        assert!(render_victory(&mission).contains("O exército Azul venceu"));
    }
}
