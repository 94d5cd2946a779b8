//! Line-based console adapter
//!
//! Reads prompts from any `BufRead`, writes to any `Write`, and turns lines
//! into [`Command`]s for the session. Keeping it generic lets the whole game
//! be driven from a byte buffer in tests.

use std::io::{BufRead, Write};

use crate::combat::DiceRoller;
use crate::core::config::GameConfig;
use crate::core::error::{Result, WarError};
use crate::game::command::{
    parse_territory_count, parse_territory_number, parse_troops, Command, MenuChoice,
};
use crate::game::display::{render_map, render_missions, render_outcome, render_victory};
use crate::game::session::{GameSession, TurnReport};
use crate::ledger::{Ledger, Territory};
use crate::mission::Mission;

/// How a console game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    /// Player chose 0 or the input ran out
    Quit,
    /// A faction completed its mission
    Victory(Mission),
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one line, without its terminator. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Ask for the territory count and every territory's fields
    ///
    /// A bad count is fatal. A bad troop count is corrected to 1 and the
    /// player is told.
    pub fn register(&mut self, config: &GameConfig) -> Result<Ledger> {
        self.say("----------------- COMEÇANDO O JOGO ---------------------")?;

        let line = self
            .prompt("Quantos territórios? ")?
            .ok_or(WarError::InputClosed)?;
        let count = parse_territory_count(&line, config)?;

        let mut territories = Vec::with_capacity(count);
        for number in 1..=count {
            self.say(&format!("\n--- Cadastrando território {}", number))?;
            let name = self.prompt("Nome do território: ")?.ok_or(WarError::InputClosed)?;
            let owner = self.prompt("Cor do exército: ")?.ok_or(WarError::InputClosed)?;
            let troops_line = self.prompt("Número de tropas: ")?.ok_or(WarError::InputClosed)?;

            let entry = parse_troops(&troops_line);
            if entry.corrected {
                tracing::warn!(territory = %name, input = %troops_line, "troop count corrected to 1");
                self.say("Número de tropas inválido, usando 1.")?;
            }

            territories.push(Territory::new(name.trim(), owner.trim(), entry.troops));
        }

        tracing::info!(count, "territories registered");
        Ledger::new(territories)
    }

    /// Run the menu loop until the player quits or a mission is completed
    pub fn play<D: DiceRoller>(&mut self, session: &mut GameSession<D>) -> Result<GameEnd> {
        if let Some(board) = session.missions() {
            let text = render_missions(board);
            self.say(&text)?;
        }

        loop {
            let map = render_map(session.ledger());
            self.say(&map)?;
            self.say("1 - Atacar")?;
            self.say("0 - Sair")?;

            let Some(line) = self.prompt("Escolha: ")? else {
                session.apply(Command::Quit);
                return Ok(GameEnd::Quit);
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Quit => {
                    session.apply(Command::Quit);
                    self.say("Fim de jogo.")?;
                    return Ok(GameEnd::Quit);
                }
                MenuChoice::Invalid(choice) => {
                    tracing::debug!(%choice, "invalid menu choice");
                    self.say("Opção inválida.")?;
                }
                MenuChoice::Attack => {
                    let Some(command) = self.read_attack(session.ledger().len())? else {
                        continue;
                    };
                    if let Some(end) = self.report(session, command)? {
                        return Ok(end);
                    }
                }
            }
        }
    }

    /// Collect attacker and defender numbers. `None` aborts the attack.
    fn read_attack(&mut self, len: usize) -> Result<Option<Command>> {
        let Some(attacker_line) = self.prompt("Território atacante (número): ")? else {
            return Ok(None);
        };
        let Some(defender_line) = self.prompt("Território defensor (número): ")? else {
            return Ok(None);
        };

        let selection = parse_territory_number(&attacker_line, len).and_then(|attacker| {
            let defender = parse_territory_number(&defender_line, len)?;
            if attacker == defender {
                return Err(WarError::SameTerritory);
            }
            Ok(Command::Attack { attacker, defender })
        });

        match selection {
            Ok(command) => Ok(Some(command)),
            Err(e) => {
                self.cancel_attack(e)?;
                Ok(None)
            }
        }
    }

    /// Tell the player why an attack was dropped. Errors the loop cannot
    /// carry on from are passed back up.
    fn cancel_attack(&mut self, e: WarError) -> Result<()> {
        if !e.is_recoverable() {
            return Err(e);
        }
        self.say(&format!("Ataque cancelado: {}", e))
    }

    fn report<D: DiceRoller>(
        &mut self,
        session: &mut GameSession<D>,
        command: Command,
    ) -> Result<Option<GameEnd>> {
        match session.apply(command) {
            TurnReport::Attacked {
                attacker,
                defender,
                outcome,
                winner,
            } => {
                let text = render_outcome(
                    session.ledger().get(attacker)?,
                    session.ledger().get(defender)?,
                    &outcome,
                );
                self.say(&text)?;

                if let Some(mission) = winner {
                    let text = render_victory(&mission);
                    self.say(&text)?;
                    return Ok(Some(GameEnd::Victory(mission)));
                }
            }
            TurnReport::Rejected(e) => self.cancel_attack(e)?,
            TurnReport::Finished => return Ok(Some(GameEnd::Quit)),
        }
        Ok(None)
    }
}

/// Register territories and play one full game on the given streams
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &GameConfig) -> Result<GameEnd> {
    config.validate()?;

    let mut console = Console::new(input, output);
    let ledger = console.register(config)?;
    let mut session = GameSession::new(ledger, config);
    console.play(&mut session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ScriptedDice;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_register_reads_fields() {
        let mut c = console("2\nBrasil\nVerde\n5\nArgentina\nAzul\n3\n");
        let ledger = c.register(&GameConfig::default()).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(crate::core::TerritoryIndex(1)).unwrap().owner(), "Azul");
    }

    #[test]
    fn test_register_corrects_troops() {
        let mut c = console("2\nBrasil\nVerde\n-3\nArgentina\nAzul\nxyz\n");
        let ledger = c.register(&GameConfig::default()).unwrap();

        assert!(ledger.iter().all(|t| t.troops() == 1));
        assert_eq!(output(c).matches("usando 1").count(), 2);
    }

    #[test]
    fn test_register_rejects_one_territory() {
        let mut c = console("1\n");
        assert!(matches!(
            c.register(&GameConfig::default()),
            Err(WarError::InvalidTerritoryCount { got: 1, .. })
        ));
    }

    #[test]
    fn test_register_input_closed() {
        let mut c = console("2\nBrasil\n");
        assert!(matches!(c.register(&GameConfig::default()), Err(WarError::InputClosed)));
    }

    #[test]
    fn test_play_invalid_choice_then_quit() {
        let ledger = Ledger::new(vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Argentina", "Azul", 3),
        ])
        .unwrap();
        let mut session = GameSession::with_parts(ledger, ScriptedDice::new(vec![]), None);
        let mut c = console("7\n0\n");

        let end = c.play(&mut session).unwrap();

        assert_eq!(end, GameEnd::Quit);
        assert!(output(c).contains("Opção inválida."));
    }

    #[test]
    fn test_play_aborts_bad_selection() {
        let ledger = Ledger::new(vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Argentina", "Azul", 3),
        ])
        .unwrap();
        let before = ledger.clone();
        let mut session = GameSession::with_parts(ledger, ScriptedDice::new(vec![]), None);
        let mut c = console("1\n1\n3\n1\n2\n2\n0\n");

        c.play(&mut session).unwrap();

        assert_eq!(session.ledger(), &before);
        let text = output(c);
        assert!(text.contains("Territory 3 does not exist"));
        assert!(text.contains("must be different territories"));
    }

    #[test]
    fn test_play_eof_is_quit() {
        let ledger = Ledger::new(vec![
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Argentina", "Azul", 3),
        ])
        .unwrap();
        let mut session = GameSession::with_parts(ledger, ScriptedDice::new(vec![]), None);
        let mut c = console("");

        assert_eq!(c.play(&mut session).unwrap(), GameEnd::Quit);
        assert!(session.is_over());
    }

    #[test]
    fn test_cancel_attack_only_absorbs_recoverable_errors() {
        let mut c = console("");

        c.cancel_attack(WarError::SameTerritory).unwrap();
        c.cancel_attack(WarError::InvalidNumber("x".to_string())).unwrap();
        assert!(matches!(
            c.cancel_attack(WarError::InputClosed),
            Err(WarError::InputClosed)
        ));

        assert_eq!(output(c).matches("Ataque cancelado").count(), 2);
    }
}
