//! Game loop: turn commands, the session that applies them, and the
//! console adapter that reads them.

pub mod command;
pub mod console;
pub mod display;
pub mod session;

pub use command::{Command, MenuChoice};
pub use console::{run, Console, GameEnd};
pub use session::{GameSession, TurnReport};
