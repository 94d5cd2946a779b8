//! Territory War - Entry Point
//!
//! Parses the command line, sets up logging on stderr, and runs one game on
//! stdin/stdout.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use territory_war::core::GameConfig;
use territory_war::game::{run, GameEnd};
use tracing_subscriber::EnvFilter;

/// Text-menu territory war game
#[derive(Parser, Debug)]
#[command(name = "territory-war")]
#[command(about = "Register territories, roll dice for them, complete your mission")]
struct Args {
    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Play without missions (the game only ends when you quit)
    #[arg(long)]
    no_missions: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "territory_war=debug"
    } else {
        "territory_war=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = GameConfig::new().with_missions(!args.no_missions);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let stdin = io::stdin();
    match run(stdin.lock(), io::stdout(), &config) {
        Ok(GameEnd::Victory(mission)) => {
            tracing::info!(faction = %mission.owner, "game won");
            ExitCode::SUCCESS
        }
        Ok(GameEnd::Quit) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("Erro: {}", e);
            ExitCode::FAILURE
        }
    }
}
