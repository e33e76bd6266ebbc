//! Warband - Turn-based Arena Duel Simulator
//!
//! Pits two units against each other and prints the battle log.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use warband::cli;
use warband::headless::{run_headless_battle, HeadlessBattleConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let config = match &args.config {
        Some(path) => match HeadlessBattleConfig::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => args.to_battle_config(),
    };

    match run_headless_battle(&config) {
        Ok(result) => {
            println!("{}", result.transcript);
            if let Some(path) = result.log_path {
                println!("Battle log saved to: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
