//! Headless battle execution
//!
//! Runs a configured battle to completion without any interaction.

use std::path::PathBuf;

use crate::combat::log::{BattleMetadata, CombatantMetadata};
use crate::combat::{Arena, Outcome};
use crate::error::ConfigError;
use crate::rng::GameRng;
use crate::units::Unit;

use super::config::HeadlessBattleConfig;

/// Result of a completed headless battle
///
/// This struct provides programmatic access to battle results for testing and analysis.
#[derive(Debug, Clone)]
pub struct BattleResult {
    pub outcome: Outcome,
    /// Turns played
    pub turns: u32,
    /// Final state of the unit that acted first
    pub challenger: Unit,
    /// Final state of the unit that acted second
    pub defender: Unit,
    /// Random seed used (if deterministic mode)
    pub random_seed: Option<u64>,
    /// Action lines followed by the outcome line
    pub transcript: String,
    /// Where the JSON log was written, if it was requested and succeeded
    pub log_path: Option<PathBuf>,
}

/// Run a headless battle with the given configuration
pub fn run_headless_battle(config: &HeadlessBattleConfig) -> Result<BattleResult, ConfigError> {
    config.validate()?;
    let factory = config.factory()?;

    let mut challenger = factory.create_unit(&config.challenger.kind, &config.challenger.name);
    let mut defender = factory.create_unit(&config.defender.kind, &config.defender.name);
    let mut rng = GameRng::from_optional_seed(config.random_seed);

    let mut arena = Arena::with_max_turns(config.max_turns);
    let report = arena.fight(&mut challenger, &mut defender, &mut rng);

    let log_path = config.output_path.as_deref().and_then(|path| {
        let metadata = BattleMetadata {
            winner: report.outcome.winner_name().map(str::to_string),
            turns: report.turns,
            random_seed: config.random_seed,
            challenger: CombatantMetadata::from(&challenger),
            defender: CombatantMetadata::from(&defender),
        };
        match report.log.save_to_file(&metadata, path) {
            Ok(saved) => Some(saved),
            Err(e) => {
                tracing::error!("Failed to save battle log: {}", e);
                None
            }
        }
    });

    Ok(BattleResult {
        transcript: report.transcript(),
        outcome: report.outcome,
        turns: report.turns,
        challenger,
        defender,
        random_seed: config.random_seed,
        log_path,
    })
}
