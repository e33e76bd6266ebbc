//! Command-line interface for Warband
//!
//! Either runs a battle described by a JSON config file or builds one from flags.

use clap::Parser;
use std::path::PathBuf;

use crate::combat::MAX_TURNS;
use crate::headless::HeadlessBattleConfig;
use crate::units::SquadEntry;

/// Turn-based arena duel simulator
#[derive(Parser, Debug)]
#[command(name = "warband")]
#[command(about = "Turn-based arena duel simulator")]
#[command(version)]
pub struct Args {
    /// Run the battle described by this JSON config file (other battle flags are ignored)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Kind of the unit acting first (paladin, assassin, warrior, archer, mage)
    #[arg(long, default_value = "paladin")]
    pub challenger: String,

    /// Name of the unit acting first
    #[arg(long, default_value = "Arthur")]
    pub challenger_name: String,

    /// Kind of the unit acting second
    #[arg(long, default_value = "assassin")]
    pub defender: String,

    /// Name of the unit acting second
    #[arg(long, default_value = "Altair")]
    pub defender_name: String,

    /// Random seed for a reproducible battle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of turns
    #[arg(long, default_value_t = MAX_TURNS)]
    pub max_turns: u32,

    /// Output path for the JSON battle log
    #[arg(long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// RON file overriding unit base stats
    #[arg(long, value_name = "ROSTER_FILE")]
    pub roster: Option<PathBuf>,
}

impl Args {
    /// Battle config described by the flags alone.
    pub fn to_battle_config(&self) -> HeadlessBattleConfig {
        HeadlessBattleConfig {
            challenger: SquadEntry::new(&self.challenger, &self.challenger_name),
            defender: SquadEntry::new(&self.defender, &self.defender_name),
            max_turns: self.max_turns,
            random_seed: self.seed,
            output_path: self.output.clone(),
            roster_path: self.roster.clone(),
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}
