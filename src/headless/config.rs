//! JSON configuration parsing for headless mode
//!
//! Parses JSON battle configurations and turns them into units via the factory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::combat::MAX_TURNS;
use crate::error::ConfigError;
use crate::units::{SquadEntry, UnitFactory, UnitRoster};

/// Headless battle configuration loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessBattleConfig {
    /// Unit acting first each turn
    pub challenger: SquadEntry,
    /// Unit acting second each turn
    pub defender: SquadEntry,
    /// Turn cap (default: 10)
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
    /// Random seed for deterministic battle reproduction
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Where to write the JSON battle log (optional)
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// RON roster overriding the built-in unit stats (optional)
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
}

fn default_max_turns() -> u32 {
    MAX_TURNS
}

impl HeadlessBattleConfig {
    /// Config for two units with default settings.
    pub fn new(challenger: SquadEntry, defender: SquadEntry) -> Self {
        Self {
            challenger,
            defender,
            max_turns: MAX_TURNS,
            random_seed: None,
            output_path: None,
            roster_path: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: HeadlessBattleConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (slot, entry) in [("challenger", &self.challenger), ("defender", &self.defender)] {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must have a name", slot)));
            }
        }

        if self.max_turns == 0 {
            return Err(ConfigError::Invalid("max_turns must be positive".to_string()));
        }

        Ok(())
    }

    /// Factory backed by the configured roster, or built-in stats without one.
    pub fn factory(&self) -> Result<UnitFactory, ConfigError> {
        match &self.roster_path {
            Some(path) => Ok(UnitFactory::new(UnitRoster::load_from_file(path)?)),
            None => Ok(UnitFactory::default()),
        }
    }
}
