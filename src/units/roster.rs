//! Data-driven unit stats
//!
//! Base stats for every kind, optionally overridden from a RON file such as
//! `assets/config/units.ron`. Kinds missing from the file keep their
//! built-in stats.
//!
//! ```ron
//! (
//!     units: {
//!         Paladin: (max_health: 150, attack: 50, resource: 100),
//!         Mage: (max_health: 70, attack: 20, resource: 100),
//!     },
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::UnitKind;
use crate::error::ConfigError;

/// Starting stats for one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub max_health: u32,
    pub attack: u32,
    /// Starting amount of the kind's resource (faith, stealth, rage, arrows or mana)
    #[serde(default)]
    pub resource: u32,
}

impl UnitStats {
    /// Built-in stats for a kind.
    pub const fn base(kind: UnitKind) -> Self {
        match kind {
            UnitKind::Paladin => UnitStats {
                max_health: 150,
                attack: 50,
                resource: 100,
            },
            UnitKind::Assassin => UnitStats {
                max_health: 80,
                attack: 80,
                resource: 90,
            },
            UnitKind::Warrior => UnitStats {
                max_health: 120,
                attack: 25,
                resource: 0,
            },
            UnitKind::Archer => UnitStats {
                max_health: 90,
                attack: 30,
                resource: 12,
            },
            UnitKind::Mage => UnitStats {
                max_health: 70,
                attack: 20,
                resource: 100,
            },
        }
    }
}

/// Stats table consulted by the factory.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UnitRoster {
    #[serde(default)]
    units: HashMap<UnitKind, UnitStats>,
}

impl UnitRoster {
    /// Load a roster from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let roster = Self::from_ron(&contents).map_err(|source| ConfigError::Roster {
            path: path.to_path_buf(),
            source,
        })?;

        roster.validate()?;
        tracing::info!(
            "Loaded unit roster from {:?} ({} overrides)",
            path,
            roster.units.len()
        );
        Ok(roster)
    }

    /// Parse a roster from RON text.
    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    /// A unit with zero max health would start the battle already defeated.
    fn validate(&self) -> Result<(), ConfigError> {
        for (kind, stats) in &self.units {
            if stats.max_health == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must have positive max_health",
                    kind
                )));
            }
        }
        Ok(())
    }

    /// Override stats for a kind.
    pub fn set(&mut self, kind: UnitKind, stats: UnitStats) {
        self.units.insert(kind, stats);
    }

    /// Stats for a kind, falling back to the built-in table.
    pub fn stats(&self, kind: UnitKind) -> UnitStats {
        self.units
            .get(&kind)
            .copied()
            .unwrap_or_else(|| UnitStats::base(kind))
    }
}
