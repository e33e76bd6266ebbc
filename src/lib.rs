//! Warband - Turn-based Arena Duel Simulator
//!
//! Units with kind-specific special actions fight in an arena that alternates
//! turns until one falls or the turn cap is reached.
//!
//! This library exposes the simulation modules for testing and reuse.

pub mod cli;
pub mod combat;
pub mod error;
pub mod headless;
pub mod rng;
pub mod units;

// Re-export commonly used types
pub use combat::{Arena, BattleReport, CombatLog, CombatLogEventType, Outcome};
pub use error::{ConfigError, LogSaveError};
pub use headless::HeadlessBattleConfig;
pub use rng::{GameRng, RollSource};
pub use units::{Relation, Resource, SquadEntry, Unit, UnitFactory, UnitKind};
