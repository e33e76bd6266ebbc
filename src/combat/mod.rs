//! Combat system
//!
//! Implements the battle loop and everything it reports through:
//! - Arena turn alternation and outcome
//! - Combat logging
//! - Battle events and observers

pub mod arena;
pub mod events;
pub mod log;

pub use arena::{Arena, BattleReport, DrawReason, Outcome, Side, MAX_TURNS};
pub use events::{BattleEvent, BattleObserver, EventRecorder, ObserverId, RecordedEvents};
pub use log::{CombatLog, CombatLogEntry, CombatLogEventType};
