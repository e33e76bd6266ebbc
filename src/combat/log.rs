//! Combat logging
//!
//! Records each action and the outcome for display and post-battle analysis.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::LogSaveError;
use crate::units::Unit;

/// A single entry in the combat log
#[derive(Debug, Clone, Serialize)]
pub struct CombatLogEntry {
    /// Turn the event happened in (0 before the first turn)
    pub turn: u32,
    /// The type of event
    pub event_type: CombatLogEventType,
    /// Human-readable description of the event
    pub message: String,
}

/// Types of combat log events for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CombatLogEventType {
    /// Damage dealt
    Damage,
    /// Healing done
    Healing,
    /// Action that changed nothing (miss, shortfall)
    NoEffect,
    /// Unit defeated
    Death,
    /// Battle outcome
    MatchEvent,
}

impl CombatLogEventType {
    /// Whether entries of this type describe a unit's action.
    pub fn is_action(&self) -> bool {
        matches!(
            self,
            CombatLogEventType::Damage | CombatLogEventType::Healing | CombatLogEventType::NoEffect
        )
    }
}

/// End-of-battle snapshot of one unit
#[derive(Debug, Clone, Serialize)]
pub struct CombatantMetadata {
    pub name: String,
    pub kind: String,
    pub max_health: u32,
    pub final_health: u32,
    pub attack: u32,
    pub resource: String,
    pub final_resource: u32,
}

impl From<&Unit> for CombatantMetadata {
    fn from(unit: &Unit) -> Self {
        let resource = unit.resource();
        Self {
            name: unit.name().to_string(),
            kind: unit.kind().name().to_string(),
            max_health: unit.max_health(),
            final_health: unit.health(),
            attack: unit.attack(),
            resource: resource.label().to_string(),
            final_resource: resource.amount(),
        }
    }
}

/// Summary written alongside the entries
#[derive(Debug, Clone, Serialize)]
pub struct BattleMetadata {
    /// Winner's name, or None for a draw
    pub winner: Option<String>,
    pub turns: u32,
    pub random_seed: Option<u64>,
    pub challenger: CombatantMetadata,
    pub defender: CombatantMetadata,
}

#[derive(Serialize)]
struct SavedLog<'a> {
    metadata: &'a BattleMetadata,
    entries: &'a [CombatLogEntry],
}

/// Append-only battle log
#[derive(Debug, Clone, Default)]
pub struct CombatLog {
    /// All log entries in chronological order
    pub entries: Vec<CombatLogEntry>,
    /// Current turn
    pub turn: u32,
}

impl CombatLog {
    /// Clear the log for a new battle
    pub fn clear(&mut self) {
        self.entries.clear();
        self.turn = 0;
    }

    /// Add a new entry to the log
    pub fn log(&mut self, event_type: CombatLogEventType, message: String) {
        self.entries.push(CombatLogEntry {
            turn: self.turn,
            event_type,
            message,
        });
    }

    /// Get entries filtered by event type
    pub fn filter_by_type(&self, event_type: CombatLogEventType) -> Vec<&CombatLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Number of entries produced by unit actions
    pub fn action_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.event_type.is_action())
            .count()
    }

    /// Get the last N entries
    pub fn recent(&self, count: usize) -> Vec<&CombatLogEntry> {
        self.entries.iter().rev().take(count).rev().collect()
    }

    /// Messages in order
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }

    /// Action and outcome messages in order, without death notices
    pub fn transcript_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.event_type != CombatLogEventType::Death)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Write the log as JSON to `path`, creating missing parent directories.
    pub fn save_to_file(
        &self,
        metadata: &BattleMetadata,
        path: &Path,
    ) -> Result<PathBuf, LogSaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| LogSaveError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(&SavedLog {
            metadata,
            entries: &self.entries,
        })?;
        std::fs::write(path, contents).map_err(|source| LogSaveError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved battle log to {:?}", path);
        Ok(path.to_path_buf())
    }
}
