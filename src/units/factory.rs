//! Unit construction from type tags

use serde::{Deserialize, Serialize};

use super::{Unit, UnitKind, UnitRoster};

/// Kind used when a tag is not recognized.
pub const FALLBACK_KIND: UnitKind = UnitKind::Warrior;

/// One member of a squad composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadEntry {
    /// Factory tag, e.g. "warrior", "mage" or "archer"
    pub kind: String,
    pub name: String,
}

impl SquadEntry {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

/// Builds units from type tags using a stats roster.
#[derive(Debug, Clone, Default)]
pub struct UnitFactory {
    roster: UnitRoster,
}

impl UnitFactory {
    pub fn new(roster: UnitRoster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &UnitRoster {
        &self.roster
    }

    /// Map a tag to its kind. Unknown tags become warriors rather than errors.
    pub fn resolve_kind(tag: &str) -> UnitKind {
        UnitKind::from_tag(tag).unwrap_or_else(|| {
            tracing::debug!("Unknown unit kind '{}', defaulting to {}", tag, FALLBACK_KIND);
            FALLBACK_KIND
        })
    }

    /// Build a single unit.
    pub fn create_unit(&self, tag: &str, name: &str) -> Unit {
        let kind = Self::resolve_kind(tag);
        Unit::new(kind, name, self.roster.stats(kind))
    }

    /// Build every entry of `composition`, in order.
    pub fn create_squad(&self, composition: &[SquadEntry]) -> Vec<Unit> {
        composition
            .iter()
            .map(|entry| self.create_unit(&entry.kind, &entry.name))
            .collect()
    }
}
