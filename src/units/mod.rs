//! Units
//!
//! A [`Unit`] is one combatant: shared stats (health, attack) plus a
//! kind-specific [`Resource`]. The kind is a plain enum tag chosen at
//! construction; behavior is dispatched over it in [`abilities`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rng::RollSource;

pub mod abilities;
pub mod factory;
pub mod roster;

pub use abilities::{resolve_special, ActionKind, ActionOutcome};
pub use factory::{SquadEntry, UnitFactory};
pub use roster::{UnitRoster, UnitStats};

/// Stealth an assassin returns to when hiding.
pub const FULL_STEALTH: u32 = 90;
/// Upper bound for warrior rage.
pub const MAX_RAGE: u32 = 100;

/// Available unit kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Paladin,
    Assassin,
    Warrior,
    Archer,
    Mage,
}

impl UnitKind {
    /// Get all available unit kinds
    pub fn all() -> &'static [UnitKind] {
        &[
            UnitKind::Paladin,
            UnitKind::Assassin,
            UnitKind::Warrior,
            UnitKind::Archer,
            UnitKind::Mage,
        ]
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Paladin => "Paladin",
            UnitKind::Assassin => "Assassin",
            UnitKind::Warrior => "Warrior",
            UnitKind::Archer => "Archer",
            UnitKind::Mage => "Mage",
        }
    }

    /// Get a short description
    pub fn description(&self) -> &'static str {
        match self {
            UnitKind::Paladin => "Holy knight who smites enemies and mends allies",
            UnitKind::Assassin => "Shadow striker relying on critical hits",
            UnitKind::Warrior => "Sturdy melee fighter fuelled by rage",
            UnitKind::Archer => "Ranged fighter with a limited quiver",
            UnitKind::Mage => "Powerful spellcaster with a mana pool",
        }
    }

    /// Parse a factory tag. Matching ignores case and surrounding whitespace.
    pub fn from_tag(tag: &str) -> Option<UnitKind> {
        let tag = tag.trim();
        UnitKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific resource pool. Counters saturate at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Paladin: spent on smite and heal
    Faith(u32),
    /// Assassin: stealth counter and whether the next special is a guaranteed crit
    Stealth { stealth: u32, hidden: bool },
    /// Warrior: built by plain strikes, spent on heavy ones
    Rage(u32),
    /// Archer: one arrow per shot
    Arrows(u32),
    /// Mage: spent on fireballs
    Mana(u32),
}

impl Resource {
    /// Starting resource for a kind given its configured amount.
    pub fn initial(kind: UnitKind, amount: u32) -> Self {
        match kind {
            UnitKind::Paladin => Resource::Faith(amount),
            UnitKind::Assassin => Resource::Stealth {
                stealth: amount,
                hidden: false,
            },
            UnitKind::Warrior => Resource::Rage(amount.min(MAX_RAGE)),
            UnitKind::Archer => Resource::Arrows(amount),
            UnitKind::Mage => Resource::Mana(amount),
        }
    }

    /// Current counter value, whatever the pool is called.
    pub fn amount(&self) -> u32 {
        match *self {
            Resource::Faith(v) | Resource::Rage(v) | Resource::Arrows(v) | Resource::Mana(v) => v,
            Resource::Stealth { stealth, .. } => stealth,
        }
    }

    /// Display label of the pool
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Faith(_) => "faith",
            Resource::Stealth { .. } => "stealth",
            Resource::Rage(_) => "rage",
            Resource::Arrows(_) => "arrows",
            Resource::Mana(_) => "mana",
        }
    }
}

/// How the acting unit regards its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Ally,
    Enemy,
}

/// A single combatant.
///
/// `kind` and `name` are fixed at construction. Health stays within
/// `0..=max_health` through every mutation this type exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    name: String,
    kind: UnitKind,
    health: u32,
    max_health: u32,
    attack: u32,
    resource: Resource,
}

impl Unit {
    /// Build a unit of `kind` from explicit stats.
    pub fn new(kind: UnitKind, name: impl Into<String>, stats: UnitStats) -> Self {
        Self {
            name: name.into(),
            kind,
            health: stats.max_health,
            max_health: stats.max_health,
            attack: stats.attack,
            resource: Resource::initial(kind, stats.resource),
        }
    }

    /// Build a unit of `kind` with the built-in base stats.
    pub fn with_base_stats(kind: UnitKind, name: impl Into<String>) -> Self {
        Self::new(kind, name, UnitStats::base(kind))
    }

    pub fn paladin(name: impl Into<String>) -> Self {
        Self::with_base_stats(UnitKind::Paladin, name)
    }

    pub fn assassin(name: impl Into<String>) -> Self {
        Self::with_base_stats(UnitKind::Assassin, name)
    }

    pub fn warrior(name: impl Into<String>) -> Self {
        Self::with_base_stats(UnitKind::Warrior, name)
    }

    pub fn archer(name: impl Into<String>) -> Self {
        Self::with_base_stats(UnitKind::Archer, name)
    }

    pub fn mage(name: impl Into<String>) -> Self {
        Self::with_base_stats(UnitKind::Mage, name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_full_health(&self) -> bool {
        self.health >= self.max_health
    }

    /// Returns a copy with health set, clamped to `0..=max_health`.
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(self.max_health);
        self
    }

    /// Apply damage, flooring health at 0. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    /// Restore health, capped at max health. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }

    /// Plain strike for `attack` damage.
    pub fn basic_attack(&self, target: &mut Unit) -> String {
        let dealt = target.take_damage(self.attack);
        format!("{} deals {} damage to {}", self.name, dealt, target.name)
    }

    /// Kind-specific move against `target`, applied in place.
    ///
    /// Never fails: a unit short on its resource reports a no-op instead.
    pub fn special_action(
        &mut self,
        target: &mut Unit,
        relation: Relation,
        rolls: &mut dyn RollSource,
    ) -> String {
        let outcome = resolve_special(self, target, relation, rolls);
        *self = outcome.actor;
        *target = outcome.target;
        outcome.description
    }

    /// Paladin prayer: +10 attack and +20 faith.
    pub fn pray(&mut self) -> String {
        match self.resource {
            Resource::Faith(faith) => {
                self.attack = self.attack.saturating_add(abilities::PRAYER_ATTACK_BONUS);
                self.resource =
                    Resource::Faith(faith.saturating_add(abilities::PRAYER_FAITH_GAIN));
                format!("{} prays and gains divine strength!", self.name)
            }
            _ => format!("{} kneels, but no god answers a {}", self.name, self.kind),
        }
    }

    /// Assassin vanish: stealth back to full and the next special is a guaranteed crit.
    pub fn hide_in_shadows(&mut self) -> String {
        match self.resource {
            Resource::Stealth { .. } => {
                self.resource = Resource::Stealth {
                    stealth: FULL_STEALTH,
                    hidden: true,
                };
                format!("{} melts into the shadows", self.name)
            }
            _ => format!("{} has nowhere to hide", self.name),
        }
    }
}
