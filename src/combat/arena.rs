//! Arena turn loop
//!
//! A turn is the challenger acting on the defender, then the defender acting
//! back if it is still standing. Turns repeat until a unit falls or the turn
//! cap is reached.

use std::fmt;

use super::events::{BattleEvent, BattleObserver, ObserverId};
use super::log::{CombatLog, CombatLogEventType};
use crate::rng::RollSource;
use crate::units::{resolve_special, ActionKind, Relation, Unit};

/// Default turn cap
pub const MAX_TURNS: u32 = 10;

/// Which slot of the arena a unit fought from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Challenger,
    Defender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// Both units were at 0 health when the fighting stopped
    BothDefeated,
    /// The turn cap ran out with both units standing
    TurnLimit,
}

/// How a battle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner { side: Side, name: String },
    Draw(DrawReason),
}

impl Outcome {
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw(_))
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self {
            Outcome::Winner { name, .. } => Some(name),
            Outcome::Draw(_) => None,
        }
    }

    /// Decide the result from the units' final state.
    pub fn decide(challenger: &Unit, defender: &Unit) -> Self {
        match (challenger.is_alive(), defender.is_alive()) {
            (false, false) => Outcome::Draw(DrawReason::BothDefeated),
            (true, false) => Outcome::Winner {
                side: Side::Challenger,
                name: challenger.name().to_string(),
            },
            (false, true) => Outcome::Winner {
                side: Side::Defender,
                name: defender.name().to_string(),
            },
            (true, true) => Outcome::Draw(DrawReason::TurnLimit),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { name, .. } => write!(f, "{} wins the battle!", name),
            Outcome::Draw(DrawReason::BothDefeated) => {
                f.write_str("Draw! Both fighters have fallen.")
            }
            Outcome::Draw(DrawReason::TurnLimit) => {
                f.write_str("Draw! Both fighters are still standing when time runs out.")
            }
        }
    }
}

/// Result of one battle
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub outcome: Outcome,
    /// Turns actually played
    pub turns: u32,
    pub log: CombatLog,
}

impl BattleReport {
    /// Action lines followed by the outcome line, newline-joined.
    pub fn transcript(&self) -> String {
        self.log.transcript_lines().join("\n")
    }
}

/// Runs battles between two units.
pub struct Arena {
    max_turns: u32,
    log: CombatLog,
    observers: Vec<(ObserverId, Box<dyn BattleObserver>)>,
    next_observer_id: u64,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        Self::with_max_turns(MAX_TURNS)
    }

    pub fn with_max_turns(max_turns: u32) -> Self {
        Self {
            max_turns,
            log: CombatLog::default(),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn add_observer(&mut self, observer: Box<dyn BattleObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false if no observer was registered under `id`.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Copy of the last battle's action and outcome lines.
    pub fn log(&self) -> Vec<String> {
        self.log.transcript_lines()
    }

    pub fn combat_log(&self) -> &CombatLog {
        &self.log
    }

    /// Run a battle and return the transcript.
    pub fn run_battle(
        &mut self,
        challenger: &mut Unit,
        defender: &mut Unit,
        rolls: &mut dyn RollSource,
    ) -> String {
        self.fight(challenger, defender, rolls).transcript()
    }

    /// Run a battle, mutating both units in place.
    pub fn fight(
        &mut self,
        challenger: &mut Unit,
        defender: &mut Unit,
        rolls: &mut dyn RollSource,
    ) -> BattleReport {
        self.log.clear();
        self.notify(&BattleEvent::BattleStarted {
            challenger: challenger.name().to_string(),
            defender: defender.name().to_string(),
        });
        tracing::info!(
            "Battle setup complete: {} ({}) vs {} ({}), max {} turns",
            challenger.name(),
            challenger.kind(),
            defender.name(),
            defender.kind(),
            self.max_turns
        );

        let mut turns = 0;
        while turns < self.max_turns && challenger.is_alive() && defender.is_alive() {
            turns += 1;
            self.log.turn = turns;

            self.act(challenger, defender, turns, rolls);
            if defender.is_alive() {
                self.act(defender, challenger, turns, rolls);
            }
        }

        let outcome = Outcome::decide(challenger, defender);
        match &outcome {
            Outcome::Winner { name, .. } => {
                tracing::info!("Battle ended after {} turns! {} wins!", turns, name)
            }
            Outcome::Draw(reason) => {
                tracing::info!("Battle ended after {} turns in a DRAW ({:?})", turns, reason)
            }
        }

        self.log.log(CombatLogEventType::MatchEvent, outcome.to_string());
        self.notify(&BattleEvent::BattleEnded {
            turns,
            outcome: outcome.clone(),
        });

        BattleReport {
            outcome,
            turns,
            log: self.log.clone(),
        }
    }

    fn act(&mut self, actor: &mut Unit, target: &mut Unit, turn: u32, rolls: &mut dyn RollSource) {
        let resolved = resolve_special(actor, target, Relation::Enemy, rolls);
        *actor = resolved.actor;
        *target = resolved.target;

        let event_type = match resolved.kind {
            ActionKind::Damage { .. } => CombatLogEventType::Damage,
            ActionKind::Healing { .. } => CombatLogEventType::Healing,
            ActionKind::NoEffect => CombatLogEventType::NoEffect,
        };
        tracing::debug!("turn {}: {}", turn, resolved.description);
        self.log.log(event_type, resolved.description.clone());

        self.notify(&BattleEvent::ActionResolved {
            turn,
            actor: actor.name().to_string(),
            target: target.name().to_string(),
            kind: resolved.kind,
            description: resolved.description,
        });

        if !target.is_alive() {
            self.log.log(
                CombatLogEventType::Death,
                format!("{} has been defeated", target.name()),
            );
            self.notify(&BattleEvent::UnitDefeated {
                turn,
                name: target.name().to_string(),
            });
        }
    }

    fn notify(&mut self, event: &BattleEvent) {
        for (_, observer) in &mut self.observers {
            observer.notify(event);
        }
    }
}
