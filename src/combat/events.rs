//! Battle events and observers
//!
//! The arena forwards every notable event to registered [`BattleObserver`]s in
//! registration order. Observers only watch; they cannot alter the battle.

use std::cell::RefCell;
use std::rc::Rc;

use super::arena::Outcome;
use crate::units::ActionKind;

/// Event fired while a battle runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    BattleStarted {
        challenger: String,
        defender: String,
    },
    ActionResolved {
        turn: u32,
        actor: String,
        target: String,
        kind: ActionKind,
        description: String,
    },
    UnitDefeated {
        turn: u32,
        name: String,
    },
    BattleEnded {
        turns: u32,
        outcome: Outcome,
    },
}

impl BattleEvent {
    /// Turn the event belongs to (0 for the start of the battle)
    pub fn turn(&self) -> u32 {
        match self {
            BattleEvent::BattleStarted { .. } => 0,
            BattleEvent::ActionResolved { turn, .. } | BattleEvent::UnitDefeated { turn, .. } => {
                *turn
            }
            BattleEvent::BattleEnded { turns, .. } => *turns,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            BattleEvent::BattleStarted { challenger, defender } => {
                format!("Battle started: {} vs {}", challenger, defender)
            }
            BattleEvent::ActionResolved { description, .. } => description.clone(),
            BattleEvent::UnitDefeated { name, .. } => format!("{} has been defeated", name),
            BattleEvent::BattleEnded { outcome, .. } => outcome.to_string(),
        }
    }
}

/// Receives battle events.
pub trait BattleObserver {
    fn notify(&mut self, event: &BattleEvent);
}

/// Handle returned when registering an observer, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// Shared view of the lines an [`EventRecorder`] has captured.
#[derive(Debug, Clone, Default)]
pub struct RecordedEvents(Rc<RefCell<Vec<String>>>);

impl RecordedEvents {
    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Observer that keeps a turn-stamped line per event.
///
/// The arena owns the observer once registered, so read the lines through
/// the handle from [`EventRecorder::events`].
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: RecordedEvents,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> RecordedEvents {
        self.events.clone()
    }
}

impl BattleObserver for EventRecorder {
    fn notify(&mut self, event: &BattleEvent) {
        self.events
            .0
            .borrow_mut()
            .push(format!("[turn {}] {}", event.turn(), event.describe()));
    }
}
