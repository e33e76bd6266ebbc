//! Special actions
//!
//! One pure resolver per kind. Each takes the current actor and target by
//! reference and returns their next states along with a description. Nothing
//! is committed until the caller writes the states back.
//!
//! ## Costs
//! | Kind     | Move            | Cost        | Effect                          |
//! |----------|-----------------|-------------|---------------------------------|
//! | Paladin  | Smite / Heal    | 20 faith    | 70 damage / 40 healing          |
//! | Assassin | Shadow Strike   | -           | 2x attack on crit, else -10 stealth |
//! | Warrior  | Heavy Strike    | 30 rage     | 2x attack (else 1x, +20 rage)   |
//! | Archer   | Aimed Shot      | 1 arrow     | attack + 10                     |
//! | Mage     | Fireball        | 25 mana     | 2x attack                       |

use super::{Relation, Resource, Unit, MAX_RAGE};
use crate::rng::RollSource;

pub const SMITE_DAMAGE: u32 = 70;
pub const PALADIN_HEAL: u32 = 40;
pub const FAITH_COST: u32 = 20;
pub const PRAYER_ATTACK_BONUS: u32 = 10;
pub const PRAYER_FAITH_GAIN: u32 = 20;

/// Rolls strictly above this are critical hits.
pub const CRIT_THRESHOLD: u32 = 90;
pub const CRIT_MULTIPLIER: u32 = 2;
pub const STEALTH_LOSS_ON_MISS: u32 = 10;

pub const HEAVY_STRIKE_RAGE: u32 = 30;
pub const RAGE_PER_STRIKE: u32 = 20;

pub const AIMED_SHOT_BONUS: u32 = 10;

pub const FIREBALL_MANA: u32 = 25;

/// What a resolved action did, for logging and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Damage { amount: u32, critical: bool },
    Healing { amount: u32 },
    /// Nothing changed on the target (miss, shortfall, nothing to heal)
    NoEffect,
}

/// Result of resolving a special action without committing it.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub actor: Unit,
    pub target: Unit,
    pub kind: ActionKind,
    pub description: String,
}

/// Resolve `actor`'s special action against `target`.
pub fn resolve_special(
    actor: &Unit,
    target: &Unit,
    relation: Relation,
    rolls: &mut dyn RollSource,
) -> ActionOutcome {
    let mut actor = actor.clone();
    let mut target = target.clone();

    let (kind, description) = match actor.resource {
        Resource::Faith(faith) => paladin_special(&mut actor, faith, &mut target, relation),
        Resource::Stealth { stealth, hidden } => {
            assassin_special(&mut actor, stealth, hidden, &mut target, rolls)
        }
        Resource::Rage(rage) => warrior_special(&mut actor, rage, &mut target),
        Resource::Arrows(arrows) => archer_special(&mut actor, arrows, &mut target),
        Resource::Mana(mana) => mage_special(&mut actor, mana, &mut target),
    };

    ActionOutcome {
        actor,
        target,
        kind,
        description,
    }
}

fn paladin_special(
    actor: &mut Unit,
    faith: u32,
    target: &mut Unit,
    relation: Relation,
) -> (ActionKind, String) {
    match relation {
        Relation::Ally if target.is_full_health() => (
            ActionKind::NoEffect,
            format!(
                "{} lays hands on {}, but it has no effect: already at full health",
                actor.name, target.name
            ),
        ),
        _ if faith < FAITH_COST => (
            ActionKind::NoEffect,
            format!(
                "{} lacks the faith to act ({} of {} needed)",
                actor.name, faith, FAITH_COST
            ),
        ),
        Relation::Ally => {
            let healed = target.heal(PALADIN_HEAL);
            actor.resource = Resource::Faith(faith - FAITH_COST);
            (
                ActionKind::Healing { amount: healed },
                format!(
                    "{} heals {} for {} ({}/{} health)",
                    actor.name, target.name, healed, target.health, target.max_health
                ),
            )
        }
        Relation::Enemy => {
            let dealt = target.take_damage(SMITE_DAMAGE);
            actor.resource = Resource::Faith(faith - FAITH_COST);
            (
                ActionKind::Damage {
                    amount: dealt,
                    critical: false,
                },
                format!(
                    "{} smites {} with holy light for {} damage",
                    actor.name, target.name, dealt
                ),
            )
        }
    }
}

fn assassin_special(
    actor: &mut Unit,
    stealth: u32,
    hidden: bool,
    target: &mut Unit,
    rolls: &mut dyn RollSource,
) -> (ActionKind, String) {
    // One roll per strike, hidden or not.
    let roll = rolls.roll_percent();

    if roll > CRIT_THRESHOLD || hidden {
        let dealt = target.take_damage(actor.attack.saturating_mul(CRIT_MULTIPLIER));
        actor.resource = Resource::Stealth {
            stealth,
            hidden: false,
        };
        (
            ActionKind::Damage {
                amount: dealt,
                critical: true,
            },
            format!(
                "{} strikes {} from the shadows: critical hit for {} damage",
                actor.name, target.name, dealt
            ),
        )
    } else {
        let stealth = stealth.saturating_sub(STEALTH_LOSS_ON_MISS);
        actor.resource = Resource::Stealth { stealth, hidden };
        (
            ActionKind::NoEffect,
            format!(
                "{} misses {} and loses stealth ({} left)",
                actor.name, target.name, stealth
            ),
        )
    }
}

fn warrior_special(actor: &mut Unit, rage: u32, target: &mut Unit) -> (ActionKind, String) {
    if rage >= HEAVY_STRIKE_RAGE {
        let dealt = target.take_damage(actor.attack.saturating_mul(2));
        actor.resource = Resource::Rage(rage - HEAVY_STRIKE_RAGE);
        (
            ActionKind::Damage {
                amount: dealt,
                critical: false,
            },
            format!(
                "{} unleashes a heavy strike on {} for {} damage",
                actor.name, target.name, dealt
            ),
        )
    } else {
        let dealt = target.take_damage(actor.attack);
        let rage = (rage + RAGE_PER_STRIKE).min(MAX_RAGE);
        actor.resource = Resource::Rage(rage);
        (
            ActionKind::Damage {
                amount: dealt,
                critical: false,
            },
            format!(
                "{} strikes {} for {} damage and builds rage ({})",
                actor.name, target.name, dealt, rage
            ),
        )
    }
}

fn archer_special(actor: &mut Unit, arrows: u32, target: &mut Unit) -> (ActionKind, String) {
    if arrows == 0 {
        return (
            ActionKind::NoEffect,
            format!("{} reaches for an arrow, but the quiver is empty", actor.name),
        );
    }

    let dealt = target.take_damage(actor.attack.saturating_add(AIMED_SHOT_BONUS));
    actor.resource = Resource::Arrows(arrows - 1);
    (
        ActionKind::Damage {
            amount: dealt,
            critical: false,
        },
        format!(
            "{} looses an aimed shot at {} for {} damage ({} arrows left)",
            actor.name,
            target.name,
            dealt,
            arrows - 1
        ),
    )
}

fn mage_special(actor: &mut Unit, mana: u32, target: &mut Unit) -> (ActionKind, String) {
    if mana < FIREBALL_MANA {
        return (
            ActionKind::NoEffect,
            format!(
                "{} is out of mana ({} of {} needed)",
                actor.name, mana, FIREBALL_MANA
            ),
        );
    }

    let dealt = target.take_damage(actor.attack.saturating_mul(2));
    actor.resource = Resource::Mana(mana - FIREBALL_MANA);
    (
        ActionKind::Damage {
            amount: dealt,
            critical: false,
        },
        format!(
            "{} hurls a fireball at {} for {} damage",
            actor.name, target.name, dealt
        ),
    )
}
