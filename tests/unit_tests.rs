//! Unit tests for units and their special actions
//!
//! These tests verify that:
//! - Health is floored at zero and capped at max health
//! - Each kind spends its resource as described and degrades to a no-op when short
//! - Assassin crits follow the injected rolls
//! - The pure resolver leaves its inputs untouched

use warband::units::{resolve_special, ActionKind, UnitStats};
use warband::{GameRng, Relation, Resource, RollSource, Unit, UnitKind};

/// Roll source replaying a fixed sequence, repeating the last value.
struct FixedRolls {
    rolls: Vec<u32>,
    next: usize,
}

impl FixedRolls {
    fn new(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.to_vec(),
            next: 0,
        }
    }
}

impl RollSource for FixedRolls {
    fn roll_percent(&mut self) -> u32 {
        let roll = self.rolls[self.next.min(self.rolls.len() - 1)];
        self.next += 1;
        roll
    }
}

fn faith(unit: &Unit) -> u32 {
    match unit.resource() {
        Resource::Faith(faith) => faith,
        other => panic!("expected faith, got {:?}", other),
    }
}

fn stealth(unit: &Unit) -> (u32, bool) {
    match unit.resource() {
        Resource::Stealth { stealth, hidden } => (stealth, hidden),
        other => panic!("expected stealth, got {:?}", other),
    }
}

// =============================================================================
// Base Stats & Health Tests
// =============================================================================

#[test]
fn test_base_stats() {
    let paladin = Unit::paladin("Arthur");
    assert_eq!(paladin.kind(), UnitKind::Paladin);
    assert_eq!(paladin.health(), 150);
    assert_eq!(paladin.attack(), 50);
    assert_eq!(faith(&paladin), 100);

    let assassin = Unit::assassin("Altair");
    assert_eq!(assassin.health(), 80);
    assert_eq!(assassin.attack(), 80);
    assert_eq!(stealth(&assassin), (90, false));
}

#[test]
fn test_is_alive_tracks_health() {
    let unit = Unit::warrior("Tank");
    assert!(unit.is_alive());
    assert!(!unit.with_health(0).is_alive());
}

#[test]
fn test_damage_floors_health_at_zero() {
    let mut mage = Unit::mage("Merlin");
    let taken = mage.take_damage(500);
    assert_eq!(taken, 70, "Only the remaining health should be taken");
    assert_eq!(mage.health(), 0);
    assert_eq!(mage.take_damage(10), 0, "A dead unit takes no further damage");
}

#[test]
fn test_heal_caps_at_max_health() {
    let mut warrior = Unit::warrior("Tank").with_health(100);
    assert_eq!(warrior.heal(50), 20);
    assert_eq!(warrior.health(), warrior.max_health());
}

#[test]
fn test_with_health_clamps_to_max() {
    let archer = Unit::archer("Robin").with_health(1000);
    assert_eq!(archer.health(), archer.max_health());
}

#[test]
fn test_basic_attack_deals_attack_damage() {
    let warrior = Unit::warrior("Tank");
    let mut mage = Unit::mage("Merlin");
    let message = warrior.basic_attack(&mut mage);
    assert_eq!(mage.health(), 45);
    assert_eq!(message, "Tank deals 25 damage to Merlin");
}

#[test]
fn test_basic_attack_floors_health_at_zero() {
    let assassin = Unit::assassin("Altair");
    let mut mage = Unit::mage("Merlin").with_health(30);

    let message = assassin.basic_attack(&mut mage);

    assert_eq!(mage.health(), 0, "Health should stop at zero, not wrap");
    assert!(!mage.is_alive());
    assert_eq!(
        message, "Altair deals 30 damage to Merlin",
        "Message should report the damage actually taken"
    );
}

#[test]
fn test_health_never_exceeds_bounds_over_many_actions() {
    let mut rng = GameRng::from_seed(7);
    let mut units: Vec<Unit> = UnitKind::all()
        .iter()
        .map(|kind| Unit::with_base_stats(*kind, kind.name()))
        .collect();

    for round in 0..40 {
        let len = units.len();
        let (i, j) = (round % len, (round + 1) % len);
        let (mut actor, mut target) = (units[i].clone(), units[j].clone());
        actor.special_action(&mut target, Relation::Enemy, &mut rng);
        units[i] = actor;
        units[j] = target;

        for unit in &units {
            assert!(unit.health() <= unit.max_health());
        }
    }
}

// =============================================================================
// Paladin Tests
// =============================================================================

#[test]
fn test_paladin_smites_enemy_for_70() {
    let mut paladin = Unit::paladin("Arthur");
    let mut enemy = Unit::warrior("Brute");
    let mut rolls = FixedRolls::new(&[0]);

    paladin.special_action(&mut enemy, Relation::Enemy, &mut rolls);

    assert_eq!(enemy.health(), 50, "Enemy should lose exactly 70 health");
    assert_eq!(faith(&paladin), 80, "Smite should cost 20 faith");
}

#[test]
fn test_paladin_smite_floors_enemy_at_zero() {
    let mut paladin = Unit::paladin("Arthur");
    let mut enemy = Unit::assassin("Altair").with_health(30);

    paladin.special_action(&mut enemy, Relation::Enemy, &mut FixedRolls::new(&[0]));

    assert_eq!(enemy.health(), 0);
    assert_eq!(faith(&paladin), 80);
}

#[test]
fn test_paladin_full_health_ally_has_no_effect() {
    let mut paladin = Unit::paladin("Arthur");
    let mut ally = Unit::archer("Robin");

    let message = paladin.special_action(&mut ally, Relation::Ally, &mut FixedRolls::new(&[0]));

    assert!(message.contains("no effect"), "Unexpected message: {}", message);
    assert_eq!(faith(&paladin), 100, "No faith should be spent");
    assert_eq!(ally.health(), ally.max_health());
}

#[test]
fn test_paladin_heals_wounded_ally() {
    let mut paladin = Unit::paladin("Arthur");
    let mut ally = Unit::paladin("Lancelot").with_health(100);

    paladin.special_action(&mut ally, Relation::Ally, &mut FixedRolls::new(&[0]));

    assert_eq!(ally.health(), 140);
    assert_eq!(faith(&paladin), 80);
}

#[test]
fn test_paladin_heal_caps_at_max_health() {
    let mut paladin = Unit::paladin("Arthur");
    let mut ally = Unit::paladin("Lancelot").with_health(130);

    paladin.special_action(&mut ally, Relation::Ally, &mut FixedRolls::new(&[0]));

    assert_eq!(ally.health(), 150);
}

#[test]
fn test_paladin_without_faith_does_nothing() {
    let stats = UnitStats {
        max_health: 150,
        attack: 50,
        resource: 10,
    };
    let mut paladin = Unit::new(UnitKind::Paladin, "Arthur", stats);
    let mut enemy = Unit::warrior("Brute");

    let message = paladin.special_action(&mut enemy, Relation::Enemy, &mut FixedRolls::new(&[0]));

    assert!(message.contains("lacks the faith"), "Unexpected message: {}", message);
    assert_eq!(enemy.health(), 120);
    assert_eq!(faith(&paladin), 10);
}

#[test]
fn test_paladin_without_faith_still_reports_full_health_ally() {
    let stats = UnitStats {
        max_health: 150,
        attack: 50,
        resource: 10,
    };
    let mut paladin = Unit::new(UnitKind::Paladin, "Arthur", stats);
    let mut ally = Unit::warrior("Tank");

    let message = paladin.special_action(&mut ally, Relation::Ally, &mut FixedRolls::new(&[0]));

    assert!(
        message.contains("no effect"),
        "Full-health ally takes precedence over the faith check: {}",
        message
    );
    assert!(!message.contains("lacks the faith"), "Unexpected message: {}", message);
    assert_eq!(ally.health(), 120);
    assert_eq!(faith(&paladin), 10, "No faith should be spent");
}

#[test]
fn test_paladin_faith_runs_out_after_five_smites() {
    let mut paladin = Unit::paladin("Arthur");
    let mut rolls = FixedRolls::new(&[0]);

    for _ in 0..5 {
        let mut dummy = Unit::warrior("Dummy");
        paladin.special_action(&mut dummy, Relation::Enemy, &mut rolls);
        assert_eq!(dummy.health(), 50);
    }
    assert_eq!(faith(&paladin), 0);

    let mut dummy = Unit::warrior("Dummy");
    paladin.special_action(&mut dummy, Relation::Enemy, &mut rolls);
    assert_eq!(dummy.health(), 120, "Sixth smite should have no effect");
}

#[test]
fn test_paladin_prayer() {
    let mut paladin = Unit::paladin("Arthur");
    let message = paladin.pray();
    assert_eq!(message, "Arthur prays and gains divine strength!");
    assert_eq!(paladin.attack(), 60);
    assert_eq!(faith(&paladin), 120);
}

#[test]
fn test_paladin_prayer_saturates_near_max() {
    let stats = UnitStats {
        max_health: 150,
        attack: u32::MAX - 5,
        resource: u32::MAX - 5,
    };
    let mut paladin = Unit::new(UnitKind::Paladin, "Arthur", stats);

    paladin.pray();

    assert_eq!(paladin.attack(), u32::MAX, "Attack should saturate instead of wrapping");
    assert_eq!(faith(&paladin), u32::MAX, "Faith should saturate instead of wrapping");

    paladin.pray();
    assert_eq!(paladin.attack(), u32::MAX);
    assert_eq!(faith(&paladin), u32::MAX);
}

#[test]
fn test_prayer_does_nothing_for_other_kinds() {
    let mut warrior = Unit::warrior("Tank");
    warrior.pray();
    assert_eq!(warrior.attack(), 25);
    assert_eq!(warrior.resource(), Resource::Rage(0));
}

// =============================================================================
// Assassin Tests
// =============================================================================

#[test]
fn test_assassin_crit_above_threshold() {
    let mut assassin = Unit::assassin("Altair");
    let mut target = Unit::warrior("Brute");

    assassin.special_action(&mut target, Relation::Enemy, &mut FixedRolls::new(&[91]));

    assert_eq!(target.health(), 0, "160 crit damage should drop a 120 health warrior");
    assert_eq!(stealth(&assassin), (90, false), "A crit keeps stealth");
}

#[test]
fn test_assassin_roll_of_90_misses() {
    let mut assassin = Unit::assassin("Altair");
    let mut target = Unit::paladin("Arthur");

    let mut rolls = FixedRolls::new(&[90]);
    let message = assassin.special_action(&mut target, Relation::Enemy, &mut rolls);

    assert!(message.contains("misses"), "Unexpected message: {}", message);
    assert_eq!(target.health(), 150);
    assert_eq!(stealth(&assassin), (80, false));
}

#[test]
fn test_assassin_stealth_floors_at_zero() {
    let mut assassin = Unit::assassin("Altair");
    let mut target = Unit::paladin("Arthur");
    let mut rolls = FixedRolls::new(&[0]);

    for _ in 0..12 {
        assassin.special_action(&mut target, Relation::Enemy, &mut rolls);
    }

    assert_eq!(stealth(&assassin), (0, false));
    assert_eq!(target.health(), 150);
}

#[test]
fn test_hidden_assassin_always_crits_once() {
    let mut assassin = Unit::assassin("Altair");
    let mut target = Unit::paladin("Arthur");
    let mut rolls = FixedRolls::new(&[0]);

    assassin.hide_in_shadows();
    assert_eq!(stealth(&assassin), (90, true));

    assassin.special_action(&mut target, Relation::Enemy, &mut rolls);
    assert_eq!(target.health(), 0, "Hidden strike should crit for 160");
    assert_eq!(stealth(&assassin), (90, false), "Crit clears the hidden flag");

    let mut second = Unit::paladin("Lancelot");
    assassin.special_action(&mut second, Relation::Enemy, &mut rolls);
    assert_eq!(second.health(), 150, "Next strike rolls normally again");
}

#[test]
fn test_hiding_restores_stealth() {
    let mut assassin = Unit::assassin("Altair");
    let mut target = Unit::paladin("Arthur");
    let mut rolls = FixedRolls::new(&[0]);
    for _ in 0..3 {
        assassin.special_action(&mut target, Relation::Enemy, &mut rolls);
    }
    assert_eq!(stealth(&assassin).0, 60);

    assassin.hide_in_shadows();
    assert_eq!(stealth(&assassin), (90, true));
}

// =============================================================================
// Warrior, Archer & Mage Tests
// =============================================================================

#[test]
fn test_warrior_builds_then_spends_rage() {
    let mut warrior = Unit::warrior("Tank");
    let mut target = Unit::paladin("Arthur");
    let mut rolls = FixedRolls::new(&[0]);

    warrior.special_action(&mut target, Relation::Enemy, &mut rolls);
    assert_eq!(target.health(), 125);
    assert_eq!(warrior.resource(), Resource::Rage(20));

    warrior.special_action(&mut target, Relation::Enemy, &mut rolls);
    assert_eq!(target.health(), 100);
    assert_eq!(warrior.resource(), Resource::Rage(40));

    warrior.special_action(&mut target, Relation::Enemy, &mut rolls);
    assert_eq!(target.health(), 50, "Heavy strike deals double attack");
    assert_eq!(warrior.resource(), Resource::Rage(10));
}

#[test]
fn test_archer_spends_one_arrow_per_shot() {
    let mut archer = Unit::archer("Robin");
    let mut target = Unit::paladin("Arthur");

    archer.special_action(&mut target, Relation::Enemy, &mut FixedRolls::new(&[0]));

    assert_eq!(target.health(), 110);
    assert_eq!(archer.resource(), Resource::Arrows(11));
}

#[test]
fn test_archer_with_empty_quiver_does_nothing() {
    let stats = UnitStats {
        max_health: 90,
        attack: 30,
        resource: 0,
    };
    let mut archer = Unit::new(UnitKind::Archer, "Robin", stats);
    let mut target = Unit::paladin("Arthur");

    let message = archer.special_action(&mut target, Relation::Enemy, &mut FixedRolls::new(&[0]));

    assert!(message.contains("quiver is empty"), "Unexpected message: {}", message);
    assert_eq!(target.health(), 150);
}

#[test]
fn test_mage_fireball_costs_mana() {
    let mut mage = Unit::mage("Merlin");
    let mut target = Unit::paladin("Arthur");

    mage.special_action(&mut target, Relation::Enemy, &mut FixedRolls::new(&[0]));

    assert_eq!(target.health(), 110);
    assert_eq!(mage.resource(), Resource::Mana(75));
}

#[test]
fn test_mage_out_of_mana_does_nothing() {
    let stats = UnitStats {
        max_health: 70,
        attack: 20,
        resource: 20,
    };
    let mut mage = Unit::new(UnitKind::Mage, "Merlin", stats);
    let mut target = Unit::paladin("Arthur");

    let message = mage.special_action(&mut target, Relation::Enemy, &mut FixedRolls::new(&[0]));

    assert_eq!(message, "Merlin is out of mana (20 of 25 needed)");
    assert_eq!(target.health(), 150);
    assert_eq!(mage.resource(), Resource::Mana(20));
}

// =============================================================================
// Pure Resolver Tests
// =============================================================================

#[test]
fn test_resolve_special_leaves_inputs_untouched() {
    let paladin = Unit::paladin("Arthur");
    let enemy = Unit::assassin("Altair");

    let outcome = resolve_special(&paladin, &enemy, Relation::Enemy, &mut FixedRolls::new(&[0]));

    assert_eq!(paladin, Unit::paladin("Arthur"));
    assert_eq!(enemy, Unit::assassin("Altair"));
    assert_eq!(outcome.target.health(), 10);
    assert_eq!(faith(&outcome.actor), 80);
    assert_eq!(
        outcome.kind,
        ActionKind::Damage {
            amount: 70,
            critical: false
        }
    );
}

#[test]
fn test_resolve_special_reports_crit() {
    let assassin = Unit::assassin("Altair");
    let target = Unit::paladin("Arthur");

    let mut rolls = FixedRolls::new(&[100]);
    let outcome = resolve_special(&assassin, &target, Relation::Enemy, &mut rolls);

    assert_eq!(
        outcome.kind,
        ActionKind::Damage {
            amount: 150,
            critical: true
        }
    );
}

#[test]
fn test_kind_never_changes() {
    let mut assassin = Unit::assassin("Altair");
    let mut target = Unit::paladin("Arthur");
    let mut rolls = FixedRolls::new(&[95, 0, 50]);
    for _ in 0..3 {
        assassin.special_action(&mut target, Relation::Enemy, &mut rolls);
        target.special_action(&mut assassin, Relation::Enemy, &mut rolls);
    }
    assert_eq!(assassin.kind(), UnitKind::Assassin);
    assert_eq!(target.kind(), UnitKind::Paladin);
}
