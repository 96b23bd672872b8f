//! End-to-end execution tests over the bundled canonical content.
//!
//! These tests pin the shipped definition constants: the numbers asserted here
//! are contract values the service and clients rely on, not derived checks.

#![cfg(feature = "loaders")]

use std::sync::Arc;

use combat_content::bundled_registries;
use combat_core::{
    AbilityEvent, AbilityExecutor, AbilityId, EngineError, ErrorSeverity, ExecuteError,
    ExecutionContext, ParticipantId, ParticipantSnapshot, PcgRng, SequenceSource, StateId,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("combat_core=trace")
        .with_test_writer()
        .try_init();
}

fn bundled_executor() -> AbilityExecutor {
    init_tracing();
    let (stats, abilities) = bundled_registries().expect("bundled content must load");
    AbilityExecutor::new(Arc::new(stats), Arc::new(abilities))
}

fn duel() -> Vec<ParticipantSnapshot> {
    vec![
        ParticipantSnapshot::new("caster", "red", 100.0, 100.0)
            .with_stat("stat.attackPower", 30.0),
        ParticipantSnapshot::new("target", "blue", 80.0, 80.0).with_stat("stat.defense", 10.0),
    ]
}

fn party() -> Vec<ParticipantSnapshot> {
    vec![
        ParticipantSnapshot::new("healer", "red", 40.0, 100.0).with_stat("stat.magic", 22.0),
        ParticipantSnapshot::new("tank", "red", 95.0, 100.0),
        ParticipantSnapshot::new("enemy", "blue", 120.0, 120.0),
        ParticipantSnapshot::new("rogue", "red", 60.0, 90.0),
    ]
}

fn quiet_rng() -> Box<SequenceSource> {
    Box::new(SequenceSource::new(Vec::new()))
}

#[test]
fn power_strike_matches_the_golden_fixture() {
    let executor = bundled_executor();
    let context = ExecutionContext::new("caster", duel(), quiet_rng())
        .with_primary_target("target");

    let result = executor
        .execute(&AbilityId::from("ability.powerStrike"), context)
        .unwrap();

    // Canonical fixture: attackPower 30, defense 10, 80 starting health.
    let target = result.participant(&ParticipantId::from("target")).unwrap();
    assert!(
        (target.health - 28.46).abs() < 1e-9,
        "unexpected health {}",
        target.health
    );

    assert_eq!(result.events.len(), 1);
    assert!(matches!(
        &result.events[0],
        AbilityEvent::Damage { target, amount }
            if *target == ParticipantId::from("target") && (*amount - 51.54).abs() < 1e-9
    ));
}

#[test]
fn spirit_blessing_heals_the_party_equally_and_blesses_it() {
    let executor = bundled_executor();
    let context = ExecutionContext::new("healer", party(), quiet_rng());

    let result = executor
        .execute(&AbilityId::from("ability.spiritBlessing"), context)
        .unwrap();

    // 12 + 22 * 0.85 = 30.7, shared by all three allies.
    let heals: Vec<_> = result
        .events
        .iter()
        .filter_map(|event| match event {
            AbilityEvent::Heal { target, amount } => Some((target.clone(), *amount)),
            _ => None,
        })
        .collect();
    assert_eq!(heals.len(), 3);
    for (_, amount) in &heals {
        assert!((amount - 30.7).abs() < 1e-9);
    }

    let rejuvenation = StateId::from("state.rejuvenation");
    for id in ["healer", "tank", "rogue"] {
        let member = result.participant(&ParticipantId::from(id)).unwrap();
        let entry = member
            .states
            .iter()
            .find(|s| s.state == rejuvenation)
            .expect("every ally gains the blessing");
        assert_eq!(entry.remaining_seconds, 6.0);
    }

    // The enemy is untouched.
    let enemy = result.participant(&ParticipantId::from("enemy")).unwrap();
    assert_eq!(enemy.health, 120.0);
    assert!(enemy.states.is_empty());
}

#[test]
fn event_order_follows_node_evaluation_order() {
    let executor = bundled_executor();
    let context = ExecutionContext::new("healer", party(), quiet_rng());

    let result = executor
        .execute(&AbilityId::from("ability.spiritBlessing"), context)
        .unwrap();

    let kinds: Vec<&str> = result.events.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        ["heal", "heal", "heal", "stateApplied", "stateApplied", "stateApplied"]
    );

    // Within one node, targets keep selection (snapshot) order.
    let targets: Vec<&str> = result
        .events
        .iter()
        .map(|e| e.target().as_str())
        .collect();
    assert_eq!(
        targets,
        ["healer", "tank", "rogue", "healer", "tank", "rogue"]
    );
}

#[test]
fn healing_is_not_clamped_to_max_health() {
    let executor = bundled_executor();
    let context = ExecutionContext::new("healer", party(), quiet_rng());

    let result = executor
        .execute(&AbilityId::from("ability.spiritBlessing"), context)
        .unwrap();

    // 95 + 30.7 overshoots the 100 maximum; the executor leaves it that way.
    let tank = result.participant(&ParticipantId::from("tank")).unwrap();
    assert!((tank.health - 125.7).abs() < 1e-9);
    assert!(tank.health > tank.max_health);
}

#[test]
fn cleave_hits_every_enemy_in_snapshot_order() {
    let executor = bundled_executor();
    let roster = vec![
        ParticipantSnapshot::new("caster", "red", 100.0, 100.0)
            .with_stat("stat.attackPower", 10.0),
        ParticipantSnapshot::new("e1", "blue", 50.0, 50.0),
        ParticipantSnapshot::new("ally", "red", 70.0, 70.0),
        ParticipantSnapshot::new("e2", "blue", 50.0, 50.0),
    ];
    let context = ExecutionContext::new("caster", roster, quiet_rng());

    let result = executor
        .execute(&AbilityId::from("ability.cleave"), context)
        .unwrap();

    let targets: Vec<&str> = result.events.iter().map(|e| e.target().as_str()).collect();
    assert_eq!(targets, ["e1", "e2"]);

    // 6 + 10 * 0.9 = 15 on each enemy, no defense to mitigate it.
    assert!((result.total_damage() - 30.0).abs() < 1e-9);
    let ally = result.participant(&ParticipantId::from("ally")).unwrap();
    assert_eq!(ally.health, 70.0);
}

#[test]
fn chaos_bolt_is_deterministic_for_a_fixed_sequence() {
    let executor = bundled_executor();
    let ability = AbilityId::from("ability.chaosBolt");

    let cast = |sequence: Vec<f64>| {
        let context = ExecutionContext::new(
            "caster",
            duel(),
            Box::new(SequenceSource::new(sequence)),
        )
        .with_primary_target("target");
        executor.execute(&ability, context).unwrap()
    };

    let first = cast(vec![0.25, 0.5]);
    let second = cast(vec![0.25, 0.5]);
    assert_eq!(first, second);

    let diverging = cast(vec![0.75]);
    assert_ne!(first.events, diverging.events);
}

#[test]
fn chaos_bolt_is_deterministic_for_a_seed() {
    let executor = bundled_executor();
    let ability = AbilityId::from("ability.chaosBolt");

    let cast = |seed: u64| {
        let context = ExecutionContext::new("caster", duel(), Box::new(PcgRng::seeded(seed)))
            .with_primary_target("target");
        executor.execute(&ability, context).unwrap()
    };

    assert_eq!(cast(99), cast(99));
}

#[test]
fn registry_construction_is_idempotent() {
    init_tracing();
    let first = bundled_registries().unwrap();
    let second = bundled_registries().unwrap();

    let run = |(stats, abilities)| {
        let executor = AbilityExecutor::new(Arc::new(stats), Arc::new(abilities));
        let context = ExecutionContext::new("caster", duel(), quiet_rng())
            .with_primary_target("target");
        executor
            .execute(&AbilityId::from("ability.powerStrike"), context)
            .unwrap()
    };

    assert_eq!(run(first), run(second));
}

#[test]
fn unknown_ability_is_a_validation_error() {
    let executor = bundled_executor();
    let context = ExecutionContext::new("caster", duel(), quiet_rng());

    let error = executor
        .execute(&AbilityId::from("ability.missing"), context)
        .unwrap_err();

    assert!(matches!(error, ExecuteError::AbilityNotFound(_)));
    assert_eq!(error.severity(), ErrorSeverity::Validation);
    assert_eq!(error.error_code(), "EXECUTE_ABILITY_NOT_FOUND");
}

#[test]
fn events_serialize_with_kind_tags() {
    let executor = bundled_executor();
    let context = ExecutionContext::new("healer", party(), quiet_rng());

    let result = executor
        .execute(&AbilityId::from("ability.spiritBlessing"), context)
        .unwrap();

    let payload = serde_json::to_value(&result.events).unwrap();
    assert_eq!(payload[0]["kind"], "heal");
    assert_eq!(payload[0]["target"], "healer");
    assert_eq!(payload[3]["kind"], "stateApplied");
    assert_eq!(payload[3]["state"], "state.rejuvenation");
    assert_eq!(payload[3]["durationSeconds"], 6.0);
}
