//! Tests for the adversary engine: spawning, steering, boss phases,
//! projectiles, and the event stream.

use onslaught_core::components::{ActorId, BossState, Projectile};
use onslaught_core::constants::*;
use onslaught_core::enums::{ActorKind, OrbitState, ProjectileKind};
use onslaught_core::events::{ActorHandle, EngineEvent};
use onslaught_core::profiles::{ProfileOverrides, ProfileRegistry};
use onslaught_core::types::{Position, Velocity};

use crate::engine::{AdversaryEngine, EngineConfig};

const DT: f64 = 1.0 / 60.0;

fn engine_with_seed(seed: u64) -> AdversaryEngine {
    AdversaryEngine::new(EngineConfig {
        seed,
        ..Default::default()
    })
}

fn actor_position(engine: &AdversaryEngine, handle: ActorHandle) -> Option<Position> {
    engine
        .world()
        .query::<(&ActorId, &Position)>()
        .iter()
        .find(|(_, (id, _))| id.0 == handle.0)
        .map(|(_, (_, pos))| *pos)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = engine_with_seed(12345);
    let mut engine_b = engine_with_seed(12345);

    for engine in [&mut engine_a, &mut engine_b] {
        engine
            .spawn(ActorKind::Gunner, Position::new(200.0, 0.0, 0.0), None)
            .unwrap();
        engine
            .spawn(ActorKind::Minelayer, Position::new(250.0, 50.0, 0.0), None)
            .unwrap();
        engine
            .spawn(ActorKind::Overseer, Position::new(-150.0, 0.0, 0.0), None)
            .unwrap();
    }

    let target = Some(Position::new(0.0, 0.0, 0.0));
    for _ in 0..600 {
        let events_a = engine_a.update(DT, target);
        let events_b = engine_b.update(DT, target);

        let json_a = serde_json::to_string(&events_a).unwrap();
        let json_b = serde_json::to_string(&events_b).unwrap();
        assert_eq!(json_a, json_b, "event streams diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine_with_seed(111);
    let mut engine_b = engine_with_seed(222);

    // Patrol re-rolls are RNG-driven, so drifter paths diverge.
    let handle_a = engine_a
        .spawn(ActorKind::Drifter, Position::new(0.0, 0.0, 0.0), None)
        .unwrap();
    let handle_b = engine_b
        .spawn(ActorKind::Drifter, Position::new(0.0, 0.0, 0.0), None)
        .unwrap();

    for _ in 0..1200 {
        engine_a.update(DT, None);
        engine_b.update(DT, None);
    }

    let pos_a = actor_position(&engine_a, handle_a).unwrap();
    let pos_b = actor_position(&engine_b, handle_b).unwrap();
    assert!(
        pos_a.distance_to(&pos_b) > 1e-9,
        "different seeds produced identical drifter paths"
    );
}

// ---- Steering ----

#[test]
fn test_stalker_closes_and_damps() {
    let mut engine = engine_with_seed(7);
    let handle = engine
        .spawn(ActorKind::Stalker, Position::new(300.0, 0.0, 0.0), None)
        .unwrap();
    let target = Position::new(0.0, 0.0, 0.0);

    for _ in 0..900 {
        engine.update(DT, Some(target));
    }

    assert!(engine.is_alive(handle));
    let pos = actor_position(&engine, handle).unwrap();
    let range = pos.distance_to(&target);
    // Closed into the follow radius, but the damping keeps it off the hull.
    assert!(range <= FOLLOW_CLOSE_RADIUS, "range was {range}");
    assert!(range > TARGET_CONTACT_RADIUS, "stalker rammed the target");
}

#[test]
fn test_no_targeting_without_finite_target() {
    let mut engine = engine_with_seed(7);
    let start = Position::new(100.0, 0.0, 0.0);
    let handle = engine.spawn(ActorKind::Stalker, start, None).unwrap();

    let bad_target = Position::new(f64::NAN, 0.0, 0.0);
    for _ in 0..60 {
        let events = engine.update(DT, Some(bad_target));
        assert!(events.is_empty());
    }

    assert!(engine.is_alive(handle));
    let pos = actor_position(&engine, handle).unwrap();
    assert!(pos.distance_to(&start) < 1e-9, "actor moved without a target");

    // Targeting resumes as soon as valid input returns.
    let target = Position::new(0.0, 0.0, 0.0);
    for _ in 0..60 {
        engine.update(DT, Some(target));
    }
    let pos = actor_position(&engine, handle).unwrap();
    assert!(
        pos.distance_to(&target) < start.distance_to(&target),
        "actor failed to resume pursuit"
    );
}

#[test]
fn test_gunner_holds_band_and_hits() {
    let mut engine = engine_with_seed(3);
    engine
        .spawn(ActorKind::Gunner, Position::new(150.0, 0.0, 0.0), None)
        .unwrap();
    let target = Position::new(0.0, 0.0, 0.0);

    let mut spawned = 0;
    let mut hit_damage = None;
    for _ in 0..1200 {
        for event in engine.update(DT, Some(target)) {
            match event {
                EngineEvent::ProjectileSpawned { config } => {
                    assert_eq!(config.kind, ProjectileKind::Ballistic);
                    assert_eq!(config.owner, ActorKind::Gunner);
                    spawned += 1;
                }
                EngineEvent::TargetHit { damage, .. } => hit_damage = Some(damage),
                _ => {}
            }
        }
    }

    assert!(spawned >= 2, "gunner fired {spawned} rounds in 20s");
    assert_eq!(hit_damage, Some(5.0));
}

// ---- Boss phases ----

fn phase_transitions(events: &[EngineEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            EngineEvent::PhaseTransition { phase, .. } => Some(*phase),
            _ => None,
        })
        .collect()
}

#[test]
fn test_overseer_phase_walk() {
    let mut engine = engine_with_seed(1);
    let handle = engine
        .spawn(ActorKind::Overseer, Position::new(200.0, 0.0, 0.0), None)
        .unwrap();

    // 26% of 900 hp: 74% remaining crosses the 75% threshold.
    assert!(!engine.notify_external_damage(handle, 234.0, Velocity::new(-1.0, 0.0, 0.0)));
    let events = engine.update(DT, None);
    assert_eq!(phase_transitions(&events), vec![2]);

    // Another 30%: 44% remaining crosses the 50% threshold.
    assert!(!engine.notify_external_damage(handle, 270.0, Velocity::new(-1.0, 0.0, 0.0)));
    let events = engine.update(DT, None);
    assert_eq!(phase_transitions(&events), vec![3]);

    // Same health again produces no further transition.
    let events = engine.update(DT, None);
    assert!(phase_transitions(&events).is_empty());
    assert!(engine.is_alive(handle));
}

#[test]
fn test_orbit_phase_cycles_substates() {
    let mut engine = engine_with_seed(5);
    let handle = engine
        .spawn(ActorKind::Overseer, Position::new(200.0, 0.0, 0.0), None)
        .unwrap();
    // 26% of 900 hp enters phase 2, whose strategy is Orbit.
    engine.notify_external_damage(handle, 234.0, Velocity::new(-1.0, 0.0, 0.0));

    let orbit_state = |engine: &AdversaryEngine| -> OrbitState {
        engine
            .world()
            .query::<&BossState>()
            .iter()
            .next()
            .map(|(_, boss)| boss.orbit.state)
            .unwrap()
    };

    let target = Position::new(0.0, 0.0, 0.0);
    let mut seen: Vec<OrbitState> = Vec::new();
    // 120 simulated seconds covers several full orbit cycles.
    for _ in 0..7200 {
        engine.update(DT, Some(target));
        let state = orbit_state(&engine);
        if !seen.contains(&state) {
            seen.push(state);
        }
    }

    for state in [
        OrbitState::Orbiting,
        OrbitState::Slowing,
        OrbitState::Stopped,
        OrbitState::Resuming,
    ] {
        assert!(seen.contains(&state), "sub-state {state:?} never entered");
    }

    // The radius eased onto the configured orbit distance and held there.
    let pos = actor_position(&engine, handle).unwrap();
    let range = pos.distance_to(&target);
    assert!(range > 60.0 && range < 200.0, "orbit range was {range}");
}

#[test]
fn test_lethal_hit_emits_no_phase_cue() {
    let mut engine = engine_with_seed(2);
    let handle = engine
        .spawn(ActorKind::Overseer, Position::new(200.0, 0.0, 0.0), None)
        .unwrap();

    // A one-shot kill from full health crosses every threshold at once.
    assert!(engine.notify_external_damage(handle, 900.0, Velocity::new(-1.0, 0.0, 0.0)));
    let events = engine.update(DT, None);

    assert!(phase_transitions(&events).is_empty(), "phase cue on a dead boss");
    assert!(events
        .iter()
        .any(|e| matches!(e, EngineEvent::BossDefeated { handle: h } if *h == handle)));
    assert!(events
        .iter()
        .any(|e| matches!(e, EngineEvent::ActorDestroyed { .. })));
}

#[test]
fn test_boss_hit_drops_rewards_and_restores_position() {
    let mut engine = engine_with_seed(1);
    let start = Position::new(-150.0, 0.0, 0.0);
    let handle = engine.spawn(ActorKind::Overseer, start, None).unwrap();

    engine.notify_external_damage(handle, 10.0, Velocity::new(1.0, 0.0, 0.0));
    let events = engine.update(DT, None);
    let drops = events
        .iter()
        .filter(|e| matches!(e, EngineEvent::RewardDropped { .. }))
        .count();
    assert_eq!(drops, 2);

    // Ride out the hit reaction; the shake must leave no residual offset.
    for _ in 0..60 {
        engine.update(DT, None);
    }
    let pos = actor_position(&engine, handle).unwrap();
    assert!(pos.distance_to(&start) < 1e-9, "shake displaced the boss");
}

#[test]
fn test_charge_stays_in_arena() {
    let mut engine = engine_with_seed(9);
    let handle = engine
        .spawn(ActorKind::Colossus, Position::new(-300.0, 0.0, 0.0), None)
        .unwrap();
    // 45% of 1400 hp: 55% remaining enters the first charge phase.
    engine.notify_external_damage(handle, 630.0, Velocity::new(1.0, 0.0, 0.0));

    let target = Position::new(100.0, 50.0, 0.0);
    for _ in 0..1800 {
        engine.update(DT, Some(target));
        let pos = actor_position(&engine, handle).unwrap();
        assert!(
            pos.range_from_origin() <= WORLD_RADIUS * CHARGE_OVERRUN_FACTOR + 1.0,
            "charge escaped the arena"
        );
    }
    assert!(engine.is_alive(handle));
}

// ---- Projectiles ----

#[test]
fn test_minelayer_mine_detonates_on_target() {
    let mut engine = engine_with_seed(4);
    engine
        .spawn(ActorKind::Minelayer, Position::new(300.0, 0.0, 0.0), None)
        .unwrap();
    let target = Position::new(0.0, 0.0, 0.0);

    let mut mine_launched = false;
    let mut detonated = false;
    // 40 simulated seconds covers the attack interval plus the spiral-in.
    for _ in 0..2400 {
        for event in engine.update(DT, Some(target)) {
            match event {
                EngineEvent::ProjectileSpawned { config }
                    if config.kind == ProjectileKind::GuidedMine =>
                {
                    mine_launched = true;
                }
                EngineEvent::TargetHit { damage, .. } if damage == 12.0 => {
                    detonated = true;
                }
                _ => {}
            }
        }
        if detonated {
            break;
        }
    }

    assert!(mine_launched, "minelayer never launched a mine");
    assert!(detonated, "mine never reached the target");
}

#[test]
fn test_missed_shots_expire_and_despawn() {
    let mut engine = engine_with_seed(6);
    engine
        .spawn(ActorKind::Gunner, Position::new(100.0, 0.0, 0.0), None)
        .unwrap();
    let target = Position::new(0.0, 0.0, 0.0);

    // Let the gunner get at least one round into the air.
    let mut launched = 0;
    for _ in 0..150 {
        for event in engine.update(DT, Some(target)) {
            if matches!(event, EngineEvent::ProjectileSpawned { .. }) {
                launched += 1;
            }
        }
    }
    assert!(launched >= 1, "gunner never fired");

    // Target gone: in-flight rounds can no longer connect and must be
    // removed by lifetime expiry alone.
    for _ in 0..600 {
        engine.update(DT, None);
    }

    let live = engine.world().query::<&Projectile>().iter().count();
    assert_eq!(live, 0, "{live} projectiles outlived their lifetime");
}

// ---- Spawning and destruction ----

#[test]
fn test_spawn_unknown_kind_fails() {
    let mut engine = AdversaryEngine::new(EngineConfig {
        seed: 1,
        profiles: ProfileRegistry::empty(),
    });
    let result = engine.spawn(ActorKind::Stalker, Position::new(0.0, 0.0, 0.0), None);
    assert!(result.is_err());
    assert_eq!(engine.actor_count(), 0);
}

#[test]
fn test_spawn_non_finite_position_fails() {
    let mut engine = engine_with_seed(1);
    let result = engine.spawn(
        ActorKind::Stalker,
        Position::new(f64::INFINITY, 0.0, 0.0),
        None,
    );
    assert!(result.is_err());
    assert_eq!(engine.actor_count(), 0);
}

#[test]
fn test_spawn_overrides_apply() {
    let mut engine = engine_with_seed(1);
    let overrides = ProfileOverrides {
        max_health: Some(1800.0),
        ..Default::default()
    };
    let handle = engine
        .spawn(
            ActorKind::Overseer,
            Position::new(200.0, 0.0, 0.0),
            Some(&overrides),
        )
        .unwrap();

    // 234 hp is 26% of the stock pool but only 13% of this one, so the
    // first phase threshold is not crossed.
    engine.notify_external_damage(handle, 234.0, Velocity::new(-1.0, 0.0, 0.0));
    let events = engine.update(DT, None);
    assert!(phase_transitions(&events).is_empty());
    assert!(engine.is_alive(handle));
}

#[test]
fn test_destruction_is_at_most_once() {
    let mut engine = engine_with_seed(1);
    let handle = engine
        .spawn(ActorKind::Stalker, Position::new(50.0, 0.0, 0.0), None)
        .unwrap();

    assert!(engine.notify_external_damage(handle, 25.0, Velocity::new(1.0, 0.0, 0.0)));
    // A second report on the same frame is absorbed.
    assert!(!engine.notify_external_damage(handle, 25.0, Velocity::new(1.0, 0.0, 0.0)));

    let events = engine.update(DT, None);
    let destroyed = events
        .iter()
        .filter(|e| matches!(e, EngineEvent::ActorDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1);
    assert!(!engine.is_alive(handle));
    assert_eq!(engine.actor_count(), 0);
}

#[test]
fn test_destroyed_actor_reports_reward_payload() {
    let mut engine = engine_with_seed(1);
    let handle = engine
        .spawn(ActorKind::Gunner, Position::new(50.0, 0.0, 0.0), None)
        .unwrap();
    engine.notify_external_damage(handle, 30.0, Velocity::new(1.0, 0.0, 0.0));

    let events = engine.update(DT, None);
    let payload = events.iter().find_map(|e| match e {
        EngineEvent::ActorDestroyed {
            handle: h,
            reward_count,
            ..
        } => Some((*h, *reward_count)),
        _ => None,
    });
    assert_eq!(payload, Some((handle, 2)));
}

#[test]
fn test_invalid_phase_table_degrades_to_rank_and_file() {
    let mut profiles = ProfileRegistry::builtin();
    let mut profile = profiles.resolve(ActorKind::Overseer).unwrap().clone();
    profile.boss.as_mut().unwrap().phases[1].threshold = 90.0; // not decreasing
    profiles.insert(profile);

    let mut engine = AdversaryEngine::new(EngineConfig { seed: 1, profiles });
    let handle = engine
        .spawn(ActorKind::Overseer, Position::new(200.0, 0.0, 0.0), None)
        .unwrap();

    // Without a valid boss profile the actor fights as rank-and-file:
    // a single hit is lethal and no phase events are emitted.
    assert!(engine.notify_external_damage(handle, 1.0, Velocity::new(-1.0, 0.0, 0.0)));
    let events = engine.update(DT, None);
    assert!(phase_transitions(&events).is_empty());
    assert!(!engine.is_alive(handle));
}

#[test]
fn test_despawn_all() {
    let mut engine = engine_with_seed(1);
    let handle = engine
        .spawn(ActorKind::Stalker, Position::new(50.0, 0.0, 0.0), None)
        .unwrap();
    engine
        .spawn(ActorKind::Drifter, Position::new(-50.0, 0.0, 0.0), None)
        .unwrap();
    assert_eq!(engine.actor_count(), 2);

    engine.despawn_all();
    assert_eq!(engine.actor_count(), 0);
    assert!(!engine.is_alive(handle));
    assert!(engine.update(DT, None).is_empty());
}
