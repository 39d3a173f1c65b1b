//! Tests for geometry helpers and the profile registry.

use crate::constants::WORLD_RADIUS;
use crate::enums::{ActorKind, Behavior};
use crate::profiles::{ActorProfile, ProfileOverrides, ProfileRegistry};
use crate::types::{ray_boundary_exit, Position, Velocity};

#[test]
fn test_distance_and_direction() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 4.0, 0.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);

    let dir = a.direction_to(&b);
    assert!((dir.speed() - 1.0).abs() < 1e-12);
    assert!((dir.x - 0.6).abs() < 1e-12);
    assert!((dir.y - 0.8).abs() < 1e-12);
}

#[test]
fn test_direction_to_coincident_points_is_finite() {
    let a = Position::new(5.0, 5.0, 5.0);
    let dir = a.direction_to(&a);
    assert!((dir.speed() - 1.0).abs() < 1e-12);
}

#[test]
fn test_boundary_test() {
    assert!(Position::new(0.0, 0.0, 0.0).within_radius(WORLD_RADIUS));
    assert!(Position::new(WORLD_RADIUS - 1.0, 0.0, 0.0).within_radius(WORLD_RADIUS));
    assert!(!Position::new(WORLD_RADIUS + 1.0, 0.0, 0.0).within_radius(WORLD_RADIUS));
}

#[test]
fn test_perpendicular_is_orthogonal() {
    let v = Velocity::new(3.0, -2.0, 1.5);
    let p = v.perpendicular_horizontal();
    let dot = v.x * p.x + v.y * p.y;
    assert!(dot.abs() < 1e-12, "horizontal dot product should vanish");
    assert!((p.speed() - 1.0).abs() < 1e-12);
}

#[test]
fn test_rotated_z_preserves_speed() {
    let v = Velocity::new(10.0, 0.0, 3.0);
    let r = v.rotated_z(std::f64::consts::FRAC_PI_2);
    assert!((r.speed() - v.speed()).abs() < 1e-9);
    assert!(r.x.abs() < 1e-9);
    assert!((r.y - 10.0).abs() < 1e-9);
}

#[test]
fn test_ray_boundary_exit_lands_on_sphere() {
    let origin = Position::new(100.0, -50.0, 10.0);
    let target = Position::new(0.0, 0.0, 0.0);
    let dir = origin.direction_to(&target);
    let exit = ray_boundary_exit(&origin, &dir, WORLD_RADIUS);
    assert!(
        (exit.range_from_origin() - WORLD_RADIUS).abs() < 1e-6,
        "exit point should sit on the boundary sphere"
    );
    // The exit must be on the far side: beyond the origin along the ray.
    assert!(exit.distance_to(&origin) > origin.range_from_origin());
}

#[test]
fn test_builtin_registry_resolves_all_kinds() {
    let registry = ProfileRegistry::builtin();
    for kind in [
        ActorKind::Stalker,
        ActorKind::Drifter,
        ActorKind::Gunner,
        ActorKind::Minelayer,
        ActorKind::Overseer,
        ActorKind::Colossus,
    ] {
        let profile = registry.resolve(kind).expect("builtin profile");
        assert_eq!(profile.kind, kind);
        assert!(profile.max_health > 0.0);
        assert!(profile.speed > 0.0);
    }
}

#[test]
fn test_boss_phase_tables_are_strictly_decreasing() {
    let registry = ProfileRegistry::builtin();
    for kind in [ActorKind::Overseer, ActorKind::Colossus] {
        let boss = registry.resolve(kind).unwrap().boss.as_ref().unwrap();
        assert!(boss.thresholds_valid(), "{kind:?} phase table invalid");
    }
}

#[test]
fn test_threshold_validation_rejects_bad_tables() {
    let mut boss = ProfileRegistry::builtin()
        .resolve(ActorKind::Overseer)
        .unwrap()
        .boss
        .clone()
        .unwrap();
    boss.phases[1].threshold = 80.0; // not decreasing
    assert!(!boss.thresholds_valid());

    boss.phases.clear();
    assert!(!boss.thresholds_valid());
}

#[test]
fn test_overrides_apply_only_set_fields() {
    let registry = ProfileRegistry::builtin();
    let mut profile: ActorProfile = registry.resolve(ActorKind::Stalker).unwrap().clone();
    let base_speed = profile.speed;

    let overrides = ProfileOverrides {
        max_health: Some(99.0),
        behavior: Some(Behavior::Patrol),
        ..Default::default()
    };
    overrides.apply(&mut profile);

    assert_eq!(profile.max_health, 99.0);
    assert_eq!(profile.behavior, Behavior::Patrol);
    assert_eq!(profile.speed, base_speed);
}

#[test]
fn test_registry_json_round_trip() {
    let registry = ProfileRegistry::builtin();
    let json = serde_json::to_string(&registry).unwrap();
    let restored = ProfileRegistry::from_json(&json).unwrap();
    assert_eq!(restored.len(), registry.len());
    assert_eq!(
        restored.resolve(ActorKind::Minelayer),
        registry.resolve(ActorKind::Minelayer)
    );
}
