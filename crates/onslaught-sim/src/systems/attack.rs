//! Attack gating system — fires projectiles when an actor's cooldown has
//! elapsed and the target sits within its engagement range.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::components::*;
use onslaught_core::constants::VOLLEY_SPREAD_ANGLE;
use onslaught_core::enums::{ActorKind, ProjectileKind};
use onslaught_core::events::{EngineEvent, ProjectileConfig};
use onslaught_core::profiles::{ActorProfile, ProjectileSpec};
use onslaught_core::types::{Position, SimClock, Velocity};

use onslaught_ai::mines::{steer, MineContext};

use super::behavior::phase_spec;
use crate::world_setup;

struct Shot {
    shooter: Entity,
    owner: ActorKind,
    spec: ProjectileSpec,
    position: Position,
    direction: Velocity,
    range: f64,
}

/// Run attack gating; spawns projectile entities and emits
/// `ProjectileSpawned` for each.
pub fn run(
    world: &mut World,
    clock: &SimClock,
    target: Option<Position>,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<EngineEvent>,
) {
    let Some(t) = target else {
        return;
    };

    let mut shots: Vec<Shot> = Vec::new();

    {
        let mut query = world.query::<(
            &Hostile,
            &Position,
            &ActorState,
            &ActorProfile,
            Option<&BossState>,
        )>();
        for (entity, (_hostile, pos, state, profile, boss)) in query.iter() {
            if state.dead {
                continue;
            }
            let Some(spec) = profile.projectile else {
                continue;
            };
            if state.range_to_target > profile.engagement_range {
                continue;
            }

            let phase = phase_spec(profile, boss);
            let interval =
                profile.attack_interval_secs * phase.map_or(1.0, |p| p.attack_interval_factor);
            if clock.elapsed_secs - state.last_attack_at <= interval {
                continue;
            }

            let volley = phase.map_or(1, |p| p.volley).max(1);
            let aim = pos.direction_to(&t);
            for i in 0..volley {
                let spread = (i as f64 - (volley - 1) as f64 / 2.0) * VOLLEY_SPREAD_ANGLE;
                shots.push(Shot {
                    shooter: entity,
                    owner: profile.kind,
                    spec,
                    // Muzzle sits just outside the body radius.
                    position: pos.stepped(&aim.rotated_z(spread), profile.size + 1.0),
                    direction: aim.rotated_z(spread),
                    range: state.range_to_target,
                });
            }
        }
    }

    for shot in shots {
        if let Ok(mut state) = world.get::<&mut ActorState>(shot.shooter) {
            state.last_attack_at = clock.elapsed_secs;
        }
        let config = launch(world, clock, &t, rng, &shot);
        events.push(EngineEvent::ProjectileSpawned { config });
    }
}

/// Spawn one projectile entity and return its renderer config.
fn launch(
    world: &mut World,
    clock: &SimClock,
    target: &Position,
    rng: &mut ChaCha8Rng,
    shot: &Shot,
) -> ProjectileConfig {
    match shot.spec {
        ProjectileSpec::Ballistic {
            speed,
            lifetime_secs,
            damage,
        } => {
            let velocity = shot.direction.scaled(speed);
            let projectile = Projectile {
                kind: ProjectileKind::Ballistic,
                owner: shot.owner,
                damage,
                age_secs: 0.0,
                lifetime_secs,
                spawned_tick: clock.tick,
                fate: None,
            };
            world_setup::spawn_ballistic(world, projectile, shot.position, velocity);
            ProjectileConfig {
                kind: ProjectileKind::Ballistic,
                owner: shot.owner,
                position: shot.position,
                velocity,
                damage,
                lifetime_secs,
            }
        }
        ProjectileSpec::GuidedMine {
            speed,
            lifetime_secs,
            damage,
            gravity,
            tangential,
            spiral,
            min_orbit_radius,
        } => {
            let guided = GuidedState {
                speed,
                gravity,
                tangential,
                spiral,
                min_orbit_radius,
                // The spiral starts at the launch distance and only shrinks.
                current_orbit_radius: shot.range.max(min_orbit_radius),
                orbit_sign: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
                last_steer_at: clock.elapsed_secs,
            };
            let velocity = steer(&MineContext {
                position: shot.position,
                target: *target,
                speed,
                gravity,
                tangential,
                orbit_sign: guided.orbit_sign,
                current_orbit_radius: guided.current_orbit_radius,
                min_orbit_radius,
            });
            let projectile = Projectile {
                kind: ProjectileKind::GuidedMine,
                owner: shot.owner,
                damage,
                age_secs: 0.0,
                lifetime_secs,
                spawned_tick: clock.tick,
                fate: None,
            };
            world_setup::spawn_mine(world, projectile, guided, shot.position, velocity);
            ProjectileConfig {
                kind: ProjectileKind::GuidedMine,
                owner: shot.owner,
                position: shot.position,
                velocity,
                damage,
                lifetime_secs,
            }
        }
    }
}
