//! Actor steering system — refreshes the target-distance cache and runs the
//! movement-strategy dispatch for every live actor.
//!
//! Full-control boss phases (orbit, charge) and an open shake window are
//! left alone here; the boss system is the single movement authority for
//! those. A missing target no-ops every target-dependent strategy for the
//! tick while patrol and idle still run.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use onslaught_core::components::{ActorState, BossState, Hostile};
use onslaught_core::constants::{ATTACK_BAND_FRACTION, ATTACK_BAND_MARGIN};
use onslaught_core::enums::Behavior;
use onslaught_core::profiles::{ActorProfile, PhaseSpec};
use onslaught_core::types::{Position, SimClock, Velocity};

use onslaught_ai::phases::spec_for_phase;
use onslaught_ai::steering::{evaluate, SteeringContext};

/// Phase override spec for a boss actor, if it has advanced past phase 1.
pub fn phase_spec<'a>(
    profile: &'a ActorProfile,
    boss: Option<&BossState>,
) -> Option<&'a PhaseSpec> {
    let boss = boss?;
    let table = profile.boss.as_ref()?;
    spec_for_phase(&table.phases, boss.phase)
}

/// Movement strategy in effect this tick: the phase override for bosses
/// past phase 1, the base profile tag otherwise.
pub fn active_behavior(profile: &ActorProfile, boss: Option<&BossState>) -> Behavior {
    phase_spec(profile, boss)
        .map(|spec| spec.behavior)
        .unwrap_or(profile.behavior)
}

/// Effective speed including the phase speed factor.
pub fn active_speed(profile: &ActorProfile, boss: Option<&BossState>) -> f64 {
    profile.speed * phase_spec(profile, boss).map_or(1.0, |spec| spec.speed_factor)
}

/// Run steering for all live actors. Collects updates into a buffer first
/// to keep the hecs borrows disjoint, then applies them.
pub fn run(world: &mut World, clock: &SimClock, target: Option<Position>, rng: &mut ChaCha8Rng) {
    let mut updates: Vec<(hecs::Entity, f64, Option<Velocity>)> = Vec::new();

    {
        let mut query = world.query::<(
            &Hostile,
            &Position,
            &Velocity,
            &ActorState,
            &ActorProfile,
            Option<&BossState>,
        )>();
        for (entity, (_hostile, pos, vel, state, profile, boss)) in query.iter() {
            if state.dead {
                continue;
            }

            let range = target.map_or(f64::MAX, |t| pos.distance_to(&t));

            // The shake window owns the position this tick.
            if boss.is_some_and(|b| b.shake_active(clock.elapsed_secs)) {
                updates.push((entity, range, None));
                continue;
            }

            let behavior = active_behavior(profile, boss);
            let (optimal_range, band_margin) = match (behavior, profile.boss.as_ref()) {
                (Behavior::KeepDistance, Some(bp)) => (bp.orbit_distance, bp.band_margin),
                _ => (
                    profile.engagement_range * ATTACK_BAND_FRACTION,
                    ATTACK_BAND_MARGIN,
                ),
            };

            let ctx = SteeringContext {
                behavior,
                position: *pos,
                velocity: *vel,
                target,
                range_to_target: range,
                elapsed_secs: clock.elapsed_secs,
                speed: active_speed(profile, boss),
                optimal_range,
                band_margin,
            };
            updates.push((entity, range, evaluate(&ctx, rng)));
        }
    }

    for (entity, range, new_velocity) in updates {
        if let Ok(mut state) = world.get::<&mut ActorState>(entity) {
            state.range_to_target = range;
        }
        if let Some(v) = new_velocity {
            if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
                *vel = v;
            }
        }
    }
}
