//! Boss movement system — hit-reaction shake and the full-control phases.
//!
//! Exactly one authority governs a boss's position per tick: an open shake
//! window, the orbit or charge controller, or (for band/follow phases) the
//! generic steering system. Full-control phases also bypass the generic
//! boundary self-destruct; the charge enforces its own overrun cap.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use onslaught_core::components::{ActorState, BossState, ChargeTrack, OrbitTrack};
use onslaught_core::constants::*;
use onslaught_core::enums::{Behavior, ChargeState, OrbitState};
use onslaught_core::profiles::{ActorProfile, BossProfile};
use onslaught_core::types::{ray_boundary_exit, Position, SimClock, Velocity};

use onslaught_ai::phases::shake_offset;

use super::behavior::{active_behavior, active_speed};

/// Run shake and full-control phase movement for every live boss.
pub fn run(
    world: &mut World,
    clock: &SimClock,
    dt: f64,
    target: Option<Position>,
    rng: &mut ChaCha8Rng,
) {
    for (_entity, (pos, vel, state, profile, boss)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &ActorState,
        &ActorProfile,
        &mut BossState,
    )>() {
        if state.dead {
            continue;
        }

        // Hit-reaction window: jitter around the snapshot, not the live
        // position, so the shake and the movement strategy never fight.
        if boss.shake_active(clock.elapsed_secs) {
            let original = *boss.original_position.get_or_insert(*pos);
            let remaining = (boss.hit_until - clock.elapsed_secs) / HIT_REACTION_SECS;
            let offset = shake_offset(rng, remaining);
            *pos = original.stepped(&offset, 1.0);
            *vel = Velocity::zero();
            continue;
        }
        if let Some(original) = boss.original_position.take() {
            *pos = original;
        }

        let Some(boss_profile) = profile.boss.as_ref() else {
            continue;
        };
        let speed = active_speed(profile, Some(&*boss));

        match active_behavior(profile, Some(&*boss)) {
            Behavior::Orbit => {
                orbit_control(pos, vel, &mut boss.orbit, boss_profile, speed, target, clock, dt);
            }
            Behavior::Charge => {
                charge_control(pos, vel, &mut boss.charge, speed, target, clock, dt);
            }
            // Band and pursuit phases are driven by the steering system.
            _ => {}
        }
    }
}

/// Orbit sub-state speed factor, advancing the sub-state machine as the
/// accumulated sweep crosses its angular thresholds.
fn orbit_factor(orbit: &mut OrbitTrack, clock: &SimClock) -> f64 {
    match orbit.state {
        OrbitState::Orbiting => {
            if orbit.swept >= ORBIT_FULL_SWEEP {
                orbit.state = OrbitState::Slowing;
            }
            1.0
        }
        OrbitState::Slowing => {
            if orbit.swept >= ORBIT_FULL_SWEEP + ORBIT_SLOW_SWEEP {
                orbit.state = OrbitState::Stopped;
                orbit.stopped_at = clock.elapsed_secs;
                return 0.0;
            }
            // Floor keeps the sweep advancing so the stop point is reached.
            (1.0 - (orbit.swept - ORBIT_FULL_SWEEP) / ORBIT_SLOW_SWEEP).max(0.1)
        }
        OrbitState::Stopped => {
            if clock.elapsed_secs - orbit.stopped_at >= ORBIT_PAUSE_SECS {
                orbit.state = OrbitState::Resuming;
                orbit.resumed_at = clock.elapsed_secs;
            }
            0.0
        }
        OrbitState::Resuming => {
            let ramp = (clock.elapsed_secs - orbit.resumed_at) / ORBIT_RESUME_SECS;
            if ramp >= 1.0 {
                orbit.state = OrbitState::Orbiting;
                orbit.swept = 0.0;
                1.0
            } else {
                ramp
            }
        }
    }
}

/// Full-control circular movement around the target.
#[allow(clippy::too_many_arguments)]
fn orbit_control(
    pos: &mut Position,
    vel: &mut Velocity,
    orbit: &mut OrbitTrack,
    boss_profile: &BossProfile,
    speed: f64,
    target: Option<Position>,
    clock: &SimClock,
    dt: f64,
) {
    let Some(t) = target else {
        *vel = Velocity::zero();
        return;
    };

    if !orbit.entered {
        // Seed the polar track from the live position to avoid a teleport.
        orbit.entered = true;
        orbit.angle = (pos.y - t.y).atan2(pos.x - t.x);
        let dx = pos.x - t.x;
        let dy = pos.y - t.y;
        orbit.radius = (dx * dx + dy * dy).sqrt().max(1.0);
    }

    let factor = orbit_factor(orbit, clock);
    let angular_velocity = speed / boss_profile.orbit_distance.max(1.0) * factor;
    orbit.angle += angular_velocity * dt;
    orbit.swept += angular_velocity * dt;

    // Ease the radius toward the configured orbit distance.
    let radial_step = (boss_profile.orbit_distance - orbit.radius).clamp(-speed * dt, speed * dt);
    orbit.radius += radial_step;

    pos.x = t.x + orbit.radius * orbit.angle.cos();
    pos.y = t.y + orbit.radius * orbit.angle.sin();
    pos.z += (t.z - pos.z) * (ORBIT_ALTITUDE_EASE * dt).min(1.0);
    *vel = Velocity::zero();
}

/// Full-control wait-then-dash cycle.
fn charge_control(
    pos: &mut Position,
    vel: &mut Velocity,
    charge: &mut ChargeTrack,
    speed: f64,
    target: Option<Position>,
    clock: &SimClock,
    dt: f64,
) {
    match charge.state {
        ChargeState::Waiting => {
            *vel = Velocity::zero();
            charge.pulse = ((clock.elapsed_secs - charge.entered_at) * CHARGE_PULSE_RATE).sin();

            let Some(t) = target else {
                return;
            };
            if clock.elapsed_secs - charge.entered_at >= CHARGE_WAIT_SECS {
                // Commit: extend the boss->target ray to the far boundary.
                let dir = pos.direction_to(&t);
                charge.dash_target = Some(ray_boundary_exit(pos, &dir, WORLD_RADIUS));
                charge.state = ChargeState::Dashing;
                charge.entered_at = clock.elapsed_secs;
                charge.pulse = 0.0;
            }
        }
        ChargeState::Dashing => {
            let Some(dash_target) = charge.dash_target else {
                charge.state = ChargeState::Waiting;
                charge.entered_at = clock.elapsed_secs;
                return;
            };

            let distance = pos.distance_to(&dash_target);
            let overran = !pos.within_radius(WORLD_RADIUS * CHARGE_OVERRUN_FACTOR);
            if distance <= CHARGE_STOP_RADIUS || overran {
                charge.state = ChargeState::Waiting;
                charge.entered_at = clock.elapsed_secs;
                charge.dash_target = None;
                *vel = Velocity::zero();
                return;
            }

            let step = (speed * CHARGE_SPEED_FACTOR * dt).min(distance);
            let dir = pos.direction_to(&dash_target);
            *pos = pos.stepped(&dir, step);
            *vel = Velocity::zero();
        }
    }
}
