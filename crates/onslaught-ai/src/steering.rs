//! Movement-strategy steering.
//!
//! One pure function per strategy, dispatched over the closed `Behavior`
//! enum. Each returns the velocity for this tick, or `None` when the
//! current velocity should be kept (patrol between re-rolls).

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::constants::*;
use onslaught_core::enums::Behavior;
use onslaught_core::types::{Position, Velocity};

/// Input to the steering dispatch for a single actor.
pub struct SteeringContext {
    pub behavior: Behavior,
    pub position: Position,
    pub velocity: Velocity,
    /// Target position, absent when the host passed nothing valid this tick.
    pub target: Option<Position>,
    pub range_to_target: f64,
    pub elapsed_secs: f64,
    /// Effective speed (base speed times any phase factor).
    pub speed: f64,
    /// Center of the distance band for `Attack`/`KeepDistance`.
    pub optimal_range: f64,
    /// Half-width of the distance band.
    pub band_margin: f64,
}

/// Evaluate the active strategy. `None` keeps the current velocity.
///
/// `Orbit` and `Charge` are full-control boss phases that own the position
/// outright; they are handled by the boss system, never here.
pub fn evaluate(ctx: &SteeringContext, rng: &mut ChaCha8Rng) -> Option<Velocity> {
    match ctx.behavior {
        Behavior::Idle => Some(Velocity::zero()),
        Behavior::Follow => follow(ctx),
        Behavior::Patrol => patrol(ctx, rng),
        Behavior::Attack | Behavior::KeepDistance => distance_band(ctx),
        Behavior::Orbit | Behavior::Charge => None,
    }
}

/// Straight pursuit; inside the close radius the actor stops pressing in
/// and bleeds speed by a fixed per-tick damping factor.
fn follow(ctx: &SteeringContext) -> Option<Velocity> {
    let target = ctx.target?;
    if ctx.range_to_target > FOLLOW_CLOSE_RADIUS {
        Some(ctx.position.direction_to(&target).scaled(ctx.speed))
    } else {
        Some(ctx.velocity.scaled(FOLLOW_DAMPING))
    }
}

/// Low-probability-per-tick random heading re-roll, bounded by max speed.
fn patrol(ctx: &SteeringContext, rng: &mut ChaCha8Rng) -> Option<Velocity> {
    if !rng.gen_bool(PATROL_REROLL_CHANCE) {
        return None;
    }
    let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let pitch: f64 = rng.gen_range(-0.3..0.3);
    let speed = ctx.speed * rng.gen_range(PATROL_MIN_SPEED_FACTOR..1.0);
    Some(Velocity::new(
        speed * bearing.cos() * pitch.cos(),
        speed * bearing.sin() * pitch.cos(),
        speed * pitch.sin(),
    ))
}

/// Hold a band of `optimal_range ± band_margin` around the target:
/// approach when too far, retreat when too close, otherwise strafe
/// perpendicular with a time-oscillating side.
fn distance_band(ctx: &SteeringContext) -> Option<Velocity> {
    let target = ctx.target?;
    let to_target = ctx.position.direction_to(&target);

    if ctx.range_to_target > ctx.optimal_range + ctx.band_margin {
        return Some(to_target.scaled(ctx.speed));
    }
    if ctx.range_to_target < ctx.optimal_range - ctx.band_margin {
        return Some(to_target.scaled(-ctx.speed));
    }

    let side = if (ctx.elapsed_secs * STRAFE_OSCILLATION_RATE).sin() >= 0.0 {
        1.0
    } else {
        -1.0
    };
    Some(
        to_target
            .perpendicular_horizontal()
            .scaled(ctx.speed * side),
    )
}
