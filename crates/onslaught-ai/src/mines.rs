//! Guided-mine homing: a pseudo-gravitational composition of a radial pull,
//! a fixed-sign tangential component, and spiral convergence driven by a
//! shrinking internal orbit radius.

use onslaught_core::types::{Position, Velocity};

/// Steering input for one mine at one re-evaluation.
pub struct MineContext {
    pub position: Position,
    pub target: Position,
    /// Constant travel speed (units/s).
    pub speed: f64,
    /// Radial pull weight.
    pub gravity: f64,
    /// Tangential weight.
    pub tangential: f64,
    /// +1 or -1, fixed per instance.
    pub orbit_sign: f64,
    /// Internal orbit radius; shrinks monotonically over the mine's life.
    pub current_orbit_radius: f64,
    /// Below this distance the mine commits to terminal pursuit.
    pub min_orbit_radius: f64,
}

/// Compute the mine's velocity. Inside the minimum orbit radius it heads
/// straight at the target; outside, the radial pull is weighted by how far
/// the live distance exceeds the shrinking orbit radius, so the spiral
/// tightens as the radius decays.
pub fn steer(ctx: &MineContext) -> Velocity {
    let dist = ctx.position.distance_to(&ctx.target);
    let radial = ctx.position.direction_to(&ctx.target);

    if dist < ctx.min_orbit_radius {
        return radial.scaled(ctx.speed);
    }

    let orbit_radius = ctx.current_orbit_radius.max(ctx.min_orbit_radius);
    let radial_weight = ctx.gravity * (dist / orbit_radius).max(1.0);
    let tangent = radial.perpendicular_horizontal().scaled(ctx.orbit_sign);

    radial
        .scaled(radial_weight)
        .plus(&tangent.scaled(ctx.tangential))
        .normalized()
        .scaled(ctx.speed)
}

/// Shrink the orbit radius by `spiral * dt`, clamped at the minimum.
/// The result never grows.
pub fn shrink_orbit_radius(current: f64, spiral: f64, dt: f64, min: f64) -> f64 {
    (current - spiral * dt).max(min)
}
