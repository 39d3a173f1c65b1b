//! Boss phase-threshold math and hit-reaction jitter.
//!
//! Phase indices are 1-based: phase 1 is the base profile, each table entry
//! adds one more. The index is monotonic for the lifetime of one boss.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::constants::SHAKE_AMPLITUDE;
use onslaught_core::profiles::PhaseSpec;
use onslaught_core::types::{Position, Velocity};

/// Phase the boss should occupy at `health_percent` (0-100):
/// one plus the number of thresholds at or above the current percentage.
/// Re-evaluating at the same health level yields the same phase, and the
/// caller only applies the result when it exceeds the current index, so
/// transitions are idempotent and one-way.
pub fn phase_for_health(phases: &[PhaseSpec], health_percent: f64) -> usize {
    1 + phases
        .iter()
        .filter(|spec| health_percent <= spec.threshold)
        .count()
}

/// Per-phase override spec for a 1-based phase index; `None` for phase 1.
pub fn spec_for_phase(phases: &[PhaseSpec], phase: usize) -> Option<&PhaseSpec> {
    if phase >= 2 {
        phases.get(phase - 2)
    } else {
        None
    }
}

/// Random jitter offset around the shake snapshot. `remaining_fraction`
/// runs from 1 at the hit down to 0 at window expiry, decaying the
/// amplitude over the window.
pub fn shake_offset(rng: &mut ChaCha8Rng, remaining_fraction: f64) -> Velocity {
    let amplitude = SHAKE_AMPLITUDE * remaining_fraction.clamp(0.0, 1.0);
    Velocity::new(
        rng.gen_range(-1.0..1.0) * amplitude,
        rng.gen_range(-1.0..1.0) * amplitude,
        rng.gen_range(-1.0..1.0) * amplitude * 0.5,
    )
}

/// Scatter position for one reward drop: flung from `origin` along
/// `hit_direction` with random jitter.
pub fn reward_scatter(
    rng: &mut ChaCha8Rng,
    origin: &Position,
    hit_direction: &Velocity,
    distance: f64,
    jitter: f64,
) -> Position {
    let dir = hit_direction.normalized();
    Position::new(
        origin.x + dir.x * distance + rng.gen_range(-1.0..1.0) * jitter,
        origin.y + dir.y * distance + rng.gen_range(-1.0..1.0) * jitter,
        origin.z + dir.z * distance + rng.gen_range(-1.0..1.0) * jitter,
    )
}
