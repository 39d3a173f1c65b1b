//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in systems and in the pure AI crate.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Marks an entity as a hostile actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Stable identifier component backing `ActorHandle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// Mutable per-actor state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorState {
    pub kind: ActorKind,
    /// Current health. Monotonically non-increasing; no heal path exists.
    pub health: f64,
    /// Elapsed-seconds timestamp of the last attack.
    pub last_attack_at: f64,
    /// Elapsed-seconds timestamp of the last contact-damage application
    /// (bosses only; rank-and-file die on first contact).
    pub last_contact_at: f64,
    /// Cached distance to the target, refreshed each tick.
    pub range_to_target: f64,
    /// Set exactly once; a dead actor is skipped by every system until the
    /// cleanup pass despawns it.
    pub dead: bool,
}

impl ActorState {
    pub fn new(kind: ActorKind, health: f64, now: f64) -> Self {
        Self {
            kind,
            health,
            last_attack_at: now,
            last_contact_at: f64::MIN,
            range_to_target: f64::MAX,
            dead: false,
        }
    }
}

/// Bookkeeping for the boss orbit phase. Reset on phase entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OrbitTrack {
    pub state: OrbitState,
    /// Whether `angle` and `radius` have been seeded from the live position.
    pub entered: bool,
    /// Current polar angle around the target (radians).
    pub angle: f64,
    /// Sweep accumulated since the last cycle reset (radians).
    pub swept: f64,
    /// Current orbit radius, eased toward the configured distance.
    pub radius: f64,
    /// Elapsed-seconds timestamp of entering the stopped sub-state.
    pub stopped_at: f64,
    /// Elapsed-seconds timestamp of entering the resuming sub-state.
    pub resumed_at: f64,
}

/// Bookkeeping for the boss charge phase. Reset on phase entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChargeTrack {
    pub state: ChargeState,
    /// Elapsed-seconds timestamp of entering the current sub-state.
    pub entered_at: f64,
    /// Telegraph pulse value in [-1, 1] for the renderer while waiting.
    pub pulse: f64,
    /// Dash destination on the far boundary, set when the dash commits.
    pub dash_target: Option<Position>,
}

/// Boss-only state attached alongside `ActorState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossState {
    /// Current phase index. Starts at 1, only ever increases.
    pub phase: usize,
    /// Elapsed-seconds timestamp of entering the current phase.
    pub phase_entered_at: f64,
    /// End of the hit-reaction window (elapsed seconds).
    pub hit_until: f64,
    /// Position snapshot taken at the first hit of a shake window; the
    /// jitter is applied relative to this, never to the live position.
    pub original_position: Option<Position>,
    pub orbit: OrbitTrack,
    pub charge: ChargeTrack,
}

impl BossState {
    pub fn new() -> Self {
        Self {
            phase: 1,
            phase_entered_at: 0.0,
            hit_until: f64::MIN,
            original_position: None,
            orbit: OrbitTrack::default(),
            charge: ChargeTrack::default(),
        }
    }

    /// Whether the hit-reaction shake window is open.
    pub fn shake_active(&self, elapsed_secs: f64) -> bool {
        self.hit_until > elapsed_secs
    }
}

impl Default for BossState {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable per-projectile state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub owner: ActorKind,
    pub damage: f64,
    /// Age in elapsed seconds, strictly increasing per tick.
    pub age_secs: f64,
    pub lifetime_secs: f64,
    /// Tick on which the projectile spawned; collision skips it that tick.
    pub spawned_tick: u64,
    /// Terminal fate, set at most once.
    pub fate: Option<ProjectileFate>,
}

/// Guided-mine steering state attached alongside `Projectile`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuidedState {
    pub speed: f64,
    pub gravity: f64,
    pub tangential: f64,
    /// Orbit-radius shrink rate (units/s).
    pub spiral: f64,
    pub min_orbit_radius: f64,
    /// Monotonically shrinking; biases the radial pull to dominate.
    pub current_orbit_radius: f64,
    /// +1 or -1, fixed per instance for a consistent orbit direction.
    pub orbit_sign: f64,
    /// Elapsed-seconds timestamp of the last steering re-evaluation.
    pub last_steer_at: f64,
}
