//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Actor kind known to the profile registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// Pursues the target directly and rams it.
    Stalker,
    /// Wanders the arena, re-rolling its heading at random.
    Drifter,
    /// Holds a distance band and fires ballistic shots.
    Gunner,
    /// Holds a distance band and lays guided mines.
    Minelayer,
    /// Four-phase boss: keep-distance, orbit, then charge phases.
    Overseer,
    /// Three-phase boss: pursuit, then escalating charge phases.
    Colossus,
}

/// Movement strategy discriminator. A closed tagged union dispatched with a
/// single `match`, so every strategy is covered at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Hold position, no steering.
    #[default]
    Idle,
    /// Move straight at the target, damping out inside the close radius.
    Follow,
    /// Random wander with occasional heading re-rolls.
    Patrol,
    /// Hold the rank-and-file distance band, strafing inside it.
    Attack,
    /// Band logic parameterized by the boss's orbit distance and margin.
    KeepDistance,
    /// Full-control circular movement around the target (boss phases only).
    Orbit,
    /// Full-control wait-then-dash cycle (boss phases only).
    Charge,
}

/// Sub-state of the boss orbit phase, cycled on accumulated orbit angle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitState {
    #[default]
    Orbiting,
    Slowing,
    Stopped,
    Resuming,
}

/// Sub-state of the boss charge phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeState {
    /// Stationary telegraph before committing to a dash.
    #[default]
    Waiting,
    /// Straight-line traversal toward the dash destination.
    Dashing,
}

/// Projectile family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Straight-line shot with a finite lifetime.
    Ballistic,
    /// Gravity/orbit/spiral homing mine.
    GuidedMine,
}

/// Terminal fate of a projectile. Set exactly once; the cause is recorded so
/// removal reasons stay mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileFate {
    /// Age exceeded lifetime.
    Expired,
    /// Left the arena sphere.
    OutOfBounds,
    /// Hit the target or self-destructed into a blast check.
    Detonated,
}

/// Reward currency dropped on destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardKind {
    Ore,
    Crystal,
    Core,
}

/// Identity color tag forwarded to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    Crimson,
    Amber,
    Viridian,
    Cobalt,
    Ivory,
    Obsidian,
}
