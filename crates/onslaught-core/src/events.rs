//! Events emitted by the engine for the host's rendering, audio, and loot
//! systems. Drained from the engine once per tick.

use serde::{Deserialize, Serialize};

use crate::enums::{ActorKind, ProjectileKind, RewardKind};
use crate::types::{Position, Velocity};

/// Stable handle identifying a live actor across the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorHandle(pub u64);

/// Everything the renderer needs to instantiate a visible projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileConfig {
    pub kind: ProjectileKind,
    pub owner: ActorKind,
    pub position: Position,
    pub velocity: Velocity,
    pub damage: f64,
    pub lifetime_secs: f64,
}

/// Outbound engine events, in emission order within a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineEvent {
    /// A projectile entered the world; the render/audio layer mirrors it.
    ProjectileSpawned { config: ProjectileConfig },
    /// An actor was destroyed with its reward payload (explosion site).
    ActorDestroyed {
        handle: ActorHandle,
        position: Position,
        reward_kind: RewardKind,
        reward_count: u32,
    },
    /// A single reward drop scattered off a boss hit.
    RewardDropped {
        position: Position,
        reward_kind: RewardKind,
    },
    /// A boss entered a new phase (music/UI cue).
    PhaseTransition { handle: ActorHandle, phase: usize },
    /// A boss's health reached zero.
    BossDefeated { handle: ActorHandle },
    /// A projectile or contact connected with the target.
    TargetHit { damage: f64, position: Position },
}
