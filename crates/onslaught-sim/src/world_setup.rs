//! Entity spawn factories.
//!
//! Builds component bundles for actors and projectiles. The engine resolves
//! profiles and assigns handles; this module only assembles entities.

use hecs::{Entity, World};

use onslaught_core::components::*;
use onslaught_core::profiles::ActorProfile;
use onslaught_core::types::{Position, SimClock, Velocity};

/// Spawn a hostile actor with its resolved profile. Boss kinds get a
/// `BossState` attached alongside the common bundle.
pub fn spawn_actor(
    world: &mut World,
    id: u64,
    profile: ActorProfile,
    position: Position,
    clock: &SimClock,
) -> Entity {
    let is_boss = profile.boss.is_some();
    let state = ActorState::new(profile.kind, profile.max_health, clock.elapsed_secs);

    let entity = world.spawn((
        Hostile,
        ActorId(id),
        position,
        Velocity::zero(),
        state,
        profile,
    ));

    if is_boss {
        // Freshly spawned bundle; the entity cannot be missing.
        let _ = world.insert_one(entity, BossState::new());
    }

    entity
}

/// Spawn a ballistic projectile entity.
pub fn spawn_ballistic(
    world: &mut World,
    projectile: Projectile,
    position: Position,
    velocity: Velocity,
) -> Entity {
    world.spawn((projectile, position, velocity))
}

/// Spawn a guided mine entity.
pub fn spawn_mine(
    world: &mut World,
    projectile: Projectile,
    guided: GuidedState,
    position: Position,
    velocity: Velocity,
) -> Entity {
    world.spawn((projectile, guided, position, velocity))
}
