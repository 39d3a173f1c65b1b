//! Cleanup system — removes dead actors, spent projectiles, and anything
//! that left the arena. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use std::collections::HashMap;

use hecs::{Entity, World};

use onslaught_core::components::*;
use onslaught_core::constants::WORLD_RADIUS;
use onslaught_core::enums::{Behavior, ProjectileFate};
use onslaught_core::profiles::ActorProfile;
use onslaught_core::types::Position;

use super::behavior::active_behavior;

/// Despawn terminal entities. `handles` is the engine's handle map; entries
/// for despawned actors are dropped here.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, handles: &mut HashMap<u64, Entity>) {
    despawn_buffer.clear();

    // Dead actors (health reached zero or rammed the target this tick).
    for (entity, (state, _hostile)) in world.query_mut::<(&ActorState, &Hostile)>() {
        if state.dead {
            despawn_buffer.push(entity);
        }
    }

    // Actors that left the arena self-destruct — except bosses whose phase
    // owns movement outright (the charge enforces its own overrun cap).
    for (entity, (pos, state, profile, boss, _hostile)) in world.query_mut::<(
        &Position,
        &ActorState,
        &ActorProfile,
        Option<&BossState>,
        &Hostile,
    )>() {
        if state.dead || pos.within_radius(WORLD_RADIUS) {
            continue;
        }
        let full_control = matches!(
            active_behavior(profile, boss),
            Behavior::Orbit | Behavior::Charge
        );
        if !full_control {
            despawn_buffer.push(entity);
        }
    }

    // Projectiles with a settled fate.
    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        if projectile.fate.is_some() {
            despawn_buffer.push(entity);
        }
    }

    // Projectiles that left the arena.
    for (entity, (pos, projectile)) in world.query_mut::<(&Position, &mut Projectile)>() {
        if projectile.fate.is_none() && !pos.within_radius(WORLD_RADIUS) {
            projectile.fate = Some(ProjectileFate::OutOfBounds);
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if let Ok(id) = world.get::<&ActorId>(entity) {
            handles.remove(&id.0);
        }
        let _ = world.despawn(entity);
    }
}
