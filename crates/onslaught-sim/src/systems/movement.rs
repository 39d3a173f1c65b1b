//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Full-control boss phases and the shake window write positions directly
//! and zero their velocity, so integration is a no-op for them.

use hecs::World;

use onslaught_core::types::{Position, Velocity};

/// Integrate all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;
    }
}
