//! ECS systems that advance the engine one tick.
//!
//! Systems are free functions over `&mut World`; they own no state. The
//! engine calls them in a fixed order: actor steering, boss full-control
//! phases, attack gating, projectile updates, movement integration,
//! collision resolution, cleanup.

pub mod attack;
pub mod behavior;
pub mod boss;
pub mod cleanup;
pub mod collision;
pub mod damage;
pub mod movement;
pub mod projectiles;
