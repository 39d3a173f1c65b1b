//! Adversary engine for ONSLAUGHT.
//!
//! Owns the hecs ECS world, runs the behavior/projectile/collision systems
//! once per host frame, and reports everything the renderer, audio, and
//! loot layers need as drained events. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{AdversaryEngine, EngineConfig};
pub use onslaught_core as core;

#[cfg(test)]
mod tests;
