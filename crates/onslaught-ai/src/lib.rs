//! Behavior logic for ONSLAUGHT.
//!
//! Pure functions that compute steering vectors, boss phase transitions,
//! and guided-mine homing. No ECS dependency — operates on plain data.

pub mod mines;
pub mod phases;
pub mod steering;

pub use onslaught_core as core;
