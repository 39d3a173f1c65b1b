//! Core types and definitions for the ONSLAUGHT adversary engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry types, components, events, profiles, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod profiles;
pub mod types;

#[cfg(test)]
mod tests;
