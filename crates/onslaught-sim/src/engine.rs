//! Adversary engine — the core of the crate.
//!
//! `AdversaryEngine` owns the hecs ECS world, spawns adversaries from a
//! profile registry, runs all systems once per host frame, and returns the
//! events each frame produced. Completely headless (no renderer
//! dependency), enabling deterministic testing.

use std::collections::HashMap;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::enums::ActorKind;
use onslaught_core::error::SpawnError;
use onslaught_core::events::{ActorHandle, EngineEvent};
use onslaught_core::profiles::{ProfileOverrides, ProfileRegistry};
use onslaught_core::types::{Position, SimClock, Velocity};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Profiles available to `spawn`.
    pub profiles: ProfileRegistry,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            profiles: ProfileRegistry::builtin(),
        }
    }
}

/// The adversary engine. Owns the ECS world and all sim state.
pub struct AdversaryEngine {
    world: World,
    clock: SimClock,
    rng: ChaCha8Rng,
    registry: ProfileRegistry,
    events: Vec<EngineEvent>,
    despawn_buffer: Vec<Entity>,
    handles: HashMap<u64, Entity>,
    next_actor_id: u64,
}

impl AdversaryEngine {
    /// Create a new engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            clock: SimClock::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            registry: config.profiles,
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            handles: HashMap::new(),
            next_actor_id: 0,
        }
    }

    /// Spawn an adversary of `kind` at `position`, with per-spawn tuning
    /// applied on top of the registered profile.
    pub fn spawn(
        &mut self,
        kind: ActorKind,
        position: Position,
        overrides: Option<&ProfileOverrides>,
    ) -> Result<ActorHandle, SpawnError> {
        if !position.is_finite() {
            return Err(SpawnError::InvalidPosition);
        }
        let Some(profile) = self.registry.resolve(kind) else {
            log::warn!("spawn rejected: no profile for {kind:?}");
            return Err(SpawnError::UnknownKind(kind));
        };

        let mut profile = profile.clone();
        if let Some(overrides) = overrides {
            overrides.apply(&mut profile);
        }

        // A boss with a malformed phase table fights as rank-and-file.
        if let Some(boss) = &profile.boss {
            if !boss.thresholds_valid() {
                log::warn!(
                    "{kind:?} phase thresholds not strictly decreasing in (0,100); ignoring boss profile"
                );
                profile.boss = None;
            }
        }

        let id = self.next_actor_id;
        self.next_actor_id += 1;
        let entity = world_setup::spawn_actor(&mut self.world, id, profile, position, &self.clock);
        self.handles.insert(id, entity);
        Ok(ActorHandle(id))
    }

    /// Advance the simulation by `dt` seconds and drain the events it
    /// produced. A `None` or non-finite target disables all targeting for
    /// the frame; adversaries coast on their last headings.
    pub fn update(&mut self, dt: f64, target: Option<Position>) -> Vec<EngineEvent> {
        debug_assert!(dt >= 0.0, "dt must be non-negative");
        if dt < 0.0 {
            return std::mem::take(&mut self.events);
        }
        let target = target.filter(Position::is_finite);

        systems::behavior::run(&mut self.world, &self.clock, target, &mut self.rng);
        systems::boss::run(&mut self.world, &self.clock, dt, target, &mut self.rng);
        systems::attack::run(
            &mut self.world,
            &self.clock,
            target,
            &mut self.rng,
            &mut self.events,
        );
        systems::projectiles::run(&mut self.world, &self.clock, dt, target, &mut self.events);
        systems::movement::run(&mut self.world, dt);
        systems::collision::run(&mut self.world, &self.clock, target, &mut self.events);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.handles);

        self.clock.advance(dt);
        std::mem::take(&mut self.events)
    }

    /// Apply damage from the host (weapons, hazards) to one adversary.
    /// `direction` is the incoming hit direction, used to scatter rewards.
    /// Returns true when the hit destroyed the actor. Destruction events
    /// surface from the next `update`.
    pub fn notify_external_damage(
        &mut self,
        handle: ActorHandle,
        amount: f64,
        direction: Velocity,
    ) -> bool {
        let Some(&entity) = self.handles.get(&handle.0) else {
            return false;
        };
        systems::damage::apply_external(
            &mut self.world,
            entity,
            amount,
            direction,
            &self.clock,
            &mut self.rng,
            &mut self.events,
        )
    }

    /// Remove every actor and projectile without emitting events.
    pub fn despawn_all(&mut self) {
        self.world.clear();
        self.handles.clear();
    }

    /// True while the actor exists and has not been destroyed.
    pub fn is_alive(&self, handle: ActorHandle) -> bool {
        let Some(&entity) = self.handles.get(&handle.0) else {
            return false;
        };
        self.world
            .get::<&onslaught_core::components::ActorState>(entity)
            .map(|state| !state.dead)
            .unwrap_or(false)
    }

    /// Number of live actors (projectiles excluded).
    pub fn actor_count(&self) -> usize {
        self.world
            .query::<&onslaught_core::components::Hostile>()
            .iter()
            .count()
    }

    /// Get the current simulation clock.
    pub fn clock(&self) -> SimClock {
        self.clock
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}
