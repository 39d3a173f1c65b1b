//! Actor profiles — static per-kind configuration.
//!
//! A profile is immutable once resolved: the registry hands out clones,
//! spawn-time overrides are applied to the clone, and the resolved profile
//! travels with the actor as a component. Pure lookup, no state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{ActorKind, Behavior, ColorTag, RewardKind};

/// Parameters of the projectile an actor fires, if any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ProjectileSpec {
    /// Straight-line shot.
    Ballistic {
        speed: f64,
        lifetime_secs: f64,
        damage: f64,
    },
    /// Homing mine with gravity/tangential/spiral composition.
    GuidedMine {
        speed: f64,
        lifetime_secs: f64,
        damage: f64,
        /// Weight of the radial pull toward the target.
        gravity: f64,
        /// Weight of the tangential (orbit) component.
        tangential: f64,
        /// Shrink rate of the internal orbit radius (units/s).
        spiral: f64,
        /// Below this distance the mine abandons orbiting for terminal pursuit.
        min_orbit_radius: f64,
    },
}

/// One boss phase: entered permanently once health drops to/below `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseSpec {
    /// Health percentage (0-100) at or below which this phase begins.
    pub threshold: f64,
    /// Movement strategy override for the phase.
    pub behavior: Behavior,
    /// Multiplier on the profile's base speed.
    pub speed_factor: f64,
    /// Multiplier on the profile's attack interval.
    pub attack_interval_factor: f64,
    /// Projectiles per attack in this phase.
    pub volley: u32,
}

/// Boss-only profile extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossProfile {
    /// Phase table. Thresholds must be strictly decreasing; N entries give
    /// N+1 possible phases (phase 1 uses the base profile).
    pub phases: Vec<PhaseSpec>,
    /// Reward drops scattered per damage hit.
    pub hit_drop_count: u32,
    /// Orbit / keep-distance radius around the target.
    pub orbit_distance: f64,
    /// Half-width of the keep-distance band.
    pub band_margin: f64,
}

impl BossProfile {
    /// Phase thresholds are valid when non-empty, strictly decreasing,
    /// and within (0, 100).
    pub fn thresholds_valid(&self) -> bool {
        if self.phases.is_empty() {
            return false;
        }
        let mut prev = 100.0;
        for spec in &self.phases {
            if spec.threshold <= 0.0 || spec.threshold >= prev {
                return false;
            }
            prev = spec.threshold;
        }
        true
    }
}

/// Immutable configuration for one actor kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub kind: ActorKind,
    /// Body radius for contact tests and rendering scale.
    pub size: f64,
    pub max_health: f64,
    /// Base movement speed (units/s).
    pub speed: f64,
    /// Damage dealt to the target on contact.
    pub contact_damage: f64,
    /// Cooldown between attacks (seconds).
    pub attack_interval_secs: f64,
    /// Maximum target distance at which attack gating may trigger.
    pub engagement_range: f64,
    /// Base movement strategy.
    pub behavior: Behavior,
    pub color: ColorTag,
    /// What the actor fires, if anything.
    pub projectile: Option<ProjectileSpec>,
    pub reward_kind: RewardKind,
    /// Reward count dropped on destruction.
    pub reward_count: u32,
    /// Present only on boss-class kinds.
    pub boss: Option<BossProfile>,
}

/// Partial profile accepted by `spawn` to override individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileOverrides {
    pub max_health: Option<f64>,
    pub speed: Option<f64>,
    pub contact_damage: Option<f64>,
    pub attack_interval_secs: Option<f64>,
    pub engagement_range: Option<f64>,
    pub behavior: Option<Behavior>,
}

impl ProfileOverrides {
    /// Apply every set field onto `profile`.
    pub fn apply(&self, profile: &mut ActorProfile) {
        if let Some(v) = self.max_health {
            profile.max_health = v;
        }
        if let Some(v) = self.speed {
            profile.speed = v;
        }
        if let Some(v) = self.contact_damage {
            profile.contact_damage = v;
        }
        if let Some(v) = self.attack_interval_secs {
            profile.attack_interval_secs = v;
        }
        if let Some(v) = self.engagement_range {
            profile.engagement_range = v;
        }
        if let Some(v) = self.behavior {
            profile.behavior = v;
        }
    }
}

/// Registry of actor profiles, resolvable by kind before any spawn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRegistry {
    profiles: HashMap<ActorKind, ActorProfile>,
}

impl ProfileRegistry {
    /// Empty registry (every spawn fails until profiles are inserted).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON profile table.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, profile: ActorProfile) {
        self.profiles.insert(profile.kind, profile);
    }

    pub fn resolve(&self, kind: ActorKind) -> Option<&ActorProfile> {
        self.profiles.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The built-in profile table.
    pub fn builtin() -> Self {
        let mut registry = Self::default();

        registry.insert(ActorProfile {
            kind: ActorKind::Stalker,
            size: 3.0,
            max_health: 20.0,
            speed: 34.0,
            contact_damage: 10.0,
            attack_interval_secs: 2.0,
            engagement_range: 0.0,
            behavior: Behavior::Follow,
            color: ColorTag::Crimson,
            projectile: None,
            reward_kind: RewardKind::Ore,
            reward_count: 1,
            boss: None,
        });

        registry.insert(ActorProfile {
            kind: ActorKind::Drifter,
            size: 2.5,
            max_health: 10.0,
            speed: 22.0,
            contact_damage: 6.0,
            attack_interval_secs: 3.0,
            engagement_range: 0.0,
            behavior: Behavior::Patrol,
            color: ColorTag::Amber,
            projectile: None,
            reward_kind: RewardKind::Ore,
            reward_count: 1,
            boss: None,
        });

        registry.insert(ActorProfile {
            kind: ActorKind::Gunner,
            size: 3.5,
            max_health: 30.0,
            speed: 28.0,
            contact_damage: 8.0,
            attack_interval_secs: 1.6,
            engagement_range: 180.0,
            behavior: Behavior::Attack,
            color: ColorTag::Viridian,
            projectile: Some(ProjectileSpec::Ballistic {
                speed: 90.0,
                lifetime_secs: 4.0,
                damage: 5.0,
            }),
            reward_kind: RewardKind::Crystal,
            reward_count: 2,
            boss: None,
        });

        registry.insert(ActorProfile {
            kind: ActorKind::Minelayer,
            size: 4.0,
            max_health: 40.0,
            speed: 24.0,
            contact_damage: 8.0,
            attack_interval_secs: 4.5,
            engagement_range: 320.0,
            behavior: Behavior::Attack,
            color: ColorTag::Cobalt,
            projectile: Some(ProjectileSpec::GuidedMine {
                speed: 45.0,
                lifetime_secs: 30.0,
                damage: 12.0,
                gravity: 1.0,
                tangential: 0.9,
                spiral: 6.0,
                min_orbit_radius: 40.0,
            }),
            reward_kind: RewardKind::Crystal,
            reward_count: 3,
            boss: None,
        });

        registry.insert(ActorProfile {
            kind: ActorKind::Overseer,
            size: 9.0,
            max_health: 900.0,
            speed: 26.0,
            contact_damage: 18.0,
            attack_interval_secs: 2.2,
            engagement_range: 260.0,
            behavior: Behavior::KeepDistance,
            color: ColorTag::Ivory,
            projectile: Some(ProjectileSpec::Ballistic {
                speed: 110.0,
                lifetime_secs: 5.0,
                damage: 9.0,
            }),
            reward_kind: RewardKind::Core,
            reward_count: 12,
            boss: Some(BossProfile {
                phases: vec![
                    PhaseSpec {
                        threshold: 75.0,
                        behavior: Behavior::Orbit,
                        speed_factor: 1.2,
                        attack_interval_factor: 0.8,
                        volley: 2,
                    },
                    PhaseSpec {
                        threshold: 50.0,
                        behavior: Behavior::Charge,
                        speed_factor: 1.0,
                        attack_interval_factor: 0.7,
                        volley: 3,
                    },
                    PhaseSpec {
                        threshold: 25.0,
                        behavior: Behavior::Charge,
                        speed_factor: 1.4,
                        attack_interval_factor: 0.5,
                        volley: 3,
                    },
                ],
                hit_drop_count: 2,
                orbit_distance: 120.0,
                band_margin: 15.0,
            }),
        });

        registry.insert(ActorProfile {
            kind: ActorKind::Colossus,
            size: 12.0,
            max_health: 1400.0,
            speed: 18.0,
            contact_damage: 25.0,
            attack_interval_secs: 2.8,
            engagement_range: 220.0,
            behavior: Behavior::Follow,
            color: ColorTag::Obsidian,
            projectile: Some(ProjectileSpec::Ballistic {
                speed: 100.0,
                lifetime_secs: 5.0,
                damage: 11.0,
            }),
            reward_kind: RewardKind::Core,
            reward_count: 20,
            boss: Some(BossProfile {
                phases: vec![
                    PhaseSpec {
                        threshold: 60.0,
                        behavior: Behavior::Charge,
                        speed_factor: 1.0,
                        attack_interval_factor: 0.8,
                        volley: 2,
                    },
                    PhaseSpec {
                        threshold: 30.0,
                        behavior: Behavior::Charge,
                        speed_factor: 1.5,
                        attack_interval_factor: 0.6,
                        volley: 4,
                    },
                ],
                hit_drop_count: 3,
                orbit_distance: 90.0,
                band_margin: ATTACK_BAND_MARGIN,
            }),
        });

        registry
    }
}
