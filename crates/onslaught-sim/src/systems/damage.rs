//! Damage application for hits originating outside the engine (player
//! weapon fire routed in through `notify_external_damage`).
//!
//! Rank-and-file actors have no partial-damage path — one hit is lethal.
//! Bosses subtract health, scatter reward drops, shake, and walk the phase
//! table; destruction fires exactly once.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use onslaught_core::components::{ActorId, ActorState, BossState, ChargeTrack, OrbitTrack};
use onslaught_core::constants::*;
use onslaught_core::events::{ActorHandle, EngineEvent};
use onslaught_core::profiles::ActorProfile;
use onslaught_core::types::{Position, SimClock, Velocity};

use onslaught_ai::phases::{phase_for_health, reward_scatter};

/// Apply external damage to an actor. Returns true when the hit destroyed
/// it. A dead actor absorbs nothing (at-most-once destruction).
pub fn apply_external(
    world: &mut World,
    entity: Entity,
    amount: f64,
    direction: Velocity,
    clock: &SimClock,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<EngineEvent>,
) -> bool {
    debug_assert!(amount >= 0.0, "damage amount must be non-negative");
    let amount = amount.max(0.0);

    let (handle, position, profile) = {
        let Ok(id) = world.get::<&ActorId>(entity) else {
            return false;
        };
        let Ok(pos) = world.get::<&Position>(entity) else {
            return false;
        };
        let Ok(profile) = world.get::<&ActorProfile>(entity) else {
            return false;
        };
        (ActorHandle(id.0), *pos, profile.clone())
    };

    let Ok(mut state) = world.get::<&mut ActorState>(entity) else {
        return false;
    };
    if state.dead {
        return false;
    }

    let is_boss = if let Ok(mut boss) = world.get::<&mut BossState>(entity) {
        state.health -= amount;

        // Open (or refresh) the hit-reaction window; the position snapshot
        // is taken only on the first hit while idle.
        if boss.original_position.is_none() {
            boss.original_position = Some(position);
        }
        boss.hit_until = clock.elapsed_secs + HIT_REACTION_SECS;

        if let Some(boss_profile) = profile.boss.as_ref() {
            for _ in 0..boss_profile.hit_drop_count {
                events.push(EngineEvent::RewardDropped {
                    position: reward_scatter(
                        rng,
                        &position,
                        &direction,
                        REWARD_SCATTER_DISTANCE,
                        REWARD_SCATTER_JITTER,
                    ),
                    reward_kind: profile.reward_kind,
                });
            }

            // A lethal hit emits BossDefeated alone, never a phase cue.
            let health_percent = (state.health / profile.max_health * 100.0).max(0.0);
            let next = phase_for_health(&boss_profile.phases, health_percent);
            if state.health > 0.0 && next > boss.phase {
                log::debug!(
                    "boss {:?} entering phase {next} at {health_percent:.1}%",
                    profile.kind
                );
                boss.phase = next;
                boss.phase_entered_at = clock.elapsed_secs;
                boss.orbit = OrbitTrack::default();
                boss.charge = ChargeTrack {
                    entered_at: clock.elapsed_secs,
                    ..ChargeTrack::default()
                };
                events.push(EngineEvent::PhaseTransition {
                    handle,
                    phase: next,
                });
            }
        }
        true
    } else {
        // One hit is lethal to rank-and-file actors.
        state.health = 0.0;
        false
    };

    let destroyed = state.health <= 0.0;
    if destroyed {
        state.dead = true;
    }
    drop(state);

    if destroyed {
        if is_boss {
            events.push(EngineEvent::BossDefeated { handle });
        }
        events.push(EngineEvent::ActorDestroyed {
            handle,
            position,
            reward_kind: profile.reward_kind,
            reward_count: profile.reward_count,
        });
    }
    destroyed
}
