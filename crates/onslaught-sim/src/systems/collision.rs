//! Collision resolution — distance-threshold checks of projectiles and
//! actor bodies against the target.
//!
//! Projectiles spawned this tick are skipped; they become eligible next
//! tick. Damage from the player's own weapons does not pass through here
//! at all — it enters via `AdversaryEngine::notify_external_damage`.

use hecs::{Entity, World};

use onslaught_core::components::*;
use onslaught_core::constants::*;
use onslaught_core::enums::{ProjectileFate, ProjectileKind};
use onslaught_core::events::{ActorHandle, EngineEvent};
use onslaught_core::profiles::ActorProfile;
use onslaught_core::types::{Position, SimClock};

/// Resolve projectile↔target and actor↔target collisions.
pub fn run(
    world: &mut World,
    clock: &SimClock,
    target: Option<Position>,
    events: &mut Vec<EngineEvent>,
) {
    let Some(t) = target else {
        return;
    };

    // Projectiles against the target.
    for (_entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &Position)>() {
        if projectile.fate.is_some() || projectile.spawned_tick == clock.tick {
            continue;
        }
        let distance = pos.distance_to(&t);
        match projectile.kind {
            ProjectileKind::Ballistic => {
                if distance <= PROJECTILE_HIT_RADIUS {
                    projectile.fate = Some(ProjectileFate::Detonated);
                    events.push(EngineEvent::TargetHit {
                        damage: projectile.damage,
                        position: *pos,
                    });
                }
            }
            ProjectileKind::GuidedMine => {
                if distance <= MINE_DETONATION_RADIUS {
                    projectile.fate = Some(ProjectileFate::Detonated);
                    // Blast check is independent of the detonation trigger.
                    if distance <= MINE_BLAST_RADIUS {
                        events.push(EngineEvent::TargetHit {
                            damage: projectile.damage,
                            position: *pos,
                        });
                    }
                }
            }
        }
    }

    // Actor bodies against the target. Rank-and-file actors die on contact;
    // bosses deal contact damage on a cooldown and keep going.
    let mut boss_contacts: Vec<(Entity, f64, Position)> = Vec::new();
    let mut rammed: Vec<(Entity, ActorHandle, Position)> = Vec::new();

    {
        let mut query = world.query::<(
            &Hostile,
            &ActorId,
            &Position,
            &ActorState,
            &ActorProfile,
            Option<&BossState>,
        )>();
        for (entity, (_hostile, id, pos, state, profile, boss)) in query.iter() {
            if state.dead {
                continue;
            }
            if pos.distance_to(&t) > profile.size + TARGET_CONTACT_RADIUS {
                continue;
            }
            if boss.is_some() {
                if clock.elapsed_secs - state.last_contact_at > BOSS_CONTACT_COOLDOWN_SECS {
                    boss_contacts.push((entity, profile.contact_damage, *pos));
                }
            } else {
                rammed.push((entity, ActorHandle(id.0), *pos));
            }
        }
    }

    for (entity, damage, pos) in boss_contacts {
        if let Ok(mut state) = world.get::<&mut ActorState>(entity) {
            state.last_contact_at = clock.elapsed_secs;
        }
        events.push(EngineEvent::TargetHit {
            damage,
            position: pos,
        });
    }

    for (entity, handle, pos) in rammed {
        let Ok(profile) = world.get::<&ActorProfile>(entity) else {
            continue;
        };
        let (damage, reward_kind, reward_count) = (
            profile.contact_damage,
            profile.reward_kind,
            profile.reward_count,
        );
        drop(profile);
        if let Ok(mut state) = world.get::<&mut ActorState>(entity) {
            if state.dead {
                continue;
            }
            state.health = 0.0;
            state.dead = true;
        }
        events.push(EngineEvent::TargetHit {
            damage,
            position: pos,
        });
        events.push(EngineEvent::ActorDestroyed {
            handle,
            position: pos,
            reward_kind,
            reward_count,
        });
    }
}
