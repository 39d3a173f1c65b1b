//! Projectile update system — aging, throttled guided-mine steering, and
//! the mine self-destruct fail-safe.

use hecs::World;

use onslaught_core::components::{GuidedState, Projectile};
use onslaught_core::constants::{GUIDED_STEER_INTERVAL, MINE_BLAST_RADIUS, MINE_SELF_DESTRUCT_FRACTION};
use onslaught_core::enums::ProjectileFate;
use onslaught_core::events::EngineEvent;
use onslaught_core::types::{Position, SimClock, Velocity};

use onslaught_ai::mines::{shrink_orbit_radius, steer, MineContext};

/// Age all projectiles, expire ballistics, steer mines, and fire the mine
/// self-destruct fail-safe.
pub fn run(
    world: &mut World,
    clock: &SimClock,
    dt: f64,
    target: Option<Position>,
    events: &mut Vec<EngineEvent>,
) {
    for (_entity, (projectile, pos, vel, guided)) in world.query_mut::<(
        &mut Projectile,
        &Position,
        &mut Velocity,
        Option<&mut GuidedState>,
    )>() {
        if projectile.fate.is_some() {
            continue;
        }
        projectile.age_secs += dt;

        let Some(guided) = guided else {
            if projectile.age_secs > projectile.lifetime_secs {
                projectile.fate = Some(ProjectileFate::Expired);
            }
            continue;
        };

        // Fail-safe: a mine that never closes the distance detonates at
        // 95% of its lifetime. The damage-radius check still applies.
        if projectile.age_secs >= projectile.lifetime_secs * MINE_SELF_DESTRUCT_FRACTION {
            projectile.fate = Some(ProjectileFate::Detonated);
            if let Some(t) = target {
                if pos.distance_to(&t) <= MINE_BLAST_RADIUS {
                    events.push(EngineEvent::TargetHit {
                        damage: projectile.damage,
                        position: *pos,
                    });
                }
            }
            continue;
        }

        // Steering is throttled to a fixed re-evaluation interval.
        let Some(t) = target else {
            continue;
        };
        let since_steer = clock.elapsed_secs - guided.last_steer_at;
        if since_steer >= GUIDED_STEER_INTERVAL {
            guided.current_orbit_radius = shrink_orbit_radius(
                guided.current_orbit_radius,
                guided.spiral,
                since_steer,
                guided.min_orbit_radius,
            );
            *vel = steer(&MineContext {
                position: *pos,
                target: t,
                speed: guided.speed,
                gravity: guided.gravity,
                tangential: guided.tangential,
                orbit_sign: guided.orbit_sign,
                current_orbit_radius: guided.current_orbit_radius,
                min_orbit_radius: guided.min_orbit_radius,
            });
            guided.last_steer_at = clock.elapsed_secs;
        }
    }
}
