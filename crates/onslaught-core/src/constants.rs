//! Engine constants and tuning parameters.

// --- World bounds ---

/// Arena radius in world units. Actors and projectiles outside this sphere
/// are removed.
pub const WORLD_RADIUS: f64 = 600.0;

/// Radius of the target (player) body for contact tests.
pub const TARGET_CONTACT_RADIUS: f64 = 2.0;

// --- Movement strategies ---

/// Radius around the target inside which a `follow` actor stops pressing in
/// and starts bleeding off speed.
pub const FOLLOW_CLOSE_RADIUS: f64 = 20.0;

/// Per-tick velocity damping factor applied inside the close radius.
pub const FOLLOW_DAMPING: f64 = 0.9;

/// Per-tick probability that a patrolling actor re-rolls its velocity.
pub const PATROL_REROLL_CHANCE: f64 = 0.02;

/// Minimum fraction of base speed for a patrol re-roll.
pub const PATROL_MIN_SPEED_FACTOR: f64 = 0.4;

/// Fraction of engagement range a rank-and-file `attack` actor tries to hold.
pub const ATTACK_BAND_FRACTION: f64 = 0.7;

/// Half-width of the distance band around the optimal range.
pub const ATTACK_BAND_MARGIN: f64 = 8.0;

/// Angular rate (rad/s) of the strafe-side oscillation in the band strategy.
pub const STRAFE_OSCILLATION_RATE: f64 = 1.6;

// --- Boss hit reaction ---

/// Duration of the hit-reaction shake window (seconds).
pub const HIT_REACTION_SECS: f64 = 0.3;

/// Maximum jitter amplitude of the shake (world units).
pub const SHAKE_AMPLITUDE: f64 = 1.5;

/// Scatter distance for reward drops flung along the hit direction.
pub const REWARD_SCATTER_DISTANCE: f64 = 6.0;

/// Random jitter added to each reward drop position.
pub const REWARD_SCATTER_JITTER: f64 = 3.0;

// --- Boss orbit phase ---

/// Accumulated sweep (radians) spent at full orbit speed before slowing.
pub const ORBIT_FULL_SWEEP: f64 = std::f64::consts::TAU;

/// Additional sweep over which the orbit decelerates to a stop.
pub const ORBIT_SLOW_SWEEP: f64 = 0.6;

/// Pause duration in the stopped sub-state (seconds).
pub const ORBIT_PAUSE_SECS: f64 = 1.2;

/// Time to ramp back to full orbit speed when resuming (seconds).
pub const ORBIT_RESUME_SECS: f64 = 0.8;

// --- Boss charge phase ---

/// Stationary telegraph duration before a dash (seconds).
pub const CHARGE_WAIT_SECS: f64 = 1.5;

/// Pulse rate (rad/s) of the telegraph cue exported to the renderer.
pub const CHARGE_PULSE_RATE: f64 = 12.0;

/// Dash speed as a multiple of the boss's phase speed.
pub const CHARGE_SPEED_FACTOR: f64 = 3.0;

/// Dash ends when within this distance of the dash destination.
pub const CHARGE_STOP_RADIUS: f64 = 10.0;

/// Hard cap on dash excursion as a multiple of the world radius.
pub const CHARGE_OVERRUN_FACTOR: f64 = 1.2;

// --- Bosses, misc ---

/// Cooldown between boss contact-damage applications (seconds).
pub const BOSS_CONTACT_COOLDOWN_SECS: f64 = 0.5;

/// Rate at which an orbiting boss eases its altitude toward the target's.
pub const ORBIT_ALTITUDE_EASE: f64 = 0.5;

// --- Projectiles ---

/// Hit radius for ballistic projectiles against the target.
pub const PROJECTILE_HIT_RADIUS: f64 = 3.0;

/// Interval between guided-mine steering re-evaluations (seconds).
/// Steering is throttled to bound per-frame cost.
pub const GUIDED_STEER_INTERVAL: f64 = 0.1;

/// Distance at which a guided mine detonates on the target.
pub const MINE_DETONATION_RADIUS: f64 = 6.0;

/// Damage-radius check applied when a mine detonates.
pub const MINE_BLAST_RADIUS: f64 = 14.0;

/// Fraction of lifetime after which a mine self-destructs unconditionally,
/// so one that can never close the distance does not persist forever.
pub const MINE_SELF_DESTRUCT_FRACTION: f64 = 0.95;

/// Horizontal spread (radians) between shots of a boss volley.
pub const VOLLEY_SPREAD_ANGLE: f64 = 0.15;
