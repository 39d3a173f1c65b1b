//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D position in arena space (abstract world units, Cartesian).
/// The arena is a sphere of `WORLD_RADIUS` centered on the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in arena space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking. Advanced by the `dt` the host passes in,
/// so every timer in the engine lives in one clock domain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Current tick number (increments by 1 each update).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance to another position (3D).
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance from the arena origin.
    pub fn range_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether this position lies inside a sphere of `radius` around the origin.
    pub fn within_radius(&self, radius: f64) -> bool {
        self.range_from_origin() <= radius
    }

    /// Unit vector pointing from `self` toward `other`.
    /// Falls back to +x when the two positions coincide.
    pub fn direction_to(&self, other: &Position) -> Velocity {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
        if dist > 1e-9 {
            Velocity::new(dx / dist, dy / dist, dz / dist)
        } else {
            Velocity::new(1.0, 0.0, 0.0)
        }
    }

    /// All components are finite (rejects NaN/inf targets from the host).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Position offset by `vel * dt`.
    pub fn stepped(&self, vel: &Velocity, dt: f64) -> Position {
        Position::new(self.x + vel.x * dt, self.y + vel.y * dt, self.z + vel.z * dt)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Component-wise scale.
    pub fn scaled(&self, factor: f64) -> Velocity {
        Velocity::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Unit-length copy; zero vectors fall back to +x.
    pub fn normalized(&self) -> Velocity {
        let s = self.speed();
        if s > 1e-9 {
            self.scaled(1.0 / s)
        } else {
            Velocity::new(1.0, 0.0, 0.0)
        }
    }

    /// Horizontal perpendicular (rotate 90° in the x/y plane, z dropped).
    /// Used for strafing and mine orbit tangents; degenerate vertical
    /// vectors fall back to +x.
    pub fn perpendicular_horizontal(&self) -> Velocity {
        let h = (self.x * self.x + self.y * self.y).sqrt();
        if h > 1e-9 {
            Velocity::new(-self.y / h, self.x / h, 0.0)
        } else {
            Velocity::new(1.0, 0.0, 0.0)
        }
    }

    /// Sum of two velocities.
    pub fn plus(&self, other: &Velocity) -> Velocity {
        Velocity::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Rotate around the vertical (z) axis by `angle` radians.
    pub fn rotated_z(&self, angle: f64) -> Velocity {
        let (sin, cos) = angle.sin_cos();
        Velocity::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }
}

/// Point where the ray `origin + dir * s` (s >= 0) exits a sphere of
/// `radius` around the arena origin. `dir` must be unit length. Used by
/// the boss charge to pick a dash destination on the far boundary.
pub fn ray_boundary_exit(origin: &Position, dir: &Velocity, radius: f64) -> Position {
    // Solve |origin + dir*s|^2 = radius^2 for the positive root.
    let p_dot_d = origin.x * dir.x + origin.y * dir.y + origin.z * dir.z;
    let p_sq = origin.x * origin.x + origin.y * origin.y + origin.z * origin.z;
    let disc = p_dot_d * p_dot_d - (p_sq - radius * radius);
    if disc <= 0.0 {
        // Ray starts outside and misses the sphere; dash straight ahead
        // by one radius instead.
        return origin.stepped(dir, radius);
    }
    let s = (-p_dot_d + disc.sqrt()).max(0.0);
    origin.stepped(dir, s)
}

impl SimClock {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
