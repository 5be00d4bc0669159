//! Core state types for the repulsion simulation.
//!
//! - `NVec2` is the 2D vector used everywhere (nalgebra)
//! - `Particle` is one point mass with its grid cell
//! - `Kind` is the rendering hint carried by each particle
//! - `Bounds` and `Cursor` are the world-level inputs read by a step

use nalgebra::Vector2;
use serde::Deserialize;
pub type NVec2 = Vector2<f64>;

/// Visual category of a particle. The palette lives in the renderer.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Alpha,
    Beta,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Alpha, Kind::Beta];

    /// Stable ordinal, used by renderers to pick a colour
    pub fn index(self) -> usize {
        match self {
            Kind::Alpha => 0,
            Kind::Beta => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
    pub kind: Kind,
    pub cell: usize, // grid cell holding this particle
}

impl Particle {
    /// Particle at rest. `cell` is assigned when the world inserts it into the grid.
    pub fn new(position: NVec2, kind: Kind) -> Self {
        Self {
            position,
            velocity: NVec2::zeros(),
            acceleration: NVec2::zeros(),
            kind,
            cell: 0,
        }
    }

    pub fn with_velocity(mut self, velocity: NVec2) -> Self {
        self.velocity = velocity;
        self
    }
}

/// Simulation area, `[0, width) x [0, height)` with y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: &NVec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub position: NVec2,
    pub active: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            position: NVec2::zeros(),
            active: false,
        }
    }
}
