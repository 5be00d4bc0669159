//! Numerical and physical constants for the simulation
//!
//! `Parameters` holds the values read (never written) by a step:
//! - particle and cursor radii,
//! - repulsion constants for neighbours, walls and the cursor,
//! - velocity cap, optional acceleration cap and damping,
//! - whether the walls repel at all

use super::error::SimError;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub particle_radius: f64,    // drawn radius, also the gap kept outside the cursor disc
    pub cursor_radius: f64,      // exclusion radius around the cursor
    pub particle_repulsion: f64, // particle-particle constant
    pub wall_repulsion: f64,     // wall constant
    pub cursor_repulsion: f64,   // cursor constant
    pub max_velocity: f64,       // hard speed limit
    pub max_acceleration: f64,   // 0 disables the cap
    pub damping: f64,            // velocity factor per step, 0 disables
    pub walls_repel: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            particle_radius: 5.0,
            cursor_radius: 50.0,
            particle_repulsion: 10.0,
            wall_repulsion: 10.0,
            cursor_repulsion: 100.0,
            max_velocity: 1.0,
            max_acceleration: 0.0,
            damping: 0.98,
            walls_repel: true,
        }
    }
}

impl Parameters {
    /// Reject values that would let a step produce non-finite state
    pub fn validate(&self) -> Result<(), SimError> {
        let non_negative = [
            ("particle_radius", self.particle_radius),
            ("cursor_radius", self.cursor_radius),
            ("particle_repulsion", self.particle_repulsion),
            ("wall_repulsion", self.wall_repulsion),
            ("cursor_repulsion", self.cursor_repulsion),
            ("max_acceleration", self.max_acceleration),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite and non-negative",
                });
            }
        }

        if !self.max_velocity.is_finite() || self.max_velocity <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "max_velocity",
                value: self.max_velocity,
                reason: "must be finite and positive",
            });
        }

        if !(0.0..1.0).contains(&self.damping) {
            return Err(SimError::InvalidParameter {
                name: "damping",
                value: self.damping,
                reason: "must be in [0, 1), 0 disables damping",
            });
        }

        Ok(())
    }
}
