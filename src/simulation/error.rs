//! Construction-time errors. A running world has no error states.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("bounds {width}x{height} are invalid: each dimension must be finite and greater than 2")]
    InvalidBounds { width: f64, height: f64 },

    #[error("cell size {0} must be finite and positive")]
    InvalidCellSize(f64),

    #[error("cell size {cell_size} gives a {cols}x{rows} grid, more than the supported cell count")]
    TooManyCells { cell_size: f64, cols: f64, rows: f64 },

    #[error("particle {index} has a non-finite velocity ({vx}, {vy})")]
    ParticleNotFinite { index: usize, vx: f64, vy: f64 },

    #[error("parameter `{name}` = {value} is invalid: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("particle {index} at ({x}, {y}) lies outside the simulation bounds")]
    ParticleOutOfBounds { index: usize, x: f64, y: f64 },
}
