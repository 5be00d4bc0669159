//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – host-loop options (grid overlay, steps per frame, seed)
//! - [`WorldConfig`]      – bounds, cell size and population size
//! - [`ParametersConfig`] – repulsion constants, caps and damping
//! - [`ParticleConfig`]   – optional explicit initial state per particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   draw_grid: false        # debug overlay of cell boundaries
//!   steps_per_frame: 1
//!   seed: 42                # omit for an entropy-seeded population
//!
//! world:
//!   width: 1050
//!   height: 800
//!   cell_size: 50
//!   particle_count: 1000    # ignored when `particles` is given
//!
//! parameters:
//!   particle_radius: 5
//!   cursor_radius: 50
//!   particle_repulsion: 10
//!   wall_repulsion: 10
//!   cursor_repulsion: 100
//!   max_velocity: 1
//!   max_acceleration: 0     # 0 disables the cap
//!   damping: 0.98           # 0 disables damping
//!   walls_repel: true
//!
//! particles:
//!   - x: [ 100.0, 100.0 ]
//!     v: [ 0.0, 0.0 ]
//!     kind: alpha
//! ```
//!
//! Every `engine` and `parameters` key is optional and falls back to the
//! defaults of [`Engine`] and [`Parameters`].

use serde::Deserialize;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::Kind;

/// Host-loop configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub draw_grid: Option<bool>,
    pub steps_per_frame: Option<usize>,
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn resolve(&self) -> Engine {
        let d = Engine::default();
        Engine {
            draw_grid: self.draw_grid.unwrap_or(d.draw_grid),
            steps_per_frame: self.steps_per_frame.unwrap_or(d.steps_per_frame).max(1),
            seed: self.seed,
        }
    }
}

/// Geometry and population of the world
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    pub particle_count: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1050.0,
            height: 800.0,
            cell_size: 50.0,
            particle_count: 1000,
        }
    }
}

/// Physical constants; anything left out keeps its [`Parameters`] default
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub particle_radius: Option<f64>,
    pub cursor_radius: Option<f64>,
    pub particle_repulsion: Option<f64>,
    pub wall_repulsion: Option<f64>,
    pub cursor_repulsion: Option<f64>,
    pub max_velocity: Option<f64>,
    pub max_acceleration: Option<f64>,
    pub damping: Option<f64>,
    pub walls_repel: Option<bool>,
}

impl ParametersConfig {
    pub fn resolve(&self) -> Parameters {
        let d = Parameters::default();
        Parameters {
            particle_radius: self.particle_radius.unwrap_or(d.particle_radius),
            cursor_radius: self.cursor_radius.unwrap_or(d.cursor_radius),
            particle_repulsion: self.particle_repulsion.unwrap_or(d.particle_repulsion),
            wall_repulsion: self.wall_repulsion.unwrap_or(d.wall_repulsion),
            cursor_repulsion: self.cursor_repulsion.unwrap_or(d.cursor_repulsion),
            max_velocity: self.max_velocity.unwrap_or(d.max_velocity),
            max_acceleration: self.max_acceleration.unwrap_or(d.max_acceleration),
            damping: self.damping.unwrap_or(d.damping),
            walls_repel: self.walls_repel.unwrap_or(d.walls_repel),
        }
    }
}

/// Initial state of a single particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: [f64; 2], // position in world units, y down
    #[serde(default)]
    pub v: [f64; 2], // initial velocity per step
    #[serde(default = "default_kind")]
    pub kind: Kind,
}

fn default_kind() -> Kind {
    Kind::Alpha
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
