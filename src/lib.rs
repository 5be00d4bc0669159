pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, Kind, Bounds, Cursor, NVec2};
pub use simulation::vector::{VecOps, subtract_into};
pub use simulation::error::SimError;
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::grid::Grid;
pub use simulation::forces::{repulsion, accumulate_repulsion, Acceleration, AccelSet, FieldView, ParticleRepulsion, WallRepulsion, CursorRepulsion};
pub use simulation::integrator::{damped_euler_step, StepStats};
pub use simulation::world::World;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, WorldConfig, ParametersConfig, ParticleConfig, ScenarioConfig};

pub use visualization::repelsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
