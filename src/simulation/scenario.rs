//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - host-loop settings (`Engine`)
//! - the world (`World`: particles on the grid, force terms, cursor)
//!
//! The viewer inserts a `Scenario` into Bevy as a `Resource`; the headless
//! runner and the benchmarks drive it directly.

use bevy::prelude::Resource;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::states::{Bounds, NVec2, Particle};
use crate::simulation::world::World;

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub world: World,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let engine = cfg.engine.resolve();
        let parameters = cfg.parameters.resolve();
        let w_cfg = cfg.world;
        let bounds = Bounds::new(w_cfg.width, w_cfg.height);

        let world = if cfg.particles.is_empty() {
            let mut rng = match engine.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            World::initialize(bounds, w_cfg.particle_count, w_cfg.cell_size, parameters, &mut rng)?
        } else {
            // explicit placements win over `particle_count`
            let particles = cfg.particles.iter().map(|pc: &ParticleConfig| {
                Particle::new(NVec2::new(pc.x[0], pc.x[1]), pc.kind)
                    .with_velocity(NVec2::new(pc.v[0], pc.v[1]))
            }).collect();
            World::from_particles(bounds, w_cfg.cell_size, parameters, particles)?
        };

        info!(
            "scenario: {} steps per frame, grid overlay {}, seed {:?}",
            engine.steps_per_frame, engine.draw_grid, engine.seed
        );

        Ok(Self { engine, world })
    }
}
