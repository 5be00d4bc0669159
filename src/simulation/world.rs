//! The simulation world: a fixed particle population on a uniform grid
//!
//! `World` owns the particles, the grid that indexes them, the active
//! force terms and the cursor. A host loop calls [`World::set_cursor`]
//! between frames and [`World::step`] once per frame, then reads
//! [`World::particles`] to draw.

use log::{info, trace};
use rand::Rng;

use super::error::SimError;
use super::forces::{AccelSet, CursorRepulsion, ParticleRepulsion, WallRepulsion};
use super::grid::Grid;
use super::integrator::{damped_euler_step, StepStats};
use super::params::Parameters;
use super::states::{Bounds, Cursor, Kind, NVec2, Particle};

pub struct World {
    pub(crate) particles: Vec<Particle>,
    pub(crate) grid: Grid,
    pub(crate) bounds: Bounds,
    pub(crate) params: Parameters,
    pub(crate) cursor: Cursor,
    pub(crate) forces: AccelSet,
    pub(crate) accel_buf: Vec<NVec2>, // reused every frame by the force pass
    pub(crate) frame: u64,
    pub(crate) last_stats: StepStats,
}

impl World {
    /// Scatter `particle_count` particles uniformly over the bounds with
    /// uniformly chosen kinds
    pub fn initialize<R: Rng>(
        bounds: Bounds,
        particle_count: usize,
        cell_size: f64,
        params: Parameters,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        validate_bounds(bounds)?;

        let particles = (0..particle_count)
            .map(|_| {
                let position = NVec2::new(rng.gen_range(0.0..bounds.width), rng.gen_range(0.0..bounds.height));
                let kind = Kind::ALL[rng.gen_range(0..Kind::ALL.len())];
                Particle::new(position, kind)
            })
            .collect();

        Self::from_particles(bounds, cell_size, params, particles)
    }

    /// Build a world from explicit particles. Every particle must lie in
    /// `[0, width) x [0, height)` and carry a finite velocity.
    pub fn from_particles(
        bounds: Bounds,
        cell_size: f64,
        params: Parameters,
        mut particles: Vec<Particle>,
    ) -> Result<Self, SimError> {
        validate_bounds(bounds)?;
        params.validate()?;
        let mut grid = Grid::new(bounds, cell_size)?;

        for (id, p) in particles.iter_mut().enumerate() {
            // a NaN velocity would pass through the speed cap and poison the position
            if !p.velocity.x.is_finite() || !p.velocity.y.is_finite() {
                return Err(SimError::ParticleNotFinite {
                    index: id,
                    vx: p.velocity.x,
                    vy: p.velocity.y,
                });
            }
            let cell = grid
                .cell_of_position(&p.position)
                .filter(|_| bounds.contains(&p.position))
                .ok_or(SimError::ParticleOutOfBounds {
                    index: id,
                    x: p.position.x,
                    y: p.position.y,
                })?;
            p.cell = cell;
            grid.insert(id, cell);
        }

        let forces = build_forces(&params);

        info!(
            "world: {} particles, {}x{} bounds, {}x{} cells of {}",
            particles.len(),
            bounds.width,
            bounds.height,
            grid.cols(),
            grid.rows(),
            grid.cell_size()
        );

        Ok(Self {
            accel_buf: vec![NVec2::zeros(); particles.len()],
            particles,
            grid,
            bounds,
            params,
            cursor: Cursor::default(),
            forces,
            frame: 0,
            last_stats: StepStats::default(),
        })
    }

    /// Cursor state read by the next step
    pub fn set_cursor(&mut self, position: NVec2, active: bool) {
        self.cursor = Cursor { position, active };
    }

    /// Mark the cursor inactive, keeping its last position
    pub fn clear_cursor(&mut self) {
        self.cursor.active = false;
    }

    /// Advance the simulation by one fixed increment
    pub fn step(&mut self) {
        let stats = damped_euler_step(self);
        self.frame += 1;
        self.last_stats = stats;
        trace!("frame {}: {} cell transfers", self.frame, stats.cell_transfers);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Completed steps since construction
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }

    /// Sum of |v|^2 over the population
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.velocity.norm_squared()).sum()
    }
}

fn validate_bounds(bounds: Bounds) -> Result<(), SimError> {
    // the boundary clamp nudges to 1 and dimension - 1, which needs room
    let ok = |d: f64| d.is_finite() && d > 2.0;
    if ok(bounds.width) && ok(bounds.height) {
        Ok(())
    } else {
        Err(SimError::InvalidBounds {
            width: bounds.width,
            height: bounds.height,
        })
    }
}

fn build_forces(params: &Parameters) -> AccelSet {
    let mut forces = AccelSet::new().with(ParticleRepulsion {
        k: params.particle_repulsion,
    });
    if params.walls_repel {
        forces = forces.with(WallRepulsion {
            k: params.wall_repulsion,
        });
    }
    forces.with(CursorRepulsion {
        k: params.cursor_repulsion,
    })
}
