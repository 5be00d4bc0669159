//! Fixed-step damped Euler integrator for the particle field
//!
//! One call to [`damped_euler_step`] runs six phases, each over the whole
//! population before the next one starts:
//!
//! 1. force accumulation from the settled positions of the previous frame
//! 2. velocity integration (damping, speed cap)
//! 3. position integration
//! 4. cursor exclusion
//! 5. boundary clamping
//! 6. grid reconciliation
//!
//! Positions are only written from phase 3 on, so every particle's forces
//! see the same snapshot regardless of iteration order.

use super::forces::{AccelSet, FieldView};
use super::grid::Grid;
use super::params::Parameters;
use super::states::{Bounds, Cursor, NVec2, Particle};
use super::vector::VecOps;
use super::world::World;

/// Bookkeeping from one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub cell_transfers: usize, // particles that changed grid cell
}

/// Advance `world` by one fixed step
pub fn damped_euler_step(world: &mut World) -> StepStats {
    let World {
        particles,
        grid,
        bounds,
        params,
        cursor,
        forces,
        accel_buf,
        ..
    } = world;

    if particles.is_empty() {
        return StepStats::default();
    }

    accumulate_forces(particles, grid, *bounds, *cursor, forces, accel_buf);
    integrate_velocities(particles, accel_buf, params);
    integrate_positions(particles);
    exclude_cursor(particles, cursor, params);
    clamp_to_bounds(particles, bounds);
    let cell_transfers = reconcile_grid(particles, grid);

    StepStats { cell_transfers }
}

/// Phase 1: sum every term into `accel_buf` (positions are only read)
pub fn accumulate_forces(
    particles: &[Particle],
    grid: &Grid,
    bounds: Bounds,
    cursor: Cursor,
    forces: &AccelSet,
    accel_buf: &mut Vec<NVec2>,
) {
    accel_buf.resize(particles.len(), NVec2::zeros());
    let view = FieldView {
        particles,
        grid,
        bounds,
        cursor,
    };
    forces.accumulate_accels(&view, accel_buf);
}

/// Phase 2: store the (capped) acceleration, then `v += a`, damp, cap speed
pub fn integrate_velocities(particles: &mut [Particle], accels: &[NVec2], params: &Parameters) {
    for (p, a) in particles.iter_mut().zip(accels.iter()) {
        p.acceleration = *a;
        if params.max_acceleration > 0.0 {
            p.acceleration.clamp_length(params.max_acceleration);
        }

        p.velocity += p.acceleration;

        if params.damping > 0.0 {
            p.velocity *= params.damping;
        }

        // without this cap the inverse-square push near contact injects unbounded energy
        p.velocity.clamp_length(params.max_velocity);
    }
}

/// Phase 3: `p += v`
pub fn integrate_positions(particles: &mut [Particle]) {
    for p in particles.iter_mut() {
        p.position += p.velocity;
    }
}

/// Phase 4: particles inside the cursor disc are placed on a ring of radius
/// `cursor_radius + particle_radius` around it. A particle sitting exactly on
/// the cursor is pushed along +x.
pub fn exclude_cursor(particles: &mut [Particle], cursor: &Cursor, params: &Parameters) {
    if !cursor.active {
        return;
    }
    let ring = params.cursor_radius + params.particle_radius;
    for p in particles.iter_mut() {
        let offset = p.position - cursor.position;
        if offset.length() < params.cursor_radius {
            let mut dir = offset.normalize_or_zero();
            if dir == NVec2::zeros() {
                dir = NVec2::new(1.0, 0.0);
            }
            p.position = cursor.position + dir * ring;
        }
    }
}

/// Phase 5: keep every coordinate strictly inside `(0, dimension)`
pub fn clamp_to_bounds(particles: &mut [Particle], bounds: &Bounds) {
    for p in particles.iter_mut() {
        let pos = &mut p.position;
        if pos.x <= 0.0 {
            pos.x = 1.0;
        }
        if pos.x >= bounds.width {
            pos.x = bounds.width - 1.0;
        }
        if pos.y <= 0.0 {
            pos.y = 1.0;
        }
        if pos.y >= bounds.height {
            pos.y = bounds.height - 1.0;
        }
    }
}

/// Phase 6: move particles whose cell changed. Returns how many moved.
pub fn reconcile_grid(particles: &mut [Particle], grid: &mut Grid) -> usize {
    let mut transfers = 0;
    for (id, p) in particles.iter_mut().enumerate() {
        // positions are clamped into the bounds, so the lookup always succeeds
        let Some(cell) = grid.cell_of_position(&p.position) else {
            continue;
        };
        if cell != p.cell {
            grid.relocate(id, p.cell, cell);
            p.cell = cell;
            transfers += 1;
        }
    }
    transfers
}
