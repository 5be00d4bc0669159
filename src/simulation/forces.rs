//! Repulsion sources for the particle field
//!
//! Every source pushes a particle away from some point with an
//! inverse-square falloff. The distance is floored at 1 so coincident
//! points give a finite push instead of a singularity.
//!
//! Sources are [`Acceleration`] terms collected in an [`AccelSet`]; each
//! term adds its contribution per particle into a shared buffer, so the
//! sum does not depend on the order terms are registered in.

use super::grid::Grid;
use super::states::{Bounds, Cursor, NVec2, Particle};
use super::vector::{subtract_into, VecOps};

/// Push on a particle at `on` from a repulsion source at `from`:
/// direction `on - from`, magnitude `k / max(1, |on - from|)^2`
pub fn repulsion(on: &NVec2, from: &NVec2, k: f64) -> NVec2 {
    let mut acc = NVec2::zeros();
    accumulate_repulsion(&mut acc, on, from, k);
    acc
}

/// Same as [`repulsion`] but adds into `acc`
#[inline]
pub fn accumulate_repulsion(acc: &mut NVec2, on: &NVec2, from: &NVec2, k: f64) {
    let mut d = NVec2::zeros();
    subtract_into(on, from, &mut d);
    let dist = d.length().max(1.0);
    *acc += d.normalize_or_zero() * (k / (dist * dist));
}

/// Read-only snapshot of everything a term may look at during the force pass
pub struct FieldView<'a> {
    pub particles: &'a [Particle],
    pub grid: &'a Grid,
    pub bounds: Bounds,
    pub cursor: Cursor,
}

/// Repulsion sources acting on the field, applied in insertion order.
/// World setup pushes the neighbour term first, then walls when they are
/// enabled, then the cursor.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// No sources: every particle drifts
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Register one more repulsion source
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Net push on particle `i` lands in `out[i]`; stale values are discarded
    pub fn accumulate_accels(&self, view: &FieldView, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(view, out);
        }
    }
}

/// A repulsion source. Implementations add their contribution into `out[i]`
/// for each particle and must not read `out`.
pub trait Acceleration {
    fn acceleration(&self, view: &FieldView, out: &mut [NVec2]);
}

/// Particle-particle repulsion, limited to the particle's own cell and the
/// eight cells around it. Pairs further apart than that contribute nothing.
pub struct ParticleRepulsion {
    pub k: f64,
}

impl Acceleration for ParticleRepulsion {
    fn acceleration(&self, view: &FieldView, out: &mut [NVec2]) {
        for (i, p) in view.particles.iter().enumerate() {
            let acc = &mut out[i];
            for cell in view.grid.neighbors_of(p.cell).into_iter().flatten() {
                for &j in view.grid.members(cell) {
                    if j == i {
                        continue;
                    }
                    accumulate_repulsion(acc, &p.position, &view.particles[j].position, self.k);
                }
            }
        }
    }
}

/// One virtual source per wall, at the particle's projection onto that wall
pub struct WallRepulsion {
    pub k: f64,
}

impl Acceleration for WallRepulsion {
    fn acceleration(&self, view: &FieldView, out: &mut [NVec2]) {
        let Bounds { width, height } = view.bounds;
        for (p, acc) in view.particles.iter().zip(out.iter_mut()) {
            let pos = &p.position;
            accumulate_repulsion(acc, pos, &NVec2::new(pos.x, 0.0), self.k); // top
            accumulate_repulsion(acc, pos, &NVec2::new(width, pos.y), self.k); // right
            accumulate_repulsion(acc, pos, &NVec2::new(pos.x, height), self.k); // bottom
            accumulate_repulsion(acc, pos, &NVec2::new(0.0, pos.y), self.k); // left
        }
    }
}

/// Repulsion from the cursor while it is active
pub struct CursorRepulsion {
    pub k: f64,
}

impl Acceleration for CursorRepulsion {
    fn acceleration(&self, view: &FieldView, out: &mut [NVec2]) {
        if !view.cursor.active {
            return;
        }
        let c = view.cursor.position;
        for (p, acc) in view.particles.iter().zip(out.iter_mut()) {
            accumulate_repulsion(acc, &p.position, &c, self.k);
        }
    }
}
