//! Vector helpers used by the hot per-frame loops.
//!
//! nalgebra already provides `+`, `-`, `*` and their assigning forms; this
//! adds the few operations the force model needs with the exact semantics
//! it relies on (zero-safe normalization, in-place set, length capping).

use super::states::NVec2;

pub trait VecOps {
    /// Unit vector in the same direction, or the zero vector when the length is zero
    fn normalize_or_zero(&self) -> NVec2;

    /// Euclidean magnitude
    fn length(&self) -> f64;

    fn set(&mut self, x: f64, y: f64);

    fn set_from(&mut self, other: &NVec2);

    /// Rescale to `max` if longer than `max`, keeping direction
    fn clamp_length(&mut self, max: f64);
}

impl VecOps for NVec2 {
    fn normalize_or_zero(&self) -> NVec2 {
        let len = self.norm();
        if len > 0.0 {
            self / len
        } else {
            NVec2::zeros()
        }
    }

    fn length(&self) -> f64 {
        self.norm()
    }

    fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn set_from(&mut self, other: &NVec2) {
        self.x = other.x;
        self.y = other.y;
    }

    fn clamp_length(&mut self, max: f64) {
        let len = self.norm();
        if len > max {
            *self = self.normalize_or_zero() * max;
        }
    }
}

/// `out = a - b`, without producing a temporary at the call site
#[inline]
pub fn subtract_into(a: &NVec2, b: &NVec2, out: &mut NVec2) {
    out.x = a.x - b.x;
    out.y = a.y - b.y;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_vector_is_zero() {
        let v = NVec2::zeros().normalize_or_zero();
        assert_eq!(v, NVec2::zeros());
        assert!(v.x.is_finite() && v.y.is_finite());
    }

    #[test]
    fn normalized_vector_has_unit_length() {
        let v = NVec2::new(3.0, 4.0).normalize_or_zero();
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_length_preserves_direction() {
        let mut v = NVec2::new(30.0, 40.0);
        v.clamp_length(5.0);
        assert!((v.x - 3.0).abs() < 1e-12);
        assert!((v.y - 4.0).abs() < 1e-12);

        let mut short = NVec2::new(0.3, 0.4);
        short.clamp_length(5.0);
        assert_eq!(short, NVec2::new(0.3, 0.4));
    }

    #[test]
    fn subtract_into_writes_output() {
        let mut out = NVec2::new(9.0, 9.0);
        subtract_into(&NVec2::new(5.0, 1.0), &NVec2::new(2.0, 3.0), &mut out);
        assert_eq!(out, NVec2::new(3.0, -2.0));

        out.set(1.0, 2.0);
        assert_eq!(out, NVec2::new(1.0, 2.0));
        out.set_from(&NVec2::new(-1.0, 0.5));
        assert_eq!(out, NVec2::new(-1.0, 0.5));
    }
}
