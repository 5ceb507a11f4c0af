//! Tolerance defaults for 3D classification.
//!
//! Policy
//! - One fixed epsilon is shared by every zero test in the classifier (plane
//!   distance, barycentric bounds, segment containment, vertex coincidence).
//!   It is tuned for integer and half-integer coordinates and is not adaptive.
//! - Callers working at a different coordinate scale pass a `ClassifyCfg`
//!   with a scaled `eps` instead of touching the constant.

/// Default epsilon for all classifier zero tests.
pub const EPS: f64 = 1e-9;
/// Allowed gap between the Reeve-formula volume and `r/6`.
pub const REEVE_VOLUME_TOL: f64 = 1e-9;
/// Margin added around a tetrahedron's bounding box when sweeping lattices.
pub const VIEW_MARGIN: f64 = 1.5;

/// Classifier configuration (tolerance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyCfg {
    pub eps: f64,
}

impl Default for ClassifyCfg {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

impl ClassifyCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }

    /// Tolerance for a tetrahedron scaled by `s > 0` relative to the default units.
    #[inline]
    pub fn scaled(self, s: f64) -> Self {
        Self { eps: self.eps * s }
    }
}
