//! Interior / boundary / outside classification against a tetrahedron.
//!
//! Algorithm
//! - Orient the four face planes toward the centroid (always interior for a
//!   non-degenerate tetrahedron).
//! - Any signed distance below `-eps` short-circuits to `Outside`.
//! - No face plane touched (`|d| < eps`) means `Interior`.
//! - Otherwise resolve the boundary in a fixed order: triangle extent of the
//!   touched faces, then the six edges, then the four vertices. The edge and
//!   vertex checks only fire in floating-point corner cases; the order is fixed.
//!
//! Degenerate (coplanar) input has no defined answer. The routine still
//! terminates and returns some `Location` without producing NaN distances.

use nalgebra::Vector3;

use super::cfg::ClassifyCfg;
use super::predicates::{point_at_vertex, point_in_triangle, point_on_segment};
use super::types::{Location, Tet};

/// Classify `p` against the tetrahedron `(a, b, c, d)` with the default tolerance.
#[inline]
pub fn classify(
    p: Vector3<f64>,
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
    d: Vector3<f64>,
) -> Location {
    classify_with(&Tet::new(a, b, c, d), p, ClassifyCfg::default())
}

/// Classify `p` against `tet` using `cfg.eps` for every zero test.
pub fn classify_with(tet: &Tet, p: Vector3<f64>, cfg: ClassifyCfg) -> Location {
    let eps = cfg.eps;
    let faces = tet.faces(eps);

    let mut touched = [false; 4];
    for (i, face) in faces.iter().enumerate() {
        let dist = face.plane.signed_distance(p);
        if dist < -eps {
            return Location::Outside;
        }
        touched[i] = dist.abs() < eps;
    }
    if !touched.iter().any(|&t| t) {
        return Location::Interior;
    }

    let on_face = faces.iter().zip(touched).any(|(face, t)| {
        let [fa, fb, fc] = face.vertices;
        t && point_in_triangle(p, fa, fb, fc, eps).inside
    });
    if on_face {
        return Location::Boundary;
    }

    // On a face plane but outside every touched triangle.
    if tet
        .edges()
        .iter()
        .any(|&(e0, e1)| point_on_segment(p, e0, e1, eps))
    {
        return Location::Boundary;
    }
    if tet.vertices().iter().any(|&v| point_at_vertex(p, v, eps)) {
        return Location::Boundary;
    }
    Location::Outside
}

impl Tet {
    /// Classify `p` with the default tolerance.
    #[inline]
    pub fn classify(&self, p: Vector3<f64>) -> Location {
        classify_with(self, p, ClassifyCfg::default())
    }

    #[inline]
    pub fn classify_with(&self, p: Vector3<f64>, cfg: ClassifyCfg) -> Location {
        classify_with(self, p, cfg)
    }
}
