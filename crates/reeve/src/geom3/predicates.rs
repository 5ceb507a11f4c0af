//! Boundary predicates: point on segment, point in triangle, point at vertex.
//!
//! All tests take an explicit `eps` so callers can match it to their
//! coordinate scale (see `ClassifyCfg`).

use nalgebra::Vector3;

/// Result of the barycentric triangle test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriangleHit {
    /// Inside the closed triangle (within `eps`).
    pub inside: bool,
    /// Inside and on one of the three edges (within `eps`).
    pub on_edge: bool,
}

/// Collinear with `ab` and between its endpoints.
///
/// Collinearity: `|AB × AP|² <= eps`. Containment: `-eps <= AB·AP <= |AB|² + eps`.
pub fn point_on_segment(p: Vector3<f64>, a: Vector3<f64>, b: Vector3<f64>, eps: f64) -> bool {
    let ab = b - a;
    let ap = p - a;
    if ab.cross(&ap).norm_squared() > eps {
        return false;
    }
    let dot = ab.dot(&ap);
    dot >= -eps && dot <= ab.norm_squared() + eps
}

/// Barycentric test of `p` against triangle `(a, b, c)`.
///
/// `p` is assumed to lie on (or very near) the triangle's plane; the test
/// measures the projection. A zero-area triangle reports "not inside".
pub fn point_in_triangle(
    p: Vector3<f64>,
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
    eps: f64,
) -> TriangleHit {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    if !inv_denom.is_finite() {
        return TriangleHit::default();
    }

    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    let inside = u >= -eps && v >= -eps && u + v <= 1.0 + eps;
    let on_edge = inside && (u.abs() < eps || v.abs() < eps || (u + v - 1.0).abs() < eps);
    TriangleHit { inside, on_edge }
}

/// Coincides with `v`: `|p - v|² < eps²`.
#[inline]
pub fn point_at_vertex(p: Vector3<f64>, v: Vector3<f64>, eps: f64) -> bool {
    (p - v).norm_squared() < eps * eps
}
