//! Core 3D types: tetrahedra, faces with supporting planes, and locations.

use std::fmt;

use nalgebra::{Matrix3, Vector3};

use super::cfg::EPS;

/// Where a query point sits relative to a closed solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Interior,
    Boundary,
    Outside,
}

impl Location {
    /// Interior or boundary, i.e. a point of the closed solid.
    #[inline]
    pub fn is_closed(self) -> bool {
        !matches!(self, Location::Outside)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Location::Interior => "Interior",
            Location::Boundary => "Boundary",
            Location::Outside => "Outside",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plane `n · (x - origin) = 0` with unit normal `n`.
///
/// Invariants:
/// - `n` has unit length, or is zero when built from collinear points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane3 {
    pub n: Vector3<f64>,
    pub origin: Vector3<f64>,
}

impl Plane3 {
    /// Plane through three points; normal follows `(b - a) × (c - a)`.
    ///
    /// Collinear input yields a zero normal, so every distance reads as 0.
    pub fn through(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        let n = (b - a)
            .cross(&(c - a))
            .try_normalize(0.0)
            .unwrap_or_else(Vector3::zeros);
        Self { n, origin: a }
    }

    #[inline]
    pub fn signed_distance(&self, p: Vector3<f64>) -> f64 {
        self.n.dot(&(p - self.origin))
    }

    /// Copy of this plane whose normal points toward `inside`.
    ///
    /// The normal flips only when `inside` lies more than `eps` behind it.
    #[inline]
    pub fn facing(self, inside: Vector3<f64>, eps: f64) -> Self {
        if self.signed_distance(inside) < -eps {
            Self {
                n: -self.n,
                origin: self.origin,
            }
        } else {
            self
        }
    }
}

/// Triangular face of a tetrahedron with its (inward) supporting plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub vertices: [Vector3<f64>; 3],
    pub plane: Plane3,
}

impl Face {
    /// Face `(a, b, c)` with its plane anchored at `a`, not yet oriented.
    #[inline]
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self {
            vertices: [a, b, c],
            plane: Plane3::through(a, b, c),
        }
    }

    #[inline]
    pub fn oriented_toward(self, inside: Vector3<f64>, eps: f64) -> Self {
        Self {
            vertices: self.vertices,
            plane: self.plane.facing(inside, eps),
        }
    }
}

/// Errors surfaced when constructing tetrahedra.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TetError {
    /// The four vertices are (nearly) coplanar.
    Degenerate { volume: f64 },
    /// A vertex coordinate is NaN or infinite.
    NonFinite,
}

impl fmt::Display for TetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TetError::Degenerate { volume } => write!(
                f,
                "tetrahedron is degenerate (volume {volume:e} is within tolerance of 0)"
            ),
            TetError::NonFinite => write!(f, "tetrahedron has a non-finite vertex coordinate"),
        }
    }
}

impl std::error::Error for TetError {}

/// Tetrahedron given by an ordered vertex 4-tuple `(A, B, C, D)`.
///
/// Invariants:
/// - Nothing derived is stored; planes and orientations are rebuilt per query.
/// - Classification assumes non-coplanar vertices. `Tet::new` does not check;
///   use `Tet::try_new` to reject degenerate input up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tet {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
    pub c: Vector3<f64>,
    pub d: Vector3<f64>,
}

impl Tet {
    #[inline]
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>, d: Vector3<f64>) -> Self {
        Self { a, b, c, d }
    }

    pub fn try_new(
        a: Vector3<f64>,
        b: Vector3<f64>,
        c: Vector3<f64>,
        d: Vector3<f64>,
    ) -> Result<Self, TetError> {
        let tet = Self::new(a, b, c, d);
        if tet.vertices().iter().any(|v| !v.iter().all(|x| x.is_finite())) {
            return Err(TetError::NonFinite);
        }
        let volume = tet.volume();
        if volume <= EPS {
            return Err(TetError::Degenerate { volume });
        }
        Ok(tet)
    }

    #[inline]
    pub fn vertices(&self) -> [Vector3<f64>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    #[inline]
    pub fn centroid(&self) -> Vector3<f64> {
        (self.a + self.b + self.c + self.d) * 0.25
    }

    /// Faces ABC, ABD, ACD, BCD (planes anchored at A, A, A, B), unoriented.
    pub fn raw_faces(&self) -> [Face; 4] {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        [
            Face::new(a, b, c),
            Face::new(a, b, d),
            Face::new(a, c, d),
            Face::new(b, c, d),
        ]
    }

    /// Faces with normals pointing toward the centroid.
    pub fn faces(&self, eps: f64) -> [Face; 4] {
        let inside = self.centroid();
        self.raw_faces().map(|f| f.oriented_toward(inside, eps))
    }

    /// Edges AB, AC, BC, AD, BD, CD.
    pub fn edges(&self) -> [(Vector3<f64>, Vector3<f64>); 6] {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        [(a, b), (a, c), (b, c), (a, d), (b, d), (c, d)]
    }

    /// `det[B-A, C-A, D-A] / 6`; positive when `(B-A, C-A, D-A)` is right-handed.
    pub fn signed_volume(&self) -> f64 {
        let m = Matrix3::from_columns(&[self.b - self.a, self.c - self.a, self.d - self.a]);
        m.determinant() / 6.0
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.volume() <= EPS
    }

    /// Axis-aligned bounding box `(min, max)`.
    pub fn aabb(&self) -> (Vector3<f64>, Vector3<f64>) {
        let vs = self.vertices();
        let mut lo = vs[0];
        let mut hi = vs[0];
        for v in &vs[1..] {
            lo = lo.inf(v);
            hi = hi.sup(v);
        }
        (lo, hi)
    }

    pub fn translate(&self, t: Vector3<f64>) -> Self {
        Self::new(self.a + t, self.b + t, self.c + t, self.d + t)
    }

    /// Scale every vertex about the origin.
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.a * s, self.b * s, self.c * s, self.d * s)
    }

    /// Scale about the centroid (keeps the centroid fixed).
    pub fn scale_about_centroid(&self, s: f64) -> Self {
        let g = self.centroid();
        let f = |v: Vector3<f64>| g + (v - g) * s;
        Self::new(f(self.a), f(self.b), f(self.c), f(self.d))
    }
}
