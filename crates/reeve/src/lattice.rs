//! Lattice sweeps: enumerate `Z_n = (1/n)·Z³` inside a box and tally locations.
//!
//! Purpose
//! - Callers count lattice points of a tetrahedron (Ehrhart values, Reeve's
//!   formula). Each point is classified independently, so sweeps are
//!   embarrassingly parallel; `par_tally` splits on x-slabs when the
//!   `parallel` feature is enabled.
//!
//! Conventions
//! - Points are stored as integer numerators `[i, j, k]` over the lattice
//!   denominator `n`, so membership in a coarser lattice is exact.
//! - Box bounds snap outward: `floor(n·min) ..= ceil(n·max)` per axis.

use std::fmt;
use std::ops::{Add, AddAssign, RangeInclusive};

use nalgebra::Vector3;

use crate::geom3::{ClassifyCfg, Location, Tet};

/// Errors surfaced by lattice construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// `Z_0` is not a lattice.
    ZeroDenominator,
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeError::ZeroDenominator => write!(f, "lattice denominator must be >= 1"),
        }
    }
}

impl std::error::Error for LatticeError {}

/// The lattice `Z_n` of points whose coordinates are integer multiples of `1/n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    n: u32,
}

impl Lattice {
    pub fn new(n: u32) -> Result<Self, LatticeError> {
        if n == 0 {
            return Err(LatticeError::ZeroDenominator);
        }
        Ok(Self { n })
    }

    /// `Z_1 = Z³`.
    #[inline]
    pub fn integer() -> Self {
        Self { n: 1 }
    }

    /// `Z_2`, the half-integer lattice.
    #[inline]
    pub fn half() -> Self {
        Self { n: 2 }
    }

    #[inline]
    pub fn denominator(&self) -> u32 {
        self.n
    }

    #[inline]
    pub fn point(&self, ijk: [i64; 3]) -> Vector3<f64> {
        let n = self.n as f64;
        Vector3::new(ijk[0] as f64 / n, ijk[1] as f64 / n, ijk[2] as f64 / n)
    }

    /// Numerators covering `[lo, hi]`, snapped outward.
    #[inline]
    pub fn index_range(&self, lo: f64, hi: f64) -> RangeInclusive<i64> {
        let n = self.n as f64;
        ((lo * n).floor() as i64)..=((hi * n).ceil() as i64)
    }

    /// Number of lattice points the sweep over `bounds` visits.
    pub fn count_in(&self, bounds: &Bounds3) -> u64 {
        let len = |r: RangeInclusive<i64>| {
            if r.is_empty() {
                0
            } else {
                (r.end() - r.start() + 1) as u64
            }
        };
        len(self.index_range(bounds.min.x, bounds.max.x))
            * len(self.index_range(bounds.min.y, bounds.max.y))
            * len(self.index_range(bounds.min.z, bounds.max.z))
    }

    /// All lattice points in `bounds`, x-major, as `(numerators, point)`.
    pub fn points(self, bounds: &Bounds3) -> impl Iterator<Item = ([i64; 3], Vector3<f64>)> {
        let xs = self.index_range(bounds.min.x, bounds.max.x);
        let ys = self.index_range(bounds.min.y, bounds.max.y);
        let zs = self.index_range(bounds.min.z, bounds.max.z);
        xs.flat_map(move |i| {
            let zs = zs.clone();
            ys.clone().flat_map(move |j| zs.clone().map(move |k| [i, j, k]))
        })
        .map(move |ijk| (ijk, self.point(ijk)))
    }

    /// Whether numerators `ijk` (over this lattice) also lie in `Z_m`.
    #[inline]
    pub fn is_in_sublattice(&self, ijk: [i64; 3], m: u32) -> bool {
        let n = self.n as i64;
        let m = m as i64;
        ijk.iter().all(|&i| (i * m) % n == 0)
    }
}

/// Closed axis-aligned box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Bounds3 {
    #[inline]
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Cube `[lo, hi]^3`.
    #[inline]
    pub fn cube(lo: f64, hi: f64) -> Self {
        Self::new(Vector3::repeat(lo), Vector3::repeat(hi))
    }

    /// Bounding box of `tet` grown by `margin` on every side.
    pub fn around(tet: &Tet, margin: f64) -> Self {
        let (lo, hi) = tet.aabb();
        let m = Vector3::repeat(margin);
        Self::new(lo - m, hi + m)
    }
}

/// One classified lattice point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeSample {
    pub index: [i64; 3],
    pub point: Vector3<f64>,
    pub location: Location,
}

/// Location tallies over a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatticeCounts {
    pub interior: u64,
    pub boundary: u64,
    pub outside: u64,
}

impl LatticeCounts {
    #[inline]
    pub fn record(&mut self, loc: Location) {
        match loc {
            Location::Interior => self.interior += 1,
            Location::Boundary => self.boundary += 1,
            Location::Outside => self.outside += 1,
        }
    }

    /// Points of the closed solid (interior + boundary).
    #[inline]
    pub fn closed(&self) -> u64 {
        self.interior + self.boundary
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.closed() + self.outside
    }
}

impl Add for LatticeCounts {
    type Output = LatticeCounts;
    #[inline]
    fn add(self, rhs: LatticeCounts) -> Self::Output {
        LatticeCounts {
            interior: self.interior + rhs.interior,
            boundary: self.boundary + rhs.boundary,
            outside: self.outside + rhs.outside,
        }
    }
}

impl AddAssign for LatticeCounts {
    #[inline]
    fn add_assign(&mut self, rhs: LatticeCounts) {
        *self = *self + rhs;
    }
}

/// Classify every lattice point in `bounds`.
pub fn sweep(tet: &Tet, lattice: Lattice, bounds: &Bounds3, cfg: ClassifyCfg) -> Vec<LatticeSample> {
    let mut out = Vec::with_capacity(lattice.count_in(bounds) as usize);
    for (index, point) in lattice.points(bounds) {
        out.push(LatticeSample {
            index,
            point,
            location: tet.classify_with(point, cfg),
        });
    }
    out
}

/// Count locations of every lattice point in `bounds` (sequential).
pub fn tally(tet: &Tet, lattice: Lattice, bounds: &Bounds3, cfg: ClassifyCfg) -> LatticeCounts {
    let mut counts = LatticeCounts::default();
    for (_, p) in lattice.points(bounds) {
        counts.record(tet.classify_with(p, cfg));
    }
    counts
}

/// Tally `Z_n` and, in the same pass, the points that also lie in `Z_m`.
///
/// Returns `(coarse, fine)`; `fine` includes the coarse points.
pub fn tally_nested(
    tet: &Tet,
    lattice: Lattice,
    coarse: u32,
    bounds: &Bounds3,
    cfg: ClassifyCfg,
) -> (LatticeCounts, LatticeCounts) {
    let mut sub = LatticeCounts::default();
    let mut all = LatticeCounts::default();
    for (ijk, p) in lattice.points(bounds) {
        let loc = tet.classify_with(p, cfg);
        all.record(loc);
        if lattice.is_in_sublattice(ijk, coarse) {
            sub.record(loc);
        }
    }
    (sub, all)
}

/// Parallel `tally`, split on x-slabs. Same result as the sequential sweep.
#[cfg(feature = "parallel")]
pub fn par_tally(tet: &Tet, lattice: Lattice, bounds: &Bounds3, cfg: ClassifyCfg) -> LatticeCounts {
    use rayon::prelude::*;

    let xs = lattice.index_range(bounds.min.x, bounds.max.x);
    let ys = lattice.index_range(bounds.min.y, bounds.max.y);
    let zs = lattice.index_range(bounds.min.z, bounds.max.z);
    xs.into_par_iter()
        .map(|i| {
            let mut slab = LatticeCounts::default();
            for j in ys.clone() {
                for k in zs.clone() {
                    slab.record(tet.classify_with(lattice.point([i, j, k]), cfg));
                }
            }
            slab
        })
        .reduce(LatticeCounts::default, |a, b| a + b)
}
