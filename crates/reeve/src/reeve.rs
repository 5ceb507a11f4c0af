//! Reeve tetrahedra `T_r` and the lattice-counting identities they illustrate.
//!
//! - `T_r = conv{(0,0,0), (1,0,0), (0,1,0), (1,1,r)}` has volume `r/6` yet no
//!   lattice points besides its vertices, so no Pick-style formula in `I`
//!   and `B` alone can give the volume of a lattice tetrahedron.
//! - Ehrhart: `L(t) = #(t·T_r ∩ Z³) = (r/6)t³ + t² + (2 − r/6)t + 1`, and by
//!   reciprocity the interior count is `−L(−t)`.
//! - Reeve: counting on `Z³` and on the half lattice `Z_2` recovers the volume,
//!   `12V = 2·I₂ + B₂ − 2·(2·I₁ + B₁)`, where the `Z_2` counts include `Z³`.

use std::fmt;

use nalgebra::Vector3;

use crate::geom3::cfg::{REEVE_VOLUME_TOL, VIEW_MARGIN};
use crate::geom3::{ClassifyCfg, Tet};
use crate::lattice::{tally, tally_nested, Bounds3, Lattice, LatticeCounts};

/// Errors surfaced by Reeve constructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReeveError {
    /// `T_0` is flat.
    ZeroHeight,
    /// The 0-dilate is a single point.
    ZeroDilation,
}

impl fmt::Display for ReeveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReeveError::ZeroHeight => write!(f, "Reeve height r must be >= 1"),
            ReeveError::ZeroDilation => write!(f, "dilation factor t must be >= 1"),
        }
    }
}

impl std::error::Error for ReeveError {}

/// `T_r` with vertices A=(0,0,0), B=(1,0,0), C=(0,1,0), D=(1,1,r).
pub fn reeve_tetrahedron(r: u32) -> Result<Tet, ReeveError> {
    reeve_dilate(r, 1)
}

/// `t·T_r`, the integer dilate about the origin.
pub fn reeve_dilate(r: u32, t: u32) -> Result<Tet, ReeveError> {
    if r == 0 {
        return Err(ReeveError::ZeroHeight);
    }
    if t == 0 {
        return Err(ReeveError::ZeroDilation);
    }
    let base = Tet::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(1.0, 1.0, r as f64),
    );
    Ok(base.scale(t as f64))
}

/// Exact volume `r/6`.
#[inline]
pub fn reeve_volume_exact(r: u32) -> f64 {
    r as f64 / 6.0
}

/// Ehrhart polynomial of `T_r` at `t`: lattice points of `t·T_r` (closed).
///
/// Evaluated as `(r t³ + 6t² + (12 − r) t + 6) / 6`, which is an exact integer
/// division for every integer `t`.
pub fn ehrhart_reeve(r: u32, t: i64) -> i64 {
    let r = r as i64;
    (r * t * t * t + 6 * t * t + (12 - r) * t + 6) / 6
}

/// Interior lattice points of `t·T_r` via reciprocity: `−L(−t)`.
pub fn ehrhart_reeve_interior(r: u32, t: i64) -> i64 {
    -ehrhart_reeve(r, -t)
}

/// Count `Z³` points of `t·T_r` over its bounding box grown by `VIEW_MARGIN`.
pub fn count_dilate(r: u32, t: u32, cfg: ClassifyCfg) -> Result<LatticeCounts, ReeveError> {
    let tet = reeve_dilate(r, t)?;
    let bounds = Bounds3::around(&tet, VIEW_MARGIN);
    Ok(tally(&tet, Lattice::integer(), &bounds, cfg))
}

/// `(2·I₂ + B₂ − 2·(2·I₁ + B₁)) / 12`; `z2` must include the `Z³` points.
pub fn reeve_volume_from_counts(z1: LatticeCounts, z2: LatticeCounts) -> f64 {
    let i1 = z1.interior as f64;
    let b1 = z1.boundary as f64;
    let i2 = z2.interior as f64;
    let b2 = z2.boundary as f64;
    (2.0 * i2 + b2 - 2.0 * (2.0 * i1 + b1)) / 12.0
}

/// `Z³` and `Z_2` counts of `tet` over its bounding box grown by `VIEW_MARGIN`.
///
/// Returns `(z1, z2)` with `z2` including the `Z³` points.
pub fn reeve_counts(tet: &Tet, cfg: ClassifyCfg) -> (LatticeCounts, LatticeCounts) {
    let bounds = Bounds3::around(tet, VIEW_MARGIN);
    tally_nested(tet, Lattice::half(), 1, &bounds, cfg)
}

/// Volume of a lattice tetrahedron from Reeve's formula.
pub fn reeve_volume(tet: &Tet, cfg: ClassifyCfg) -> f64 {
    let (z1, z2) = reeve_counts(tet, cfg);
    reeve_volume_from_counts(z1, z2)
}

/// Reeve-formula volume of `T_r` next to its exact volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReeveCheck {
    pub r: u32,
    pub z1: LatticeCounts,
    pub z2: LatticeCounts,
    pub volume_formula: f64,
    pub volume_exact: f64,
}

impl ReeveCheck {
    pub fn run(r: u32, cfg: ClassifyCfg) -> Result<Self, ReeveError> {
        let tet = reeve_tetrahedron(r)?;
        let (z1, z2) = reeve_counts(&tet, cfg);
        Ok(Self {
            r,
            z1,
            z2,
            volume_formula: reeve_volume_from_counts(z1, z2),
            volume_exact: reeve_volume_exact(r),
        })
    }

    #[inline]
    pub fn consistent(&self) -> bool {
        (self.volume_formula - self.volume_exact).abs() <= REEVE_VOLUME_TOL
    }
}
