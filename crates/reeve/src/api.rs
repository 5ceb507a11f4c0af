//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI and benches. Breaking changes are
//! allowed; nothing outside this workspace depends on it.

// Classification
pub use crate::geom3::{
    classify, classify_with, point_at_vertex, point_in_triangle, point_on_segment, ClassifyCfg,
    Face, Location, Plane3, Tet, TetError, TriangleHit, EPS,
};
// Lattice sweeps
#[cfg(feature = "parallel")]
pub use crate::lattice::par_tally;
pub use crate::lattice::{
    sweep, tally, tally_nested, Bounds3, Lattice, LatticeCounts, LatticeError, LatticeSample,
};
// Reeve tetrahedra
pub use crate::reeve::{
    count_dilate, ehrhart_reeve, ehrhart_reeve_interior, reeve_counts, reeve_dilate,
    reeve_tetrahedron, reeve_volume, reeve_volume_exact, reeve_volume_from_counts, ReeveCheck,
    ReeveError,
};
// Random tetrahedra
pub use crate::rand3::{draw_barycentric_point, draw_tetrahedron, ReplayToken, TetDrawCfg};

use nalgebra::Vector3;

/// Classify a batch of points against one tetrahedron.
pub fn classify_many(tet: &Tet, points: &[Vector3<f64>], cfg: ClassifyCfg) -> Vec<Location> {
    points.iter().map(|&p| tet.classify_with(p, cfg)).collect()
}
