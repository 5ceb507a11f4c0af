//! 3D tetrahedra and point classification (Interior / Boundary / Outside).
//!
//! Purpose
//! - Classify arbitrary points against a tetrahedron given by four vertices.
//!   Lattice sweeps call this once per candidate point, so it stays small,
//!   allocation-free and stateless.
//!
//! Conventions
//! - Faces are ABC, ABD, ACD, BCD; planes use unit normals oriented toward
//!   the centroid, anchored at A (first three faces) or B (BCD).
//! - One tolerance (`cfg::EPS = 1e-9`) for every zero test; callers at other
//!   coordinate scales pass a scaled `ClassifyCfg`.
//! - Coplanar vertices are outside the contract: the result is unspecified,
//!   but classification never panics.

pub mod cfg;
mod classifier;
pub mod predicates;
mod types;

pub use cfg::{ClassifyCfg, EPS};
pub use classifier::{classify, classify_with};
pub use predicates::{point_at_vertex, point_in_triangle, point_on_segment, TriangleHit};
pub use types::{Face, Location, Plane3, Tet, TetError};

#[cfg(test)]
mod tests;
