//! Reeve tetrahedra: point classification and lattice-point counting.
//!
//! Layout
//! - `geom3`: tetrahedra, face planes, boundary predicates and the
//!   Interior / Boundary / Outside classifier.
//! - `lattice`: sweeps over `Z_n = (1/n)·Z³` with location tallies.
//! - `reeve`: `T_r`, its dilates, Ehrhart values and Reeve's volume formula.
//! - `rand3`: reproducible random tetrahedra for tests and benches.
//!
//! API Policy
//! - Workspace-internal crate; the CLI is the only consumer. Prefer the
//!   re-exports in `api` or `prelude` over deep paths.

pub mod api;
pub mod geom3;
pub mod lattice;
pub mod rand3;
pub mod reeve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::{classify, ClassifyCfg, Location, Tet};
pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom3::{classify, classify_with, ClassifyCfg, Location, Tet, EPS};
    pub use crate::lattice::{sweep, tally, tally_nested, Bounds3, Lattice, LatticeCounts};
    pub use crate::reeve::{ehrhart_reeve, reeve_dilate, reeve_tetrahedron, ReeveCheck};
    pub use nalgebra::Vector3 as Vec3;
}
