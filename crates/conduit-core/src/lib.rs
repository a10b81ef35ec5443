//! **conduit-core**: geometry shared across the *conduit* crates.
//!
//! Cells of a voxel-style world are addressed by [`Pos3`]; the six faces of a
//! cell are [`Facing`]; axis-aligned boxes of cells are [`Region`]s.

pub mod geom;

pub use geom::{Facing, Pos3, Region, RegionIter};
