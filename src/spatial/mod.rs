//! Spatial partitioning for the broad phase.

pub mod hash;

pub use hash::{CellKey, SpatialHash};
