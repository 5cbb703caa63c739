//! Grid and cell data structures
//!
//! This module contains the maze's spatial model:
//! - Cell state and wall directions
//! - The sparse, lazily materialized grid

/// Cell state and wall directions
pub mod cell;
/// Sparse grid keyed by coordinate
pub mod grid;

pub use cell::{Cell, Direction};
pub use grid::Grid;
