//! Randomized spanning-tree maze generation around text, glyph and bitmap shapes
//!
//! A maze starts as a sparse grid of walled cells. Optional seeding marks cells
//! covered by a rasterized shape as solid, an iterative depth-first search then
//! carves a spanning tree through every other cell, and the renderer turns the
//! result into an RGB image or a boolean mask.

#![forbid(unsafe_code)]

/// Maze generation and structural checks
pub mod algorithm;
/// Command layer, configuration and error handling
pub mod io;
/// Image and mask rendering
pub mod render;
/// Solid-cell seeding from masks, text and glyphs
pub mod seeding;
/// Grid and cell data structures
pub mod spatial;

pub use algorithm::MazeMaker;
pub use io::error::{MazeError, Result};
