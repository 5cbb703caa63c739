//! Shape seeding: turning bitmaps, text and glyphs into solid cells

/// Font handles shared read-only across requests
pub mod font;
/// 1-bit masks and text rasterization
pub mod mask;
/// Marking grid cells solid from masks
pub mod shape;

pub use font::{FontHandle, FontLibrary};
pub use mask::ShapeMask;
pub use shape::OverflowPolicy;
