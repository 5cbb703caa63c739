//! Turning a finished grid into pixels

/// Full-color rendering
pub mod image;
/// Boolean occupancy mask
pub mod mask;
/// Rectangle and polygon fills shared by both renderers
pub mod primitives;

pub use self::image::render_image;
pub use mask::render_mask;
