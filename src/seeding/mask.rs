//! 1-bit shape masks built from matrices or rasterized text

use bitvec::prelude::*;
use ndarray::Array2;
use rusttype::{Scale, point};

use crate::io::configuration::{COVERAGE_THRESHOLD, LINE_SPACING};
use crate::io::error::{Result, invalid_parameter};
use crate::seeding::font::FontHandle;

/// Off-screen 1-bit canvas
///
/// Pixels are stored row-major; `(x, y)` with `x` across and `y` down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl ShapeMask {
    /// Create a mask with no pixels set
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Build a mask from a matrix indexed `[row, column]`; non-zero entries are set
    pub fn from_matrix(matrix: &Array2<u8>) -> Self {
        let (rows, cols) = matrix.dim();
        let mut mask = Self::new(cols, rows);
        for ((row, col), &value) in matrix.indexed_iter() {
            if value != 0 {
                mask.set(col, row, true);
            }
        }
        mask
    }

    /// Build a padded mask from pixel coordinates
    ///
    /// The content box spans from the origin (or the leftmost/topmost pixel,
    /// if negative) to the furthest pixel. The canvas adds `padding` on every
    /// side and the content is drawn at `(padding, padding)`.
    pub fn from_pixels(pixels: &[[i32; 2]], padding: usize) -> Self {
        let min_x = pixels.iter().map(|p| p[0]).min().unwrap_or(0).min(0);
        let min_y = pixels.iter().map(|p| p[1]).min().unwrap_or(0).min(0);
        let right = pixels.iter().map(|p| p[0] - min_x + 1).max().unwrap_or(0) as usize;
        let bottom = pixels.iter().map(|p| p[1] - min_y + 1).max().unwrap_or(0) as usize;

        let mut mask = Self::new(right + 2 * padding, bottom + 2 * padding);
        for &[x, y] in pixels {
            mask.set(
                (x - min_x) as usize + padding,
                (y - min_y) as usize + padding,
                true,
            );
        }
        mask
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Read a pixel; anything outside the canvas reads as unset
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && self.bits.get(y * self.width + x).as_deref() == Some(&true)
    }

    /// Write a pixel; writes outside the canvas are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x < self.width && y < self.height {
            self.bits.set(y * self.width + x, value);
        }
    }

    /// Coordinates of every set pixel, row by row
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width.max(1);
        self.bits
            .iter_ones()
            .map(move |index| (index % width, index / width))
    }

    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.bits.count_ones()
    }
}

/// Rasterize centered lines of text into a padded 1-bit mask
///
/// The canvas is the content's pixel bounding box plus `2 * padding` on each
/// axis, with the content drawn at `(padding, padding)`. A pixel is set when
/// the glyph covers at least half of it.
///
/// # Errors
///
/// Returns `InvalidParameter` if the lines contain no visible pixels
pub fn rasterize_text<S: AsRef<str>>(
    font: &FontHandle,
    lines: &[S],
    size: f32,
    padding: usize,
) -> Result<ShapeMask> {
    let scale = Scale::uniform(size);
    let v_metrics = font.font().v_metrics(scale);
    let line_pitch = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap + LINE_SPACING;

    let widths: Vec<f32> = lines
        .iter()
        .map(|line| line_width(font, line.as_ref(), scale))
        .collect();
    let widest = widths.iter().copied().fold(0.0_f32, f32::max);

    let mut pixels = Vec::new();
    for (index, (line, width)) in lines.iter().zip(&widths).enumerate() {
        let origin = point(
            (widest - width) / 2.0,
            (index as f32).mul_add(line_pitch, v_metrics.ascent),
        );
        for glyph in font.font().layout(line.as_ref(), scale, origin) {
            if let Some(bounds) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    if coverage >= COVERAGE_THRESHOLD {
                        pixels.push([bounds.min.x + gx as i32, bounds.min.y + gy as i32]);
                    }
                });
            }
        }
    }

    let text = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    if pixels.is_empty() {
        return Err(invalid_parameter(
            "text",
            &text,
            &"nothing visible to rasterize",
        ));
    }

    let mask = ShapeMask::from_pixels(&pixels, padding);
    tracing::debug!(
        "text {text:?} bounding box {}x{} at {size}px, padding {padding}",
        mask.width() - 2 * padding,
        mask.height() - 2 * padding
    );
    Ok(mask)
}

fn line_width(font: &FontHandle, line: &str, scale: Scale) -> f32 {
    font.font()
        .layout(line, scale, point(0.0, 0.0))
        .last()
        .map_or(0.0, |glyph| {
            glyph.position().x + glyph.unpositioned().h_metrics().advance_width
        })
}
