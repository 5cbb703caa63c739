//! Pre-marking grid cells as solid from masks, text and glyphs

use crate::io::configuration::{GLYPH_FONT_SIZE, MAX_TEXT_LINES, TEXT_FONT_SIZE};
use crate::io::error::{MazeError, Result, invalid_parameter, resource_unavailable};
use crate::seeding::font::FontLibrary;
use crate::seeding::mask::{ShapeMask, rasterize_text};
use crate::spatial::Grid;

/// What to do with shape pixels that land outside a pre-sized grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail with `OutOfBounds` before touching any cell
    #[default]
    Reject,
    /// Drop pixels outside the interior
    Clip,
}

/// Mark every set mask pixel as a solid cell of a caller-sized grid
///
/// Mask pixel `(px, py)` lands on cell `(px + offset[0] + 1, py + offset[1] + 1)`.
/// Returns the number of cells marked.
///
/// # Errors
///
/// Returns `OutOfBounds` under `OverflowPolicy::Reject` if any set pixel falls
/// outside the grid interior; the grid is left untouched in that case
pub fn apply_shape(
    grid: &mut Grid,
    mask: &ShapeMask,
    offset: [i32; 2],
    policy: OverflowPolicy,
) -> Result<usize> {
    let targets: Vec<[i32; 2]> = mask
        .iter_set()
        .map(|(px, py)| [px as i32 + offset[0] + 1, py as i32 + offset[1] + 1])
        .collect();

    if policy == OverflowPolicy::Reject
        && let Some(&position) = targets.iter().find(|&&pos| !grid.in_interior(pos))
    {
        return Err(MazeError::OutOfBounds {
            position,
            dimensions: grid.dimensions(),
        });
    }

    let mut marked = 0;
    for pos in targets {
        if grid.in_interior(pos) {
            grid.mark_blocked(pos);
            marked += 1;
        }
    }
    tracing::debug!("seeded {marked} solid cells at offset {offset:?}");
    Ok(marked)
}

/// Build a grid sized to the mask and mark its set pixels solid
pub fn grid_from_mask(mask: &ShapeMask) -> Grid {
    let mut grid = Grid::new(mask.width(), mask.height());
    for (px, py) in mask.iter_set() {
        grid.mark_blocked([px as i32 + 1, py as i32 + 1]);
    }
    grid
}

/// Seed a fresh grid from up to three lines of text
///
/// Lines beyond the third are dropped. The grid size is the text's pixel
/// bounding box plus `2 * padding` on each axis.
///
/// # Errors
///
/// Returns an error if:
/// - No text font is loaded (`ResourceUnavailable`)
/// - The text is empty or renders no pixels (`InvalidParameter`)
pub fn seed_from_text<S: AsRef<str>>(
    fonts: &FontLibrary,
    lines: &[S],
    padding: usize,
) -> Result<(Grid, ShapeMask)> {
    let font = fonts.text()?;
    let lines: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .take(MAX_TEXT_LINES)
        .collect();
    if lines.iter().all(|line| line.trim().is_empty()) {
        return Err(invalid_parameter("text", &lines.join(" "), &"text is empty"));
    }

    let mask = rasterize_text(font, &lines, TEXT_FONT_SIZE, padding)?;
    Ok((grid_from_mask(&mask), mask))
}

/// Seed a fresh grid from the first character of `text`
///
/// # Errors
///
/// Returns an error if:
/// - No glyph font is loaded, or the font lacks the glyph (`ResourceUnavailable`)
/// - `text` is empty (`InvalidParameter`)
pub fn seed_from_glyph(
    fonts: &FontLibrary,
    text: &str,
    padding: usize,
) -> Result<(Grid, ShapeMask)> {
    let font = fonts.glyph()?;
    let glyph = text
        .chars()
        .next()
        .ok_or_else(|| invalid_parameter("glyph", &text, &"no character given"))?;
    if !font.has_glyph(glyph) {
        return Err(resource_unavailable(
            &format!("glyph {glyph:?}"),
            &format!("not present in {}", font.path().display()),
        ));
    }

    let mask = rasterize_text(font, &[glyph.to_string()], GLYPH_FONT_SIZE, padding)?;
    Ok((grid_from_mask(&mask), mask))
}
