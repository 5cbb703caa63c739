//! Boolean occupancy mask for compositing

use image::{GrayImage, Luma};
use rand::Rng;

use crate::algorithm::MazeMaker;
use crate::io::configuration::MASK_OPEN;
use crate::io::error::Result;
use crate::render::primitives::{canvas_size, fill_rect, open_regions};

/// Render the open floor as a mask: 255 where passable, 0 elsewhere
///
/// Same pixel layout as `render_image`, without markers.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero or the image would be too large
pub fn render_mask<R: Rng>(maker: &mut MazeMaker<R>, cell_size: u32) -> Result<GrayImage> {
    let (pixel_width, pixel_height) = canvas_size(maker.width(), maker.height(), cell_size)?;
    let grid = maker.materialize()?;

    let mut mask = GrayImage::new(pixel_width, pixel_height);
    let cs = i64::from(cell_size);
    for pos in grid.interior_positions() {
        let origin = [i64::from(pos[0] - 1) * cs, i64::from(pos[1] - 1) * cs];
        for region in open_regions(&grid.get(pos), origin, cell_size) {
            fill_rect(&mut mask, region, Luma([MASK_OPEN]));
        }
    }
    Ok(mask)
}

/// Whether a mask pixel is open floor
pub fn is_open(mask: &GrayImage, x: u32, y: u32) -> bool {
    mask.get_pixel_checked(x, y)
        .is_some_and(|pixel| pixel.0 == [MASK_OPEN])
}
