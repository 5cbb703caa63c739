//! Full-color maze rendering with start and goal markers

use image::{Rgb, RgbImage};
use rand::Rng;

use crate::algorithm::MazeMaker;
use crate::io::configuration::{FLOOR_CHANNEL_MIN, GOAL_COLOR, MARKER_SIDES, START_COLOR};
use crate::io::error::Result;
use crate::render::primitives::{
    canvas_size, fill_convex_polygon, fill_rect, open_regions, regular_polygon,
};

/// Pick one floor color for a whole render, each channel in `128..=255`
pub fn random_floor_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    Rgb([
        rng.random_range(FLOOR_CHANNEL_MIN..=u8::MAX),
        rng.random_range(FLOOR_CHANNEL_MIN..=u8::MAX),
        rng.random_range(FLOOR_CHANNEL_MIN..=u8::MAX),
    ])
}

/// Render the maze as an RGB image of `width·cell_size × height·cell_size`
///
/// Any cells not yet generated are generated first. Walls and solid cells stay
/// black; the start marker sits on the top-left cell and the goal marker on the
/// bottom-right cell.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero or the image would be too large
pub fn render_image<R: Rng>(maker: &mut MazeMaker<R>, cell_size: u32) -> Result<RgbImage> {
    let (pixel_width, pixel_height) = canvas_size(maker.width(), maker.height(), cell_size)?;
    let floor = random_floor_color(maker.rng_mut());
    let grid = maker.materialize()?;

    let mut img = RgbImage::new(pixel_width, pixel_height);
    let cs = i64::from(cell_size);
    for pos in grid.interior_positions() {
        let cell = grid.get(pos);
        let origin = [i64::from(pos[0] - 1) * cs, i64::from(pos[1] - 1) * cs];
        for region in open_regions(&cell, origin, cell_size) {
            fill_rect(&mut img, region, floor);
        }
    }

    let half = f64::from(cell_size) / 2.0;
    let start = regular_polygon([half, half], half, MARKER_SIDES, -90.0);
    fill_convex_polygon(&mut img, &start, Rgb(START_COLOR));

    let goal_center = [f64::from(pixel_width) - half, f64::from(pixel_height) - half];
    let goal = regular_polygon(goal_center, half, MARKER_SIDES, 90.0);
    fill_convex_polygon(&mut img, &goal, Rgb(GOAL_COLOR));

    Ok(img)
}
