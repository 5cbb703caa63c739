//! Rectangle and polygon fills on image buffers

use image::{ImageBuffer, Pixel};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Cell, Direction};

/// Inclusive pixel rectangle as `(min, max)` corners `[x, y]`
pub type PixelRect = ([i64; 2], [i64; 2]);

/// Pixel size of a `width × height` grid at `cell_size`
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero or the result overflows `u32`
pub fn canvas_size(width: usize, height: usize, cell_size: u32) -> Result<(u32, u32)> {
    if cell_size == 0 {
        return Err(invalid_parameter("cell_size", &cell_size, &"must be positive"));
    }
    let scale = |cells: usize, parameter: &'static str| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_size))
            .ok_or_else(|| invalid_parameter(parameter, &cells, &"image would be too large"))
    };
    Ok((scale(width, "width")?, scale(height, "height")?))
}

/// Pixel regions a cell contributes to the open floor
///
/// The cell's interior (unless solid) and, for each removed wall, the two
/// border pixels on that side so passages join their neighbors. `origin` is
/// the cell's top-left pixel.
pub fn open_regions(cell: &Cell, origin: [i64; 2], cell_size: u32) -> Vec<PixelRect> {
    let [x, y] = origin;
    let cs = i64::from(cell_size);
    let mut regions = Vec::with_capacity(5);

    if !cell.solid {
        regions.push(([x + 1, y + 1], [x + cs - 2, y + cs - 2]));
    }
    for direction in Direction::ALL {
        if cell.has_wall(direction) {
            continue;
        }
        regions.push(match direction {
            Direction::West => ([x, y + 1], [x + 1, y + cs - 2]),
            Direction::East => ([x + cs - 2, y + 1], [x + cs - 1, y + cs - 2]),
            Direction::North => ([x + 1, y], [x + cs - 2, y + 1]),
            Direction::South => ([x + 1, y + cs - 2], [x + cs - 2, y + cs - 1]),
        });
    }
    regions
}

/// Fill an inclusive rectangle, clipped to the image
pub fn fill_rect<P: Pixel>(
    img: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    (min, max): PixelRect,
    color: P,
) {
    let (width, height) = (i64::from(img.width()), i64::from(img.height()));
    let x_range = min[0].max(0)..=max[0].min(width - 1);
    let y_range = min[1].max(0)..=max[1].min(height - 1);
    for py in y_range {
        for px in x_range.clone() {
            img.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Vertices of a regular polygon
///
/// The first vertex sits at `rotation` degrees, measured clockwise from the +x
/// axis in image coordinates (so -90 points up).
pub fn regular_polygon(center: [f64; 2], radius: f64, sides: usize, rotation: f64) -> Vec<[f64; 2]> {
    let step = 360.0 / sides.max(3) as f64;
    (0..sides.max(3))
        .map(|k| {
            let angle = (k as f64).mul_add(step, rotation).to_radians();
            [
                radius.mul_add(angle.cos(), center[0]),
                radius.mul_add(angle.sin(), center[1]),
            ]
        })
        .collect()
}

/// Fill a convex polygon by testing pixel centers
pub fn fill_convex_polygon<P: Pixel>(
    img: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    vertices: &[[f64; 2]],
    color: P,
) {
    if vertices.len() < 3 {
        return;
    }
    let min_x = vertices.iter().map(|v| v[0]).fold(f64::INFINITY, f64::min);
    let max_x = vertices.iter().map(|v| v[0]).fold(f64::NEG_INFINITY, f64::max);
    let min_y = vertices.iter().map(|v| v[1]).fold(f64::INFINITY, f64::min);
    let max_y = vertices.iter().map(|v| v[1]).fold(f64::NEG_INFINITY, f64::max);

    let x_start = min_x.floor().max(0.0) as u32;
    let y_start = min_y.floor().max(0.0) as u32;
    let x_end = (max_x.ceil().max(0.0) as u32).min(img.width());
    let y_end = (max_y.ceil().max(0.0) as u32).min(img.height());

    for py in y_start..y_end {
        for px in x_start..x_end {
            if contains_point(vertices, [f64::from(px) + 0.5, f64::from(py) + 0.5]) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

// Inside when the point is on the same side of every edge
fn contains_point(vertices: &[[f64; 2]], point: [f64; 2]) -> bool {
    let mut positive = false;
    let mut negative = false;
    for (index, a) in vertices.iter().enumerate() {
        let Some(b) = vertices.get((index + 1) % vertices.len()) else {
            continue;
        };
        let cross = (b[0] - a[0]).mul_add(point[1] - a[1], -((b[1] - a[1]) * (point[0] - a[0])));
        positive |= cross > 0.0;
        negative |= cross < 0.0;
    }
    !(positive && negative)
}
