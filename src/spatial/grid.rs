//! Sparse cell grid with a bounded carve-able interior
//!
//! Cells are stored in a hash map keyed by `[x, y]` and only materialized when
//! first written. The interior spans `[1, width] × [1, height]`; coordinate 0 and
//! anything past the far edge form the reserved border. The grid itself never
//! enforces bounds, callers decide what an out-of-interior coordinate means.

use std::collections::HashMap;

use crate::spatial::cell::{Cell, Direction};

/// Axis-aligned bounding box in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates as `[x, y]` (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates as `[x, y]` (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: [i32; 2]) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }
}

/// Lazily materialized mapping from coordinate to cell state
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: HashMap<[i32; 2], Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an empty grid with the given interior size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: HashMap::new(),
            width,
            height,
        }
    }

    /// Interior width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Interior height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Interior dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The carve-able interior as a bounding box
    pub const fn interior(&self) -> BoundingBox {
        BoundingBox {
            min: [1, 1],
            max: [self.width as i32, self.height as i32],
        }
    }

    /// Check whether a coordinate lies inside `[1, width] × [1, height]`
    pub const fn in_interior(&self, pos: [i32; 2]) -> bool {
        self.interior().contains(pos)
    }

    /// Return the cell at `pos`, creating a default cell if absent
    pub fn get_or_create(&mut self, pos: [i32; 2]) -> &mut Cell {
        self.cells.entry(pos).or_default()
    }

    /// Read the cell at `pos` without materializing it
    pub fn get(&self, pos: [i32; 2]) -> Cell {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    /// Whether a cell has been materialized at `pos`
    pub fn is_materialized(&self, pos: [i32; 2]) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Permanently block the cell at `pos`
    pub fn mark_blocked(&mut self, pos: [i32; 2]) {
        let cell = self.get_or_create(pos);
        cell.solid = true;
        cell.visited = true;
    }

    /// Mark the cell at `pos` as claimed by generation
    pub fn mark_visited(&mut self, pos: [i32; 2]) {
        self.get_or_create(pos).visited = true;
    }

    /// Open the passage between `from` and its neighbor in `direction`
    ///
    /// Both sides of the shared wall are cleared together. Returns the
    /// neighbor's coordinate.
    pub fn carve(&mut self, from: [i32; 2], direction: Direction) -> [i32; 2] {
        let to = direction.step(from);
        self.get_or_create(from).clear_wall(direction);
        self.get_or_create(to).clear_wall(direction.opposite());
        to
    }

    /// All interior coordinates in column-major order
    pub fn interior_positions(&self) -> impl Iterator<Item = [i32; 2]> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (1..=width).flat_map(move |x| (1..=height).map(move |y| [x, y]))
    }

    /// Number of solid cells inside the interior
    pub fn solid_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|(pos, cell)| cell.solid && self.in_interior(**pos))
            .count()
    }
}
