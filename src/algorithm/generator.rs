//! Randomized depth-first spanning-tree generation
//!
//! Carving walks an explicit stack instead of recursing, so stack depth is
//! bounded by heap memory rather than the call stack:
//! 1. Mark the start visited and push it
//! 2. While the stack is non-empty, collect the unvisited in-bounds neighbors
//!    of the current cell
//!    - None left: pop into current (backtrack)
//!    - Otherwise: pick one uniformly, carve the shared wall pair, mark it
//!      visited, push it and move there
//!
//! Solid cells are pre-marked visited, so they are never candidates.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::io::configuration::START_CELL;
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::{Cell, Direction, Grid};

/// Builds a maze over one grid with an injected random source
#[derive(Debug, Clone)]
pub struct MazeMaker<R: Rng = StdRng> {
    grid: Grid,
    rng: R,
}

impl MazeMaker<StdRng> {
    /// Maze maker with a reproducible generator
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn seeded(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::new(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeMaker<R> {
    /// Maze maker over an empty `width × height` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self> {
        Self::from_grid(Grid::new(width, height), rng)
    }

    /// Maze maker over a grid that may already carry solid cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either grid dimension is zero
    pub fn from_grid(grid: Grid, rng: R) -> Result<Self> {
        if grid.width() == 0 {
            return Err(invalid_parameter("width", &0, &"must be positive"));
        }
        if grid.height() == 0 {
            return Err(invalid_parameter("height", &0, &"must be positive"));
        }
        Ok(Self { grid, rng })
    }

    /// The grid being carved
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid, for seeding before generation
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The random source, shared with the renderer for floor colors
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Interior width in cells
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Interior height in cells
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Hand back the grid once generation is done
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Generate from the top-left interior cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidStart` if the top-left cell is solid
    pub fn generate(&mut self) -> Result<&mut Self> {
        self.generate_from(START_CELL)?;
        Ok(self)
    }

    /// Carve a spanning tree over every cell reachable from `start`
    ///
    /// Returns the number of passages carved.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStart` if `start` is solid or outside the interior
    pub fn generate_from(&mut self, start: [i32; 2]) -> Result<usize> {
        if !self.grid.in_interior(start) || self.grid.get(start).solid {
            return Err(MazeError::InvalidStart { position: start });
        }

        let mut carved = 0;
        let mut current = start;
        let mut stack = vec![start];
        self.grid.mark_visited(start);

        let mut candidates = Vec::with_capacity(Direction::ALL.len());
        while !stack.is_empty() {
            candidates.clear();
            candidates.extend(Direction::ALL.iter().copied().filter(|&direction| {
                let next = direction.step(current);
                self.grid.in_interior(next) && !self.grid.get(next).visited
            }));

            let Some(&direction) = candidates.choose(&mut self.rng) else {
                if let Some(previous) = stack.pop() {
                    current = previous;
                }
                continue;
            };

            let next = self.grid.carve(current, direction);
            self.grid.mark_visited(next);
            stack.push(next);
            current = next;
            carved += 1;
        }

        tracing::debug!("carved {carved} passages from ({}, {})", start[0], start[1]);
        Ok(carved)
    }

    /// Return the cell at `(x, y)`, generating around it first if unvisited
    ///
    /// Once a cell has been reached, later calls return the stored cell without
    /// carving again.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is outside the interior
    pub fn get_cell(&mut self, x: i32, y: i32) -> Result<Cell> {
        let pos = [x, y];
        if !self.grid.in_interior(pos) {
            return Err(MazeError::OutOfBounds {
                position: pos,
                dimensions: self.grid.dimensions(),
            });
        }
        if !self.grid.get(pos).visited {
            self.generate_from(pos)?;
        }
        Ok(self.grid.get(pos))
    }

    /// Ensure every interior cell has been generated
    ///
    /// Regions sealed off from the start by solid cells each get their own
    /// tree, starting from their first cell in column-major order.
    ///
    /// # Errors
    ///
    /// Propagates errors from `get_cell`; none occur for interior coordinates
    pub fn materialize(&mut self) -> Result<&Grid> {
        for [x, y] in self.grid.interior_positions() {
            self.get_cell(x, y)?;
        }
        Ok(&self.grid)
    }
}
