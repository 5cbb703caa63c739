//! Structural checks over a carved grid
//!
//! Used for summary text and to verify the spanning-tree guarantees: passage
//! counts, reachability through open walls, and cycle detection.

use std::collections::{HashSet, VecDeque};

use crate::spatial::{Direction, Grid};

/// Number of carved passages inside the interior
///
/// Each passage is counted once, from its western or northern cell.
pub fn passage_count(grid: &Grid) -> usize {
    grid.interior_positions()
        .map(|pos| {
            let cell = grid.get(pos);
            [Direction::East, Direction::South]
                .iter()
                .filter(|&&direction| {
                    !cell.has_wall(direction) && grid.in_interior(direction.step(pos))
                })
                .count()
        })
        .sum()
}

/// Cells reachable from `start` moving only through open walls
pub fn reachable_from(grid: &Grid, start: [i32; 2]) -> HashSet<[i32; 2]> {
    let mut seen = HashSet::new();
    if !grid.in_interior(start) {
        return seen;
    }

    let mut queue = VecDeque::from([start]);
    seen.insert(start);
    while let Some(pos) = queue.pop_front() {
        let cell = grid.get(pos);
        for direction in Direction::ALL {
            let next = direction.step(pos);
            if !cell.has_wall(direction) && grid.in_interior(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Check that every open wall has a matching open wall on the other side
pub fn walls_symmetric(grid: &Grid) -> bool {
    grid.interior_positions().all(|pos| {
        let cell = grid.get(pos);
        Direction::ALL.iter().all(|&direction| {
            let neighbor = direction.step(pos);
            !grid.in_interior(neighbor)
                || cell.has_wall(direction) == grid.get(neighbor).has_wall(direction.opposite())
        })
    })
}

/// Check that the passage graph has no cycles
///
/// A forest has exactly one fewer passage than cells in each connected
/// component, so the check compares totals across components.
pub fn is_acyclic(grid: &Grid) -> bool {
    let mut assigned: HashSet<[i32; 2]> = HashSet::new();
    let mut tree_edges = 0;
    for pos in grid.interior_positions() {
        if assigned.contains(&pos) {
            continue;
        }
        let component = reachable_from(grid, pos);
        tree_edges += component.len() - 1;
        assigned.extend(component);
    }
    passage_count(grid) == tree_edges
}

/// Summary of a finished maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeSummary {
    /// Interior dimensions (width, height)
    pub dimensions: (usize, usize),
    /// Solid cells inside the interior
    pub solid_cells: usize,
    /// Carved passages
    pub passages: usize,
    /// Cells reachable from the top-left cell
    pub reachable_from_start: usize,
}

impl MazeSummary {
    /// Summarize a grid
    pub fn of(grid: &Grid) -> Self {
        Self {
            dimensions: grid.dimensions(),
            solid_cells: grid.solid_count(),
            passages: passage_count(grid),
            reachable_from_start: reachable_from(grid, crate::io::configuration::START_CELL)
                .len(),
        }
    }
}
