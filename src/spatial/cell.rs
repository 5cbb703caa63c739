//! Single maze cell with solid/visited flags and four walls

use std::fmt;

/// Axis-aligned direction between neighboring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards `y - 1`
    North,
    /// Towards `y + 1`
    South,
    /// Towards `x + 1`
    East,
    /// Towards `x - 1`
    West,
}

impl Direction {
    /// All directions in neighbor scan order (west, east, north, south)
    pub const ALL: [Self; 4] = [Self::West, Self::East, Self::North, Self::South];

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Unit offset as `[dx, dy]`
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::North => [0, -1],
            Self::South => [0, 1],
            Self::East => [1, 0],
            Self::West => [-1, 0],
        }
    }

    /// Coordinate one step away from `position`
    pub const fn step(self, position: [i32; 2]) -> [i32; 2] {
        let [dx, dy] = self.offset();
        [position[0] + dx, position[1] + dy]
    }

    /// Direction from `from` to an adjacent `to`, if they are adjacent
    pub const fn between(from: [i32; 2], to: [i32; 2]) -> Option<Self> {
        match (to[0] - from[0], to[1] - from[1]) {
            (-1, 0) => Some(Self::West),
            (1, 0) => Some(Self::East),
            (0, -1) => Some(Self::North),
            (0, 1) => Some(Self::South),
            _ => None,
        }
    }
}

/// One grid position
///
/// A fresh cell is open ground that generation has not reached yet: not solid,
/// not visited, every wall standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Permanently blocked, never entered by generation
    pub solid: bool,
    /// Claimed by generation or pre-seeded as solid
    pub visited: bool,
    /// Wall towards `y - 1`
    pub north: bool,
    /// Wall towards `y + 1`
    pub south: bool,
    /// Wall towards `x + 1`
    pub east: bool,
    /// Wall towards `x - 1`
    pub west: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Unvisited cell with all four walls
    pub const fn new() -> Self {
        Self {
            solid: false,
            visited: false,
            north: true,
            south: true,
            east: true,
            west: true,
        }
    }

    /// Whether the wall in `direction` is standing
    pub const fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Remove the wall in `direction`
    ///
    /// Only one side of a passage; use `Grid::carve` to keep walls symmetric.
    pub const fn clear_wall(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = false,
            Direction::South => self.south = false,
            Direction::East => self.east = false,
            Direction::West => self.west = false,
        }
    }

    /// Number of walls removed from this cell
    pub fn open_sides(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| !self.has_wall(direction))
            .count()
    }

    /// Wall bitmask: west = 1, east = 2, north = 4, south = 8
    pub fn wall_bits(&self) -> u8 {
        [
            (self.west, 1),
            (self.east, 2),
            (self.north, 4),
            (self.south, 8),
        ]
        .iter()
        .filter(|(wall, _)| *wall)
        .map(|(_, bit)| bit)
        .sum()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.wall_bits())
    }
}
