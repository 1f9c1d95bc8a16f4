//! Compass directions on the grid

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::UniformRng;

use super::tile::Connections;

/// One of the four orthogonal directions
///
/// The declaration order is the canonical N, E, S, W order used whenever a
/// list of directions feeds a random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }

    /// Unit step, with north pointing to smaller `y`
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Connection flag for this side of a tile
    pub const fn flag(self) -> Connections {
        match self {
            Direction::North => Connections::NORTH,
            Direction::East => Connections::EAST,
            Direction::South => Connections::SOUTH,
            Direction::West => Connections::WEST,
        }
    }

    /// Uniform draw over all four directions
    pub fn random(rng: &mut impl UniformRng) -> Self {
        Self::ALL[rng.uniform_int(0, Self::ALL.len() - 1)]
    }
}

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub const fn perpendicular(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// The two directions along this axis, coin-side first
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Vertical => [Direction::North, Direction::South],
            Axis::Horizontal => [Direction::East, Direction::West],
        }
    }

    /// Coin flip between the two directions of this axis
    pub fn pick(self, rng: &mut impl UniformRng) -> Direction {
        let [heads, tails] = self.directions();
        if rng.coin() { heads } else { tails }
    }
}
