//! Map tiles
//!
//! A tile is either a cave (room) or a corridor segment. Its four sides are
//! open or closed; the grid keeps both ends of every side in agreement.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

bitflags! {
    /// Open sides of a tile
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Connections: u8 {
        const NORTH = 0x01;
        const EAST = 0x02;
        const SOUTH = 0x04;
        const WEST = 0x08;
        const VERTICAL = Self::NORTH.bits() | Self::SOUTH.bits();
        const HORIZONTAL = Self::EAST.bits() | Self::WEST.bits();
    }
}

bitflags! {
    /// Hazards occupying a tile
    ///
    /// Categories may overlap on one tile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Hazards: u8 {
        const PIT = 0x01;
        const BAT = 0x02;
        const WUMPUS = 0x04;
    }
}

// Manual serde impls for the flag sets
impl Serialize for Connections {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Connections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Connections::from_bits_truncate(bits))
    }
}

impl Serialize for Hazards {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hazards {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Hazards::from_bits_truncate(bits))
    }
}

/// A single map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub x: usize,
    pub y: usize,

    /// Room (true) or corridor segment (false)
    pub is_cave: bool,

    /// Open sides. Only [`super::TileGraph`] writes these.
    pub(crate) connections: Connections,

    pub hazards: Hazards,
}

impl Tile {
    /// Fully open cave, the starting state of every tile
    pub const fn open_cave(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            is_cave: true,
            connections: Connections::all(),
            hazards: Hazards::empty(),
        }
    }

    pub const fn connections(&self) -> Connections {
        self.connections
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        self.connections.contains(dir.flag())
    }

    pub fn open_count(&self) -> u32 {
        self.connections.bits().count_ones()
    }

    /// Closed sides in canonical N, E, S, W order
    pub fn closed_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| !self.is_open(dir))
            .collect()
    }

    /// Open sides in canonical N, E, S, W order
    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_open(dir))
            .collect()
    }

    /// Shape rule: caves miss at most one side, corridors are 90° elbows
    pub fn has_valid_shape(&self) -> bool {
        if self.is_cave {
            return self.open_count() >= 3;
        }
        let vertical = self.connections & Connections::VERTICAL;
        let horizontal = self.connections & Connections::HORIZONTAL;
        vertical.bits().count_ones() == 1 && horizontal.bits().count_ones() == 1
    }

    pub fn has_hazard(&self) -> bool {
        !self.hazards.is_empty()
    }
}
