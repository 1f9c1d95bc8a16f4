//! The tile graph
//!
//! A flat, column-major array of tiles on a torus. Connections are edges;
//! [`TileGraph::set_connection`] is the only writer of connection flags and
//! always updates both endpoints, so a side is open from one tile exactly
//! when it is open from the neighbour across it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::tile::{Hazards, Tile};
use super::topology::{Position, Torus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGraph {
    torus: Torus,
    tiles: Vec<Tile>,
}

impl TileGraph {
    /// Fully connected torus lattice: every tile a cave open on all sides
    pub fn new(width: usize, height: usize) -> Self {
        let torus = Torus::new(width, height);
        let tiles = torus
            .positions()
            .map(|pos| Tile::open_cave(pos.x, pos.y))
            .collect();
        Self { torus, tiles }
    }

    /// Reset every tile to the starting lattice
    pub fn initialize(&mut self) {
        for (tile, pos) in self.tiles.iter_mut().zip(self.torus.positions()) {
            *tile = Tile::open_cave(pos.x, pos.y);
        }
    }

    pub fn width(&self) -> usize {
        self.torus.width
    }

    pub fn height(&self) -> usize {
        self.torus.height
    }

    pub fn torus(&self) -> Torus {
        self.torus
    }

    /// Every position, column by column
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        self.torus.positions()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        assert!(
            self.torus.contains(pos),
            "position ({pos}) outside {}x{} grid",
            self.torus.width,
            self.torus.height
        );
        pos.x * self.torus.height + pos.y
    }

    pub fn tile(&self, pos: Position) -> &Tile {
        &self.tiles[self.index(pos)]
    }

    pub fn neighbor(&self, pos: Position, dir: Direction) -> Position {
        self.torus.step(pos, dir)
    }

    pub fn neighbor_tile(&self, pos: Position, dir: Direction) -> &Tile {
        self.tile(self.neighbor(pos, dir))
    }

    pub fn is_open(&self, pos: Position, dir: Direction) -> bool {
        self.tile(pos).is_open(dir)
    }

    /// Open or close the side `dir` of `pos`, and the matching side of its
    /// neighbour
    pub fn set_connection(&mut self, pos: Position, dir: Direction, open: bool) {
        let here = self.index(pos);
        let there = self.index(self.neighbor(pos, dir));
        self.tiles[here].connections.set(dir.flag(), open);
        self.tiles[there].connections.set(dir.opposite().flag(), open);
    }

    pub fn connect(&mut self, pos: Position, dir: Direction) {
        self.set_connection(pos, dir, true);
    }

    pub fn disconnect(&mut self, pos: Position, dir: Direction) {
        self.set_connection(pos, dir, false);
    }

    pub fn set_cave(&mut self, pos: Position, is_cave: bool) {
        let i = self.index(pos);
        self.tiles[i].is_cave = is_cave;
    }

    pub fn add_hazard(&mut self, pos: Position, hazard: Hazards) {
        let i = self.index(pos);
        self.tiles[i].hazards.insert(hazard);
    }

    /// Closed sides of `pos` in canonical order
    pub fn closed_directions(&self, pos: Position) -> Vec<Direction> {
        self.tile(pos).closed_directions()
    }

    /// Positions whose tile satisfies `keep`, column by column
    pub fn positions_where(&self, keep: impl Fn(&Tile) -> bool) -> Vec<Position> {
        self.positions()
            .filter(|&pos| keep(self.tile(pos)))
            .collect()
    }

    /// Cave tiles in column `x`, top to bottom
    pub fn caves_in_column(&self, x: usize) -> Vec<Position> {
        (0..self.torus.height)
            .map(|y| Position::new(x, y))
            .filter(|&pos| self.tile(pos).is_cave)
            .collect()
    }

    pub fn hazard_positions(&self, hazard: Hazards) -> Vec<Position> {
        self.positions_where(|tile| tile.hazards.intersects(hazard))
    }

    pub fn cave_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_cave).count()
    }

    /// Sides whose two ends disagree; empty while the grid is consistent
    pub fn asymmetric_sides(&self) -> Vec<(Position, Direction)> {
        self.positions()
            .flat_map(|pos| Direction::ALL.into_iter().map(move |dir| (pos, dir)))
            .filter(|&(pos, dir)| {
                self.is_open(pos, dir) != self.neighbor_tile(pos, dir).is_open(dir.opposite())
            })
            .collect()
    }

    /// Tiles breaking the cave/corridor shape rule
    pub fn invalid_tiles(&self) -> Vec<Position> {
        self.positions_where(|tile| !tile.has_valid_shape())
    }

    /// Number of tiles reachable from `start` through open sides
    pub fn reachable_from(&self, start: Position) -> usize {
        let mut visited = vec![false; self.tiles.len()];
        let mut queue = VecDeque::from([start]);
        visited[self.index(start)] = true;
        let mut count = 0;

        while let Some(pos) = queue.pop_front() {
            count += 1;
            for dir in self.tile(pos).open_directions() {
                let next = self.neighbor(pos, dir);
                let i = self.index(next);
                if !visited[i] {
                    visited[i] = true;
                    queue.push_back(next);
                }
            }
        }

        count
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_from(Position::new(0, 0)) == self.tiles.len()
    }
}
