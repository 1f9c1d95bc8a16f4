//! Hazard placement and spawn selection
//!
//! Every placement draws from a freshly rebuilt candidate list, so two
//! hazards of one category never share a tile. Categories are independent:
//! the wumpus is placed on any cave, even one already holding a pit or bat.

use crate::consts::{BAT_COUNT, PIT_COUNT, WUMPUS_COUNT};
use crate::error::PlacementError;
use crate::rng::UniformRng;

use super::direction::Direction;
use super::grid::TileGraph;
use super::tile::{Hazards, Tile};
use super::topology::Position;

/// Place pits, bats and the wumpus, then choose a safe spawn
///
/// Fails with [`PlacementError::NoSafeSpawn`] when every cave is hazardous
/// or next to a hazard; the caller is expected to rebuild the grid.
pub fn place_hazards(
    grid: &mut TileGraph,
    rng: &mut impl UniformRng,
) -> Result<Position, PlacementError> {
    for _ in 0..PIT_COUNT {
        place_one(grid, rng, Hazards::PIT, |tile| {
            tile.is_cave && !tile.hazards.contains(Hazards::PIT)
        })?;
    }

    for _ in 0..BAT_COUNT {
        place_one(grid, rng, Hazards::BAT, |tile| {
            !tile.hazards.contains(Hazards::BAT)
        })?;
    }

    for _ in 0..WUMPUS_COUNT {
        place_one(grid, rng, Hazards::WUMPUS, |tile| tile.is_cave)?;
    }

    choose_spawn(grid, rng)
}

fn place_one(
    grid: &mut TileGraph,
    rng: &mut impl UniformRng,
    hazard: Hazards,
    eligible: impl Fn(&Tile) -> bool,
) -> Result<Position, PlacementError> {
    let candidates = grid.positions_where(eligible);
    let &pos = rng
        .pick(&candidates)
        .ok_or(PlacementError::NoCandidates { hazard })?;

    grid.add_hazard(pos, hazard);
    log::info!("placed {} at {pos}", hazard_name(hazard));
    Ok(pos)
}

/// Flag name for log lines
fn hazard_name(hazard: Hazards) -> &'static str {
    hazard.iter_names().next().map_or("NONE", |(name, _)| name)
}

/// A hazard-free cave whose open neighbours are all hazard-free
pub fn is_safe_spawn(grid: &TileGraph, pos: Position) -> bool {
    let tile = grid.tile(pos);
    tile.is_cave
        && !tile.has_hazard()
        && Direction::ALL
            .into_iter()
            .filter(|&dir| tile.is_open(dir))
            .all(|dir| !grid.neighbor_tile(pos, dir).has_hazard())
}

/// Every safe spawn tile, column by column
pub fn spawn_candidates(grid: &TileGraph) -> Vec<Position> {
    grid.positions()
        .filter(|&pos| is_safe_spawn(grid, pos))
        .collect()
}

fn choose_spawn(grid: &TileGraph, rng: &mut impl UniformRng) -> Result<Position, PlacementError> {
    let candidates = spawn_candidates(grid);
    let &spawn = rng.pick(&candidates).ok_or(PlacementError::NoSafeSpawn)?;
    log::info!("placed player at {spawn}");
    Ok(spawn)
}
