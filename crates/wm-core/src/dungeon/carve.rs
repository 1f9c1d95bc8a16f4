//! Corridor carving
//!
//! Each column seeds short chains of elbow-shaped corridors:
//! 1. Draw a stretch length in `1..=max_path_len`
//! 2. Start from a random cave tile in the column
//! 3. Step into a neighbour, turn it into a corridor and bend it 90°
//!
//! Carving leaves some tiles misshapen; [`super::repair`] fixes them.

use crate::config::MapConfig;
use crate::rng::UniformRng;

use super::direction::Direction;
use super::grid::TileGraph;
use super::topology::Position;

/// What a carving pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveSummary {
    /// Stretches started
    pub stretches: usize,
    /// Carving steps taken (a tile may be carved more than once)
    pub steps: usize,
    /// Stretches dropped because their column had no caves left
    pub skipped: usize,
}

/// Carve corridor stretches across every column
pub fn carve_paths(
    grid: &mut TileGraph,
    config: &MapConfig,
    rng: &mut impl UniformRng,
) -> CarveSummary {
    let mut summary = CarveSummary::default();
    let mut x = 0;

    while x < grid.width() {
        let mut last_len = 0;

        for _ in 0..config.paths_per_column {
            let len = rng.uniform_int(1, config.max_path_len);
            last_len = len;

            let caves = grid.caves_in_column(x);
            let Some(&start) = rng.pick(&caves) else {
                log::warn!("no caves left to carve from in column {x}");
                summary.skipped += 1;
                continue;
            };

            carve_stretch(grid, start, len, rng);
            summary.stretches += 1;
            summary.steps += len;
        }

        // Keep long stretches from crowding each other
        x += 1 + last_len.saturating_sub(config.path_distancing);
    }

    log::debug!(
        "carved {} stretches ({} steps), skipped {}",
        summary.stretches,
        summary.steps,
        summary.skipped
    );
    summary
}

/// Carve `len` connected corridor tiles starting next to `start`
///
/// Returns the last corridor tile carved.
pub fn carve_stretch(
    grid: &mut TileGraph,
    start: Position,
    len: usize,
    rng: &mut impl UniformRng,
) -> Position {
    let mut cursor = start;
    let mut heading = None;

    for _ in 0..len {
        let (next, exit) = carve_step(grid, cursor, heading, rng);
        cursor = next;
        heading = Some(exit);
    }

    cursor
}

/// Move from `from` one tile along `heading` and shape that tile into an
/// elbow
///
/// Without a heading the move direction is drawn from all four. The new
/// tile is opened back toward `from`, closed on its far side, and bent
/// toward a random perpendicular exit, whose opposite side is closed.
/// Returns the corridor tile and its exit, which becomes the next heading.
pub fn carve_step(
    grid: &mut TileGraph,
    from: Position,
    heading: Option<Direction>,
    rng: &mut impl UniformRng,
) -> (Position, Direction) {
    let dir = match heading {
        Some(dir) => dir,
        None => Direction::random(rng),
    };
    let exit = dir.axis().perpendicular().pick(rng);

    let path = grid.neighbor(from, dir);
    grid.set_cave(path, false);

    // Dead end along the travel axis
    grid.connect(from, dir);
    grid.disconnect(path, dir);

    // Bend toward the exit
    grid.disconnect(path, exit.opposite());
    grid.connect(path, exit);

    log::trace!("carved ({path}) heading {dir}, exit {exit}");
    (path, exit)
}
