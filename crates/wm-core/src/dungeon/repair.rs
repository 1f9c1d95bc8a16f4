//! Topology repair after carving
//!
//! Three passes over the whole grid, in order:
//! 1. Shape repair: open random closed sides until every tile is a valid
//!    cave or elbow
//! 2. Loop breaking: give every sealed 2x2 corridor ring an exit
//! 3. Cave densification: connect every pair of adjacent caves
//!
//! No pass ever closes a side or turns a cave back into a corridor, so none
//! of them can fail.

use crate::config::MapConfig;
use crate::rng::UniformRng;

use super::direction::Direction;
use super::grid::TileGraph;
use super::topology::Position;

/// What a repair run changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairSummary {
    /// Sides forced open by shape repair
    pub sides_opened: usize,
    /// Corridors promoted to caves without opening anything
    pub promoted: usize,
    pub loops_broken: usize,
    /// Cave-to-cave links added by densification
    pub cave_links: usize,
}

/// Run all three repair passes
pub fn repair_topology(
    grid: &mut TileGraph,
    config: &MapConfig,
    rng: &mut impl UniformRng,
) -> RepairSummary {
    let mut summary = RepairSummary::default();

    repair_shapes(grid, rng, &mut summary);
    debug_assert!(grid.invalid_tiles().is_empty(), "shape repair left invalid tiles");

    if config.loops_possible() {
        summary.loops_broken = break_loops(grid, rng);
    }
    summary.cave_links = densify_caves(grid);

    debug_assert!(grid.asymmetric_sides().is_empty());
    debug_assert!(grid.invalid_tiles().is_empty());
    log::debug!("repaired topology: {summary:?}");
    summary
}

/// Open `dir` from `pos` and make both ends caves
fn open_as_cave(grid: &mut TileGraph, pos: Position, dir: Direction) {
    grid.set_cave(pos, true);
    grid.connect(pos, dir);
    grid.set_cave(grid.neighbor(pos, dir), true);
}

fn repair_shapes(grid: &mut TileGraph, rng: &mut impl UniformRng, summary: &mut RepairSummary) {
    for pos in grid.positions() {
        while !grid.tile(pos).has_valid_shape() {
            let closed = grid.closed_directions(pos);
            match rng.pick(&closed) {
                Some(&dir) => {
                    open_as_cave(grid, pos, dir);
                    summary.sides_opened += 1;
                }
                None => {
                    // A corridor open on every side is a complete cave
                    grid.set_cave(pos, true);
                    summary.promoted += 1;
                }
            }
        }
    }
}

/// Whether the 2x2 block at `top_left` is a sealed corridor ring
///
/// ```text
/// ┌┐
/// └┘
/// ```
pub fn is_closed_loop(grid: &TileGraph, top_left: Position) -> bool {
    use Direction::{East, North, South, West};

    let torus = grid.torus();
    let corners = [
        (top_left, [East, South]),
        (torus.offset(top_left, 1, 0), [West, South]),
        (torus.offset(top_left, 1, 1), [North, West]),
        (torus.offset(top_left, 0, 1), [North, East]),
    ];

    corners.iter().all(|&(pos, sides)| {
        let tile = grid.tile(pos);
        !tile.is_cave && sides.iter().all(|&dir| tile.is_open(dir))
    })
}

/// Break every sealed ring by opening one outward side of one corner
fn break_loops(grid: &mut TileGraph, rng: &mut impl UniformRng) -> usize {
    let mut broken = 0;
    for pos in grid.positions() {
        if is_closed_loop(grid, pos) {
            break_loop(grid, pos, rng);
            broken += 1;
        }
    }
    broken
}

fn break_loop(grid: &mut TileGraph, top_left: Position, rng: &mut impl UniformRng) {
    use Direction::{East, North, South, West};

    let torus = grid.torus();
    let corner = rng.uniform_int(0, 3);
    let (pos, dir) = match corner {
        0 => (top_left, if rng.coin() { North } else { West }),
        1 => (torus.offset(top_left, 1, 0), if rng.coin() { North } else { East }),
        2 => (torus.offset(top_left, 1, 1), if rng.coin() { East } else { South }),
        _ => (torus.offset(top_left, 0, 1), if rng.coin() { South } else { West }),
    };

    log::debug!("breaking corridor loop at ({top_left}) through ({pos}) {dir}");
    open_as_cave(grid, pos, dir);
}

/// Open every closed side between two caves
fn densify_caves(grid: &mut TileGraph) -> usize {
    let mut links = 0;
    for pos in grid.positions() {
        if !grid.tile(pos).is_cave {
            continue;
        }
        for dir in grid.closed_directions(pos) {
            if grid.neighbor_tile(pos, dir).is_cave {
                grid.connect(pos, dir);
                links += 1;
            }
        }
    }
    links
}
