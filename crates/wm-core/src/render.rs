//! Text rendering of a finished map
//!
//! Reads tile flags only; nothing here mutates the grid.

use std::fmt::Write;

use crate::dungeon::{Direction, GeneratedMap, Hazards, Position, Tile, TileGraph};

/// Box-drawing glyph for a tile
///
/// Caves are drawn as tees by their first missing side (north, south, east,
/// west) or a cross when fully open; corridors as corners.
pub fn glyph(tile: &Tile) -> char {
    if tile.is_cave {
        return if !tile.is_open(Direction::North) {
            '┬'
        } else if !tile.is_open(Direction::South) {
            '┴'
        } else if !tile.is_open(Direction::East) {
            '┤'
        } else if !tile.is_open(Direction::West) {
            '├'
        } else {
            '┼'
        };
    }

    match (tile.is_open(Direction::North), tile.is_open(Direction::East)) {
        (false, false) => '┐',
        (false, true) => '┌',
        (true, false) => '┘',
        (true, true) => '└',
    }
}

/// Map with a column header and row labels
pub fn render_map(grid: &TileGraph) -> String {
    let mut out = String::from("\n=== Map ===\n   ");
    for x in 0..grid.width() {
        out.push(char::from_digit((x % 10) as u32, 10).unwrap_or('?'));
    }
    out.push_str("\n\n");

    for y in 0..grid.height() {
        let _ = write!(out, "{y:<3}");
        for x in 0..grid.width() {
            out.push(glyph(grid.tile(Position::new(x, y))));
        }
        out.push('\n');
    }

    out
}

/// Hazard and spawn coordinates, plus the seed when known
pub fn render_legend(map: &GeneratedMap) -> String {
    let mut out = String::new();
    if let Some(seed) = map.seed {
        let _ = writeln!(out, "{:<7}{seed}", "Seed");
    }
    for (label, hazard) in [
        ("Pits", Hazards::PIT),
        ("Bats", Hazards::BAT),
        ("Wumpus", Hazards::WUMPUS),
    ] {
        let positions: Vec<String> = map
            .hazard_positions(hazard)
            .iter()
            .map(|pos| format!("({pos})"))
            .collect();
        let _ = writeln!(out, "{label:<7}{}", positions.join(" "));
    }
    let _ = writeln!(out, "{:<7}({})", "Player", map.spawn);
    out
}
