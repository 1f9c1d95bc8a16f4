//! End-to-end map generation tests
//!
//! Symmetry, shape, connectivity, hazard and spawn properties of finished
//! maps, checked over many seeds.

use proptest::prelude::*;

use wm_core::dungeon::{is_safe_spawn, Direction, Hazards, Position};
use wm_core::render::{glyph, render_legend, render_map};
use wm_core::{generate, GameRng, GeneratedMap, MapConfig, MapGenerator, MAX_ATTEMPTS};

fn assert_valid_map(map: &GeneratedMap) {
    let grid = &map.grid;

    assert!(grid.asymmetric_sides().is_empty(), "asymmetric sides");
    for pos in grid.positions() {
        let tile = grid.tile(pos);
        for dir in Direction::ALL {
            assert_eq!(
                tile.is_open(dir),
                grid.neighbor_tile(pos, dir).is_open(dir.opposite()),
                "side {dir} of ({pos})"
            );
        }
        if tile.is_cave {
            assert!(tile.open_count() >= 3, "cave ({pos}) has {} sides", tile.open_count());
        } else {
            let vertical = tile.is_open(Direction::North) ^ tile.is_open(Direction::South);
            let horizontal = tile.is_open(Direction::East) ^ tile.is_open(Direction::West);
            assert_eq!(tile.open_count(), 2, "corridor ({pos})");
            assert!(vertical && horizontal, "corridor ({pos}) is not an elbow");
        }
    }

    assert_eq!(
        grid.reachable_from(Position::new(0, 0)),
        grid.width() * grid.height(),
        "map is not connected"
    );
}

fn assert_hazards_and_spawn(map: &GeneratedMap) {
    let grid = &map.grid;

    let pits = map.hazard_positions(Hazards::PIT);
    let bats = map.hazard_positions(Hazards::BAT);
    let wumpus = map.hazard_positions(Hazards::WUMPUS);
    assert_eq!(pits.len(), 2);
    assert_eq!(bats.len(), 2);
    assert_eq!(wumpus.len(), 1);
    for pos in pits.iter().chain(&wumpus) {
        assert!(grid.tile(*pos).is_cave);
    }

    let spawn = grid.tile(map.spawn);
    assert!(spawn.is_cave);
    assert!(spawn.hazards.is_empty());
    for dir in spawn.open_directions() {
        assert!(
            grid.neighbor_tile(map.spawn, dir).hazards.is_empty(),
            "hazard next to spawn through {dir}"
        );
    }
    assert!(is_safe_spawn(grid, map.spawn));
}

#[test]
fn test_seeded_generation_scenario() {
    let mut rng = GameRng::new(0x5EED);
    let map = generate(&MapConfig::default(), &mut rng).unwrap();

    assert_eq!(map.config, MapConfig::default());
    assert_valid_map(&map);
    assert_hazards_and_spawn(&map);
}

#[test]
fn test_terminates_within_attempt_cap() {
    let config = MapConfig::default();
    for seed in 0..100 {
        let mut generator = MapGenerator::new(config, GameRng::new(seed)).unwrap();
        let map = generator.generate().unwrap();
        assert!(map.attempts <= MAX_ATTEMPTS, "seed {seed}");
    }
}

#[test]
fn test_many_seeds_produce_valid_maps() {
    let config = MapConfig::default();
    for seed in 0..300 {
        let map = generate(&config, &mut GameRng::new(seed)).unwrap();
        assert_valid_map(&map);
        assert_hazards_and_spawn(&map);
    }
}

#[test]
fn test_other_grid_sizes() {
    for (width, height) in [(2, 4), (4, 2), (3, 3), (4, 4), (5, 3), (16, 12)] {
        let config = MapConfig::with_size(width, height);
        for seed in 0..20 {
            let map = generate(&config, &mut GameRng::new(seed)).unwrap();
            assert_eq!(map.grid.width(), width);
            assert_eq!(map.grid.height(), height);
            assert_valid_map(&map);
            assert_hazards_and_spawn(&map);
        }
    }
}

#[test]
fn test_two_by_two_grid_never_has_safe_spawn() {
    let config = MapConfig {
        max_attempts: 50,
        ..MapConfig::with_size(2, 2)
    };
    let err = generate(&config, &mut GameRng::new(8)).unwrap_err();
    assert_eq!(err.to_string(), "no valid map after 50 attempts");
}

#[test]
fn test_maps_contain_corridors() {
    let config = MapConfig::default();
    let with_corridors = (0..50)
        .map(|seed| generate(&config, &mut GameRng::new(seed)).unwrap())
        .filter(|map| map.grid.cave_count() < config.tile_count())
        .count();
    assert!(with_corridors > 0);
}

#[test]
fn test_rendered_map_lists_every_row() {
    let map = generate(&MapConfig::default(), &mut GameRng::new(77)).unwrap();
    let text = render_map(&map.grid);
    let rows: Vec<&str> = text.lines().skip(4).filter(|l| !l.is_empty()).collect();

    assert_eq!(rows.len(), 6);
    for (y, row) in rows.iter().enumerate() {
        assert!(row.starts_with(&format!("{y}  ")));
        let glyphs: String = row.chars().skip(3).collect();
        let expected: String = (0..8)
            .map(|x| glyph(map.grid.tile(Position::new(x, y))))
            .collect();
        assert_eq!(glyphs, expected);
    }

    let legend = render_legend(&map);
    assert!(legend.starts_with("Seed   77\n"));
    assert!(legend.contains(&format!("Player ({})", map.spawn)));
    assert_eq!(legend.lines().count(), 5);
}

#[test]
fn test_json_round_trip() {
    let map = generate(&MapConfig::default(), &mut GameRng::new(3)).unwrap();
    let json = serde_json::to_string(&map).unwrap();
    let back: GeneratedMap = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
    assert_eq!(back.seed, Some(3));

    // The stored seed regenerates the same map
    let replayed = generate(&back.config, &mut GameRng::new(3)).unwrap();
    assert_eq!(replayed, map);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_any_seed_yields_valid_map(seed in any::<u64>()) {
        let map = generate(&MapConfig::default(), &mut GameRng::new(seed)).unwrap();
        assert_valid_map(&map);
        assert_hazards_and_spawn(&map);
    }
}
