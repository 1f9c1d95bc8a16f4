//! Reference tuning for map generation
//!
//! These are the values the stock generator ships with. [`crate::MapConfig`]
//! defaults to them.

/// Map dimensions (both axes wrap)
pub const GRID_WIDTH: usize = 8;
pub const GRID_HEIGHT: usize = 6;

/// Corridor stretches started in each column
pub const PATHS_PER_COL: usize = 1;

/// Longest corridor a single stretch may carve, in tiles
pub const MAX_PATH_LEN: usize = 4;

/// Column gap kept after a long stretch
pub const PATH_DISTANCING: usize = 3;

/// Shortest maximum corridor length that can close a 2x2 ring
pub const MIN_LOOP_PATH_LEN: usize = 4;

/// Hazard counts
pub const PIT_COUNT: usize = 2;
pub const BAT_COUNT: usize = 2;
pub const WUMPUS_COUNT: usize = 1;

/// Whole-pipeline attempts before giving up on a configuration
pub const MAX_ATTEMPTS: u32 = 1000;
