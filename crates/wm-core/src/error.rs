//! Error types for map generation
//!
//! Only configuration problems and exhausted retries reach the caller.
//! [`PlacementError`] is an attempt-level failure that the generator
//! absorbs by rebuilding the grid.

use thiserror::Error;

use crate::dungeon::Hazards;

/// A [`crate::MapConfig`] value that cannot produce a map
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 2x2, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// The current attempt's grid cannot take a player
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("map is disconnected: {reachable} of {total} tiles reachable")]
    Disconnected { reachable: usize, total: usize },

    #[error("no eligible tile left for {hazard:?}")]
    NoCandidates { hazard: Hazards },

    #[error("no safe spawn tile")]
    NoSafeSpawn,
}

/// Failure surfaced by [`crate::generate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no valid map after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}
