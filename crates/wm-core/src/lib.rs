//! wm-core: cave map generation for Hunt the Wumpus
//!
//! Builds a connected map of caves and elbow corridors on a fixed torus,
//! then places pits, bats and a wumpus around a guaranteed-safe spawn.
//! All randomness comes through [`UniformRng`], so a seed fully determines
//! the map. This crate does no I/O.

pub mod config;
pub mod dungeon;
pub mod error;
pub mod render;

mod consts;
mod rng;

pub use config::MapConfig;
pub use consts::*;
pub use dungeon::{generate, GeneratedMap, MapGenerator};
pub use error::{ConfigError, GenerationError, PlacementError};
pub use rng::{GameRng, ScriptedRng, UniformRng};
