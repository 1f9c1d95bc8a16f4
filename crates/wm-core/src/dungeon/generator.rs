//! Whole-map generation with retry
//!
//! One attempt runs initialize -> carve -> repair -> populate on a fresh
//! grid. An attempt whose grid falls apart into separate regions, or that
//! cannot place hazards or a safe spawn, is thrown away in full and the
//! pipeline restarts with new draws, up to [`MapConfig::max_attempts`]
//! times.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::error::{ConfigError, GenerationError, PlacementError};
use crate::rng::UniformRng;

use super::carve::carve_paths;
use super::grid::TileGraph;
use super::hazard::place_hazards;
use super::repair::repair_topology;
use super::tile::Hazards;
use super::topology::Position;

/// A finished, populated map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMap {
    pub config: MapConfig,
    /// Seed that regenerates this map, when the RNG was seeded
    pub seed: Option<u64>,
    /// Attempts used, including the successful one
    pub attempts: u32,
    pub grid: TileGraph,
    pub spawn: Position,
}

impl GeneratedMap {
    pub fn hazard_positions(&self, hazard: Hazards) -> Vec<Position> {
        self.grid.hazard_positions(hazard)
    }
}

/// Drives the generation pipeline with one RNG
#[derive(Debug)]
pub struct MapGenerator<R> {
    config: MapConfig,
    rng: R,
}

impl<R: UniformRng> MapGenerator<R> {
    pub fn new(config: MapConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Give the RNG back, e.g. to keep drawing from the same stream
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Run the pipeline once on a freshly initialized grid
    pub fn attempt(&mut self) -> Result<(TileGraph, Position), PlacementError> {
        let mut grid = TileGraph::new(self.config.width, self.config.height);
        log::debug!("initialized {}x{} map", grid.width(), grid.height());

        carve_paths(&mut grid, &self.config, &mut self.rng);
        repair_topology(&mut grid, &self.config, &mut self.rng);
        ensure_connected(&grid)?;
        let spawn = place_hazards(&mut grid, &mut self.rng)?;
        log::debug!("populated map");

        Ok((grid, spawn))
    }

    /// Retry [`Self::attempt`] until one succeeds or the cap is hit
    pub fn generate(&mut self) -> Result<GeneratedMap, GenerationError> {
        for attempt in 1..=self.config.max_attempts {
            match self.attempt() {
                Ok((grid, spawn)) => {
                    log::debug!("generated map after {attempt} attempt(s)");
                    return Ok(GeneratedMap {
                        config: self.config,
                        seed: self.rng.replay_seed(),
                        attempts: attempt,
                        grid,
                        spawn,
                    });
                }
                Err(err) => log::debug!("attempt {attempt} failed: {err}; retrying"),
            }
        }

        Err(GenerationError::AttemptsExhausted {
            attempts: self.config.max_attempts,
        })
    }
}

/// Two-tile axes can leave corridor columns that wall caves off from
/// each other, which no repair pass reopens.
fn ensure_connected(grid: &TileGraph) -> Result<(), PlacementError> {
    let total = grid.width() * grid.height();
    let reachable = grid.reachable_from(Position::new(0, 0));
    if reachable == total {
        Ok(())
    } else {
        Err(PlacementError::Disconnected { reachable, total })
    }
}

/// Generate one map with `config`, drawing from `rng`
pub fn generate(
    config: &MapConfig,
    rng: &mut impl UniformRng,
) -> Result<GeneratedMap, GenerationError> {
    MapGenerator::new(*config, rng)?.generate()
}
