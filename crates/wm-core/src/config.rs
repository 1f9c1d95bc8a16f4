//! Generation parameters
//!
//! The generator is tuned at compile time through [`crate::consts`]; this
//! struct carries the same knobs at runtime so other grid sizes can be
//! exercised without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::{
    GRID_HEIGHT, GRID_WIDTH, MAX_ATTEMPTS, MAX_PATH_LEN, MIN_LOOP_PATH_LEN, PATH_DISTANCING,
    PATHS_PER_COL,
};
use crate::error::ConfigError;

/// Map generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    pub paths_per_column: usize,
    /// Upper bound for a stretch's length (drawn from `1..=max_path_len`)
    pub max_path_len: usize,
    /// Columns kept free after a stretch longer than this
    pub path_distancing: usize,
    /// Pipeline attempts before reporting [`crate::GenerationError::AttemptsExhausted`]
    pub max_attempts: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            paths_per_column: PATHS_PER_COL,
            max_path_len: MAX_PATH_LEN,
            path_distancing: PATH_DISTANCING,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl MapConfig {
    /// Same tuning on a different grid
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check that every value can drive the pipeline
    ///
    /// A 1-wide axis would make a tile its own neighbour, so both axes
    /// need at least two tiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 2 || self.height < 2 {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.paths_per_column == 0 {
            return Err(ConfigError::Zero {
                field: "paths_per_column",
            });
        }
        if self.max_path_len == 0 {
            return Err(ConfigError::Zero {
                field: "max_path_len",
            });
        }
        if self.path_distancing == 0 {
            return Err(ConfigError::Zero {
                field: "path_distancing",
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Zero {
                field: "max_attempts",
            });
        }
        Ok(())
    }

    /// Whether corridors can be long enough to close a 2x2 ring
    pub fn loops_possible(&self) -> bool {
        self.max_path_len >= MIN_LOOP_PATH_LEN
    }

    pub fn tile_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_tuning() {
        let config = MapConfig::default();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 6);
        assert_eq!(config.paths_per_column, 1);
        assert_eq!(config.max_path_len, 4);
        assert_eq!(config.path_distancing, 3);
        assert!(config.validate().is_ok());
        assert!(config.loops_possible());
    }

    #[test]
    fn test_rejects_degenerate_grid() {
        assert_eq!(
            MapConfig::with_size(1, 6).validate(),
            Err(ConfigError::GridTooSmall {
                width: 1,
                height: 6
            })
        );
        assert!(MapConfig::with_size(2, 2).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_fields() {
        let config = MapConfig {
            max_path_len: 0,
            ..MapConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Zero {
                field: "max_path_len"
            })
        );

        let config = MapConfig {
            max_attempts: 0,
            ..MapConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_corridors_cannot_loop() {
        let config = MapConfig {
            max_path_len: 3,
            ..MapConfig::default()
        };
        assert!(!config.loops_possible());
    }
}
