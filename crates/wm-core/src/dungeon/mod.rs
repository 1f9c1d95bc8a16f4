//! Cave system generation
//!
//! Contains the torus topology, the tile graph, and the passes that carve,
//! repair and populate it.

mod carve;
mod direction;
mod generator;
mod grid;
mod hazard;
mod repair;
mod tile;
mod topology;

pub use carve::{carve_paths, carve_step, carve_stretch, CarveSummary};
pub use direction::{Axis, Direction};
pub use generator::{generate, GeneratedMap, MapGenerator};
pub use grid::TileGraph;
pub use hazard::{is_safe_spawn, place_hazards, spawn_candidates};
pub use repair::{is_closed_loop, repair_topology, RepairSummary};
pub use tile::{Connections, Hazards, Tile};
pub use topology::{Position, Torus};
