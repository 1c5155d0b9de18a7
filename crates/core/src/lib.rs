//! Deterministic procedural dungeon layout generation.
//!
//! Given a seed and a [`DungeonConfig`], produces a fully-connected layout of
//! non-overlapping rooms, the connectivity edges selected between them, and
//! the carved corridors realizing those edges.

pub mod config;
pub mod generator;
pub mod grid;
pub mod model;
pub mod seed;
pub mod spanning_tree;
pub mod triangulation;
pub mod types;

mod corridors;
mod placement;

pub use config::{ConfigError, DungeonConfig, RANDOM_SEED};
pub use generator::{DungeonGenerator, generate_dungeon};
pub use grid::{OccupancyGrid, Rect};
pub use model::{Corridor, Dungeon, Room};
pub use seed::{generate_runtime_seed, resolve_seed};
pub use spanning_tree::minimum_spanning_tree;
pub use triangulation::{Edge, triangulate};
pub use types::{Point, Side};
