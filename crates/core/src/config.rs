//! Generation parameters and their boundary validation.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Seed value that requests a fresh runtime seed on every generation.
pub const RANDOM_SEED: i64 = -1;

/// Tunable inputs for one dungeon generation run.
///
/// A consumer may mutate fields freely between runs; every `generate` call
/// re-validates and rebuilds all outputs from scratch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// RNG seed; [`RANDOM_SEED`] picks a fresh one per run.
    pub seed: i64,
    pub room_size_min: i32,
    pub room_size_max: i32,
    pub grid_size: Point,
    /// Number of candidate room sizes drawn up front; the placed room count
    /// may end up lower when placement runs out of space.
    pub room_pool_size: usize,
    /// Spacing inserted between a scan position and the committed room,
    /// reserving a straight corridor route along the scan direction.
    pub minimal_directional_room_distance: i32,
    /// Clearance required on every side of a newly placed room.
    pub minimal_room_distance: i32,
    /// Cycle edges reinjected on top of the spanning tree.
    pub additional_edges: usize,
    /// Door inset from room corners, in cells.
    pub min_door_dist_to_corner: i32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            seed: 39_129,
            room_size_min: 3,
            room_size_max: 6,
            grid_size: Point::new(50, 50),
            room_pool_size: 50,
            minimal_directional_room_distance: 7,
            minimal_room_distance: 3,
            additional_edges: 3,
            min_door_dist_to_corner: 1,
        }
    }
}

impl DungeonConfig {
    /// Rejects configurations the pipeline is not defined for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size.x < 4 || self.grid_size.y < 4 {
            return Err(ConfigError::GridTooSmall { grid_size: self.grid_size });
        }
        if self.room_size_min < 2 || self.room_size_min > self.room_size_max {
            return Err(ConfigError::RoomSizeBounds {
                min: self.room_size_min,
                max: self.room_size_max,
            });
        }
        // The first room is committed at the grid midpoint without a
        // feasibility check, so the largest room must fit there.
        let fits_x = self.room_size_max <= self.grid_size.x - self.grid_size.x / 2;
        let fits_y = self.room_size_max <= self.grid_size.y - self.grid_size.y / 2;
        if !fits_x || !fits_y {
            return Err(ConfigError::RoomTooLargeForGrid {
                room_size_max: self.room_size_max,
                grid_size: self.grid_size,
            });
        }
        if self.room_pool_size == 0 {
            return Err(ConfigError::EmptyRoomPool);
        }
        if self.minimal_directional_room_distance < 1 || self.minimal_room_distance < 0 {
            return Err(ConfigError::NegativeSpacing {
                directional: self.minimal_directional_room_distance,
                clearance: self.minimal_room_distance,
            });
        }
        if self.min_door_dist_to_corner < 0
            || self.min_door_dist_to_corner > self.room_size_min - 2
        {
            return Err(ConfigError::DoorInsetOutOfRange {
                inset: self.min_door_dist_to_corner,
                room_size_min: self.room_size_min,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    GridTooSmall { grid_size: Point },
    RoomSizeBounds { min: i32, max: i32 },
    RoomTooLargeForGrid { room_size_max: i32, grid_size: Point },
    EmptyRoomPool,
    NegativeSpacing { directional: i32, clearance: i32 },
    DoorInsetOutOfRange { inset: i32, room_size_min: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { grid_size } => {
                write!(formatter, "grid {}x{} is too small to place rooms", grid_size.x, grid_size.y)
            }
            Self::RoomSizeBounds { min, max } => {
                write!(formatter, "room size bounds [{min}, {max}] are invalid (need 2 <= min <= max)")
            }
            Self::RoomTooLargeForGrid { room_size_max, grid_size } => write!(
                formatter,
                "largest room ({room_size_max}) cannot fit at the midpoint of a {}x{} grid",
                grid_size.x, grid_size.y
            ),
            Self::EmptyRoomPool => write!(formatter, "room pool size must be at least 1"),
            Self::NegativeSpacing { directional, clearance } => write!(
                formatter,
                "spacing distances (directional={directional}, clearance={clearance}) are out of range"
            ),
            Self::DoorInsetOutOfRange { inset, room_size_min } => write!(
                formatter,
                "door inset {inset} must lie in [0, {}] for minimum room size {room_size_min}",
                room_size_min - 2
            ),
        }
    }
}

impl Error for ConfigError {}
