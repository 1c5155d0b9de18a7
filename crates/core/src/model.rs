//! Public data model for a generated dungeon layout.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::config::DungeonConfig;
use crate::triangulation::Edge;
use crate::types::{Point, Side};

/// Axis-aligned room with at most one recorded door coordinate per side.
///
/// A door slot stores only the coordinate along the wall it sits on: the y
/// coordinate for Left/Right walls, the x coordinate for Up/Down walls. Slots
/// stay `None` until corridor synthesis routes an L-shaped corridor through
/// that wall, and are reused by every later corridor attaching to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub pos: Point,
    pub size: Point,
    pub doors: [Option<i32>; 4],
}

impl Room {
    pub fn new(pos: Point, size: Point) -> Self {
        Self { pos, size, doors: [None; 4] }
    }

    pub fn center(&self) -> Point {
        self.pos + self.size.half()
    }

    pub fn door(&self, side: Side) -> Option<i32> {
        self.doors[side.index()]
    }

    pub(crate) fn set_door(&mut self, side: Side, coordinate: i32) {
        self.doors[side.index()] = Some(coordinate);
    }
}

/// Carved axis-aligned span. `end` may be less than `start` on an axis; the
/// sign encodes the direction the corridor was carved in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub start: Point,
    pub end: Point,
}

/// One complete generation result. Rooms are in placement order, corridors in
/// synthesis order, and `edges` holds the final selected connectivity edges
/// (spanning tree plus reinjected extras) for diagnostics and visualization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub config: DungeonConfig,
    /// The concrete seed this run was keyed by; never the random sentinel.
    pub seed: u64,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    pub edges: Vec<Edge>,
}

impl Dungeon {
    /// Stable byte encoding of everything a consumer can observe, used for
    /// determinism checks and fingerprinting.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            extend_point(&mut bytes, room.pos);
            extend_point(&mut bytes, room.size);
            for door in room.doors {
                match door {
                    Some(coordinate) => {
                        bytes.push(1);
                        bytes.extend(coordinate.to_le_bytes());
                    }
                    None => {
                        bytes.push(0);
                        bytes.extend(0_i32.to_le_bytes());
                    }
                }
            }
        }

        bytes.extend((self.corridors.len() as u32).to_le_bytes());
        for corridor in &self.corridors {
            extend_point(&mut bytes, corridor.start);
            extend_point(&mut bytes, corridor.end);
        }

        bytes.extend((self.edges.len() as u32).to_le_bytes());
        for edge in &self.edges {
            extend_point(&mut bytes, edge.p1);
            extend_point(&mut bytes, edge.p2);
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn extend_point(bytes: &mut Vec<u8>, point: Point) {
    bytes.extend(point.x.to_le_bytes());
    bytes.extend(point.y.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_uses_integer_halving() {
        let room = Room::new(Point::new(10, 20), Point::new(5, 4));
        assert_eq!(room.center(), Point::new(12, 22));
    }

    #[test]
    fn door_slots_start_unset_and_record_once() {
        let mut room = Room::new(Point::new(0, 0), Point::new(4, 4));
        assert_eq!(room.door(Side::Left), None);
        room.set_door(Side::Left, 2);
        assert_eq!(room.door(Side::Left), Some(2));
        assert_eq!(room.door(Side::Right), None);
    }

    #[test]
    fn canonical_bytes_distinguish_set_doors_from_coordinate_zero() {
        let base = Dungeon {
            config: DungeonConfig::default(),
            seed: 1,
            rooms: vec![Room::new(Point::new(0, 0), Point::new(3, 3))],
            corridors: Vec::new(),
            edges: Vec::new(),
        };
        let mut with_zero_door = base.clone();
        with_zero_door.rooms[0].set_door(Side::Up, 0);
        assert_ne!(base.canonical_bytes(), with_zero_door.canonical_bytes());
        assert_ne!(base.fingerprint(), with_zero_door.fingerprint());
    }
}
