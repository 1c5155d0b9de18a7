//! Corridor and door synthesis for the selected connectivity edges.
//!
//! Each edge becomes either one straight 1-cell-wide corridor (when the two
//! rooms' x- or y-intervals overlap widely enough to keep the door away from
//! the corners) or an L-shaped pair of segments routed through one door on
//! each room.

use rand_chacha::ChaCha8Rng;

use crate::config::DungeonConfig;
use crate::grid::{OccupancyGrid, Rect};
use crate::model::{Corridor, Room};
use crate::seed::rand_range;
use crate::types::{Point, Side};

/// Carves a corridor for every room-index pair, mutating the grid and the
/// rooms' door slots, and returns the corridors in synthesis order.
pub(crate) fn carve_corridors(
    config: &DungeonConfig,
    rng: &mut ChaCha8Rng,
    grid: &mut OccupancyGrid,
    rooms: &mut [Room],
    room_edges: &[(usize, usize)],
) -> Vec<Corridor> {
    let inset = config.min_door_dist_to_corner;
    let mut corridors = Vec::new();

    for &(first, second) in room_edges {
        // Which endpoint acts as "room one" is a coin flip; it decides the
        // carve direction for straight corridors and the door sides for
        // L-shaped ones.
        let (i1, i2) =
            if rand_range(rng, 0, 1) == 1 { (second, first) } else { (first, second) };
        let r1 = rooms[i1];
        let r2 = rooms[i2];

        if r1.pos.x + r1.size.x > r2.pos.x && r2.pos.x + r2.size.x > r1.pos.x {
            // X-intervals overlap: try a straight vertical corridor.
            let low = r1.pos.x.max(r2.pos.x) + inset;
            let high = (r1.pos.x + r1.size.x).min(r2.pos.x + r2.size.x) - 1 - inset;
            if low <= high {
                let x = rand_range(rng, low, high);
                grid.place(Rect::new(
                    Point::new(x, r1.pos.y),
                    Point::new(1, r2.pos.y - r1.pos.y),
                ));
                let r1_above = r1.pos.y < r2.pos.y;
                corridors.push(Corridor {
                    start: Point::new(x, r1.pos.y + r1.size.y * i32::from(r1_above)),
                    end: Point::new(x + 1, r2.pos.y + r2.size.y * i32::from(!r1_above)),
                });
                continue;
            }
            // Overlap too narrow for the corner margin: L-shape instead.
        } else if r1.pos.y + r1.size.y > r2.pos.y && r2.pos.y + r2.size.y > r1.pos.y {
            // Y-intervals overlap: try a straight horizontal corridor.
            let low = r1.pos.y.max(r2.pos.y) + inset;
            let high = (r1.pos.y + r1.size.y).min(r2.pos.y + r2.size.y) - 1 - inset;
            if low <= high {
                let y = rand_range(rng, low, high);
                grid.place(Rect::new(
                    Point::new(r1.pos.x, y),
                    Point::new(r2.pos.x - r1.pos.x, 1),
                ));
                corridors.push(Corridor {
                    start: Point::new(
                        r1.pos.x + r1.size.x * i32::from(r1.pos.x < r2.pos.x),
                        y,
                    ),
                    end: Point::new(
                        r2.pos.x + r2.size.x * i32::from(r2.pos.x < r1.pos.x),
                        y + 1,
                    ),
                });
                continue;
            }
        }

        // L-shaped routing: horizontal out of room one's Left/Right door,
        // vertical into room two's Up/Down door.
        let (r1_side, start_x) = if r1.pos.x > r2.pos.x {
            (Side::Left, r1.pos.x)
        } else {
            (Side::Right, r1.pos.x + r1.size.x)
        };
        let start = Point::new(start_x, resolve_door(rng, &mut rooms[i1], r1_side, inset));

        let (r2_side, end_y) = if r2.pos.y > r1.pos.y {
            (Side::Up, r2.pos.y)
        } else {
            (Side::Down, r2.pos.y + r2.size.y)
        };
        let end = Point::new(resolve_door(rng, &mut rooms[i2], r2_side, inset), end_y);

        let horizontal = Point::new(end.x - start.x, 1);
        let mut vertical = Point::new(1, start.y - end.y);
        if vertical.y > 0 {
            vertical.y += 1;
        }

        grid.place(Rect::new(start, horizontal));
        grid.place(Rect::new(end, vertical));
        corridors.push(Corridor { start, end: start + horizontal });
        corridors.push(Corridor { start: end, end: end + vertical });
    }

    corridors
}

/// Returns the door coordinate for `side`, reusing a previously recorded one
/// or drawing a fresh coordinate at least `inset` cells away from both
/// corners. A wall too short for the inset interval falls back to the wall
/// midpoint rather than sampling an inverted range.
fn resolve_door(rng: &mut ChaCha8Rng, room: &mut Room, side: Side, inset: i32) -> i32 {
    if let Some(coordinate) = room.door(side) {
        return coordinate;
    }

    let (wall_origin, wall_length) = match side {
        Side::Left | Side::Right => (room.pos.y, room.size.y),
        Side::Up | Side::Down => (room.pos.x, room.size.x),
    };
    let high = wall_length - inset * 2;
    let coordinate =
        if inset <= high { wall_origin + rand_range(rng, inset, high) } else { wall_origin + wall_length / 2 };
    room.set_door(side, coordinate);
    coordinate
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    fn setup(rooms: &[Room], grid_size: Point) -> (OccupancyGrid, Vec<Room>) {
        let mut grid = OccupancyGrid::new(grid_size);
        for room in rooms {
            grid.place(Rect::new(room.pos, room.size));
        }
        (grid, rooms.to_vec())
    }

    fn config_with_inset(inset: i32) -> DungeonConfig {
        DungeonConfig { min_door_dist_to_corner: inset, ..Default::default() }
    }

    #[test]
    fn overlapping_y_intervals_make_one_horizontal_corridor() {
        let layout = [
            Room::new(Point::new(2, 2), Point::new(4, 4)),
            Room::new(Point::new(12, 3), Point::new(4, 4)),
        ];
        let (mut grid, mut rooms) = setup(&layout, Point::new(20, 20));
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let corridors =
            carve_corridors(&config_with_inset(1), &mut rng, &mut grid, &mut rooms, &[(0, 1)]);

        assert_eq!(corridors.len(), 1, "expected a single straight corridor");
        let corridor = corridors[0];
        // Inset-1 overlap of y-ranges [2,6) and [3,7) leaves exactly y=4.
        assert_eq!(corridor.start.y, 4);
        assert_eq!(corridor.end.y, 5);
        // The span runs wall to wall between the rooms, whichever way the
        // endpoint swap went.
        assert_eq!(corridor.start.x.min(corridor.end.x), 6);
        assert_eq!(corridor.start.x.max(corridor.end.x), 12);
        // Straight corridors never touch door slots.
        assert!(rooms.iter().all(|room| room.doors.iter().all(Option::is_none)));
    }

    #[test]
    fn overlapping_x_intervals_make_one_vertical_corridor() {
        let layout = [
            Room::new(Point::new(2, 2), Point::new(4, 4)),
            Room::new(Point::new(3, 12), Point::new(4, 4)),
        ];
        let (mut grid, mut rooms) = setup(&layout, Point::new(20, 20));
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let corridors =
            carve_corridors(&config_with_inset(1), &mut rng, &mut grid, &mut rooms, &[(0, 1)]);

        assert_eq!(corridors.len(), 1);
        let corridor = corridors[0];
        assert_eq!(corridor.start.x, 4, "inset-1 overlap of x-ranges [2,6) and [3,7) is x=4");
        assert_eq!(corridor.end.x, 5);
        assert_eq!(corridor.start.y.min(corridor.end.y), 6);
        assert_eq!(corridor.start.y.max(corridor.end.y), 12);
    }

    #[test]
    fn diagonal_rooms_get_an_l_shaped_pair_with_doors() {
        let layout = [
            Room::new(Point::new(2, 2), Point::new(4, 4)),
            Room::new(Point::new(10, 10), Point::new(4, 4)),
        ];
        let (mut grid, mut rooms) = setup(&layout, Point::new(20, 20));
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let corridors =
            carve_corridors(&config_with_inset(1), &mut rng, &mut grid, &mut rooms, &[(0, 1)]);

        assert_eq!(corridors.len(), 2, "L-shaped routing appends both segments");

        // Depending on the endpoint swap, either the top-left room exits
        // right into the bottom-right room's top door, or the reverse.
        let forward = rooms[0].door(Side::Right).is_some() && rooms[1].door(Side::Up).is_some();
        let reverse = rooms[1].door(Side::Left).is_some() && rooms[0].door(Side::Down).is_some();
        assert!(forward ^ reverse, "exactly one orientation should have been carved");

        for (room, side) in [
            (rooms[0], Side::Right),
            (rooms[1], Side::Up),
            (rooms[1], Side::Left),
            (rooms[0], Side::Down),
        ] {
            if let Some(coordinate) = room.door(side) {
                let (origin, length) = match side {
                    Side::Left | Side::Right => (room.pos.y, room.size.y),
                    Side::Up | Side::Down => (room.pos.x, room.size.x),
                };
                assert!(
                    coordinate >= origin + 1 && coordinate <= origin + length - 2,
                    "door {coordinate} is on or past a corner of {room:?}"
                );
            }
        }
    }

    #[test]
    fn narrow_overlap_falls_through_to_l_shaped_routing() {
        // X-ranges [2,6) and [5,9) overlap in a single column; with inset 1
        // the interval is empty, so the straight case must be skipped.
        let layout = [
            Room::new(Point::new(2, 2), Point::new(4, 4)),
            Room::new(Point::new(5, 12), Point::new(4, 4)),
        ];
        let (mut grid, mut rooms) = setup(&layout, Point::new(20, 20));
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        let corridors =
            carve_corridors(&config_with_inset(1), &mut rng, &mut grid, &mut rooms, &[(0, 1)]);

        assert_eq!(corridors.len(), 2);
    }

    #[test]
    fn door_coordinates_are_reused_per_side() {
        let mut room = Room::new(Point::new(4, 4), Point::new(6, 6));
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        let first = resolve_door(&mut rng, &mut room, Side::Right, 1);
        let second = resolve_door(&mut rng, &mut room, Side::Right, 1);
        assert_eq!(first, second);
        assert_eq!(room.door(Side::Right), Some(first));
        // Other sides stay independent.
        assert_eq!(room.door(Side::Left), None);
    }

    #[test]
    fn too_short_walls_put_the_door_at_the_midpoint() {
        // A 4-cell wall with inset 2 leaves no valid interval; the fallback
        // must not sample an inverted range.
        let mut room = Room::new(Point::new(10, 10), Point::new(4, 4));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let coordinate = resolve_door(&mut rng, &mut room, Side::Up, 2);
        assert_eq!(coordinate, 12);
    }
}
