//! Randomized directional room placement.
//!
//! Rooms are placed one at a time by scanning inward from a randomly chosen
//! grid edge. Every committed position is offset from the scan position by
//! `minimal_directional_room_distance`, which reserves an unobstructed
//! straight lane toward the rest of the dungeon regardless of which
//! connectivity edges get selected later.

use rand_chacha::ChaCha8Rng;

use crate::config::DungeonConfig;
use crate::grid::{OccupancyGrid, Rect};
use crate::model::Room;
use crate::seed::{rand_index, rand_range};
use crate::types::{Point, Side};

/// Places up to `room_pool_size` rooms and returns them in placement order.
///
/// The first pooled size is committed at the grid midpoint unconditionally.
/// Each remaining size tries up to four scan directions in cyclic order from
/// a random starting one; the first direction with any feasible row wins. A
/// size that fails in all four directions ends placement, discarding the
/// rest of the pool, so the result may be shorter than requested.
pub(crate) fn place_rooms(
    config: &DungeonConfig,
    rng: &mut ChaCha8Rng,
    grid: &mut OccupancyGrid,
) -> Vec<Room> {
    let mut size_pool: Vec<Point> = Vec::with_capacity(config.room_pool_size);
    for _ in 0..config.room_pool_size {
        let width = rand_range(rng, config.room_size_min, config.room_size_max);
        let height = rand_range(rng, config.room_size_min, config.room_size_max);
        size_pool.push(Point::new(width, height));
    }

    let mut rooms = Vec::new();

    let first_size = size_pool.pop().expect("pool size was validated non-empty");
    let first_pos = grid.size().half();
    grid.place(Rect::new(first_pos, first_size));
    rooms.push(Room::new(first_pos, first_size));

    while let Some(room_size) = size_pool.pop() {
        let start_direction = Side::from_index(rand_range(rng, 0, 3) as usize);
        let mut placed = false;

        for turn in 0..4 {
            let direction = start_direction.rotated(turn);
            let candidates = collect_candidates(config, grid, room_size, direction);
            if candidates.is_empty() {
                continue;
            }

            let pos = candidates[rand_index(rng, candidates.len())];
            grid.place(Rect::new(pos, room_size));
            rooms.push(Room::new(pos, room_size));
            placed = true;
            break;
        }

        if !placed {
            // No direction worked for this size; the grid is effectively
            // full, so the remaining pool is dropped as well.
            break;
        }
    }

    rooms
}

/// Scans rows along `direction` and returns every feasible final position in
/// the first row that has one. Positions already include the directional
/// offset. Up/Down scan with y as the primary axis, Left/Right transpose the
/// axes, and Down/Right mirror coordinates from the far edge so the scan
/// always walks inward from the chosen border.
fn collect_candidates(
    config: &DungeonConfig,
    grid: &OccupancyGrid,
    room_size: Point,
    direction: Side,
) -> Vec<Point> {
    let grid_size = grid.size();
    let reach = config.minimal_directional_room_distance;
    let clearance = config.minimal_room_distance;

    let (mirror, offset, transposed) = match direction {
        Side::Up => (Point::new(0, 0), Point::new(0, reach), false),
        Side::Down => (Point::new(0, grid_size.y - 1), Point::new(0, -reach), false),
        Side::Left => (Point::new(0, 0), Point::new(reach, 0), true),
        Side::Right => (Point::new(grid_size.x - 1, 0), Point::new(-reach, 0), true),
    };

    let mut candidates = Vec::new();

    for y in 0..grid_size.y {
        for x in 0..grid_size.x {
            let mut pos = Point::new(x, y);
            if transposed {
                std::mem::swap(&mut pos.x, &mut pos.y);
            }
            if mirror.x != 0 {
                pos.x = mirror.x - pos.x;
            }
            if mirror.y != 0 {
                pos.y = mirror.y - pos.y;
            }

            // Sight rect: from the raw scan position all the way to the far
            // edge along the scan axis. Keeping it clear guarantees a
            // straight corridor lane can reach this room later.
            let mut sight_size = room_size;
            if transposed {
                sight_size.x =
                    if mirror.x != 0 { -pos.x } else { grid_size.x - pos.x - 1 };
            } else {
                sight_size.y =
                    if mirror.y != 0 { -pos.y } else { grid_size.y - pos.y - 1 };
            }

            let raw = Rect::new(pos, room_size);
            let committed = Rect::new(pos + offset, room_size);
            let with_clearance = Rect::new(
                pos + offset - Point::new(clearance, clearance),
                room_size + Point::new(clearance * 2, clearance * 2),
            );
            let sight = Rect::new(pos, sight_size);

            if grid.can_place(raw)
                && grid.can_place(with_clearance)
                && grid.can_place(committed)
                && grid.can_place(sight)
            {
                candidates.push(pos + offset);
            }
        }

        // Greedy nearest-feasible-row search: the first row with candidates
        // settles the placement distance for this direction.
        if !candidates.is_empty() {
            break;
        }
    }

    candidates
}
