//! Boolean occupancy grid and the rectangle primitive used for every carve.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Axis-aligned rectangle. A negative size component means "grow backward
/// from pos" and is normalized away before any grid access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Point,
    pub size: Point,
}

impl Rect {
    pub fn new(pos: Point, size: Point) -> Self {
        Self { pos, size }
    }

    pub fn normalized(mut self) -> Self {
        if self.size.x < 0 {
            self.size.x = self.size.x.abs();
            self.pos.x -= self.size.x;
        }
        if self.size.y < 0 {
            self.size.y = self.size.y.abs();
            self.pos.y -= self.size.y;
        }
        self
    }
}

/// Fixed-size occupancy map owned by a single generation run.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(size: Point) -> Self {
        Self { width: size.x, height: size.y, cells: vec![false; (size.x * size.y) as usize] }
    }

    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub fn occupied(&self, pos: Point) -> bool {
        self.cells[(pos.y * self.width + pos.x) as usize]
    }

    pub fn set(&mut self, pos: Point, value: bool) {
        self.cells[(pos.y * self.width + pos.x) as usize] = value;
    }

    /// Whether `rect` lies inside the grid (strictly short of the far edges,
    /// which stay free for corridor routing) with every covered cell free.
    pub fn can_place(&self, rect: Rect) -> bool {
        let Rect { pos, size } = rect.normalized();

        if self.width <= pos.x + size.x || self.height <= pos.y + size.y {
            return false;
        }
        if pos.x < 0 || pos.y < 0 {
            return false;
        }

        for x in 0..size.x {
            for y in 0..size.y {
                if self.occupied(Point::new(pos.x + x, pos.y + y)) {
                    return false;
                }
            }
        }
        true
    }

    /// Marks every covered cell occupied. The caller is expected to have
    /// validated the rectangle with [`Self::can_place`]; an out-of-grid rect
    /// panics on the cell index.
    pub fn place(&mut self, rect: Rect) {
        let Rect { pos, size } = rect.normalized();
        for x in 0..size.x {
            for y in 0..size.y {
                self.set(Point::new(pos.x + x, pos.y + y), true);
            }
        }
    }
}
