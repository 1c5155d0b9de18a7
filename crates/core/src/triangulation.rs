//! Bowyer-Watson Delaunay triangulation over room centers.
//!
//! The output is used purely as a candidate connectivity graph: every
//! surviving triangle contributes all three of its edges, duplicates and all.
//! Deduplication is the spanning-tree builder's problem.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Unordered pair of endpoints; equality is symmetric.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub p1: Point,
    pub p2: Point,
}

impl Edge {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn length(&self) -> f64 {
        self.p1.distance_to(self.p2)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2)
            || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl Eq for Edge {}

#[derive(Clone, Copy, Debug)]
struct Triangle {
    p1: Point,
    p2: Point,
    p3: Point,
}

impl Triangle {
    /// Non-strict circumcircle membership: boundary points count as inside.
    /// The `<=` tie-break decides which triangles survive cocircular point
    /// sets and must not be tightened to `<`.
    fn circumcircle_contains(&self, point: Point) -> bool {
        let (x1, y1) = (f64::from(self.p1.x), f64::from(self.p1.y));
        let (x2, y2) = (f64::from(self.p2.x), f64::from(self.p2.y));
        let (x3, y3) = (f64::from(self.p3.x), f64::from(self.p3.y));

        let ab = x1 * x1 + y1 * y1;
        let cd = x2 * x2 + y2 * y2;
        let ef = x3 * x3 + y3 * y3;

        let denom_x = x1 * (y3 - y2) + x2 * (y1 - y3) + x3 * (y2 - y1);
        let denom_y = y1 * (x3 - x2) + y2 * (x1 - x3) + y3 * (x2 - x1);
        // Collinear vertices leave no finite circumcircle; such a triangle
        // never claims a point and is left for the super-triangle sweep.
        if denom_x.abs() < f64::EPSILON || denom_y.abs() < f64::EPSILON {
            return false;
        }

        let circum_x = (ab * (y3 - y2) + cd * (y1 - y3) + ef * (y2 - y1)) / denom_x / 2.0;
        let circum_y = (ab * (x3 - x2) + cd * (x1 - x3) + ef * (x2 - x1)) / denom_y / 2.0;

        let radius = circum_distance(self.p1, circum_x, circum_y);
        circum_distance(point, circum_x, circum_y) <= radius
    }

    fn shares_vertex(&self, point: Point) -> bool {
        self.p1 == point || self.p2 == point || self.p3 == point
    }

    fn edges(&self) -> [Edge; 3] {
        [Edge::new(self.p1, self.p2), Edge::new(self.p2, self.p3), Edge::new(self.p3, self.p1)]
    }
}

fn circum_distance(point: Point, circum_x: f64, circum_y: f64) -> f64 {
    let dx = f64::from(point.x) - circum_x;
    let dy = f64::from(point.y) - circum_y;
    (dx * dx + dy * dy).sqrt()
}

/// Delaunay-triangulates `points` and returns the edge list of every
/// surviving triangle. Fewer than three points yield no edges.
pub fn triangulate(points: &[Point]) -> Vec<Edge> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut min = points[0];
    let mut max = min;
    for point in points {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }

    // Super triangle scaled to 20x the bounding-box extent so every input
    // point lands strictly inside it.
    let delta = max - min;
    let delta_max = delta.x.max(delta.y);
    let mid = (min + max).half();

    let super_a = Point::new(mid.x - 20 * delta_max, mid.y - delta_max);
    let super_b = Point::new(mid.x, mid.y + 20 * delta_max);
    let super_c = Point::new(mid.x + 20 * delta_max, mid.y - delta_max);

    let mut triangles = vec![Triangle { p1: super_a, p2: super_b, p3: super_c }];

    for &point in points {
        let mut cavity_edges: Vec<Edge> = Vec::new();
        let mut kept = Vec::with_capacity(triangles.len());
        for triangle in triangles {
            if triangle.circumcircle_contains(point) {
                cavity_edges.extend(triangle.edges());
            } else {
                kept.push(triangle);
            }
        }
        triangles = kept;

        // Edges shared by two removed triangles are interior to the cavity;
        // only the edges seen exactly once form its boundary polygon.
        let boundary: Vec<Edge> = cavity_edges
            .iter()
            .filter(|edge| cavity_edges.iter().filter(|other| other == edge).count() == 1)
            .copied()
            .collect();

        for edge in boundary {
            triangles.push(Triangle { p1: edge.p1, p2: edge.p2, p3: point });
        }
    }

    triangles
        .iter()
        .filter(|triangle| {
            !triangle.shares_vertex(super_a)
                && !triangle.shares_vertex(super_b)
                && !triangle.shares_vertex(super_c)
        })
        .flat_map(Triangle::edges)
        .collect()
}
