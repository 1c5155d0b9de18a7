//! Generation pipeline that composes placement, triangulation, spanning-tree
//! selection, and corridor synthesis into one dungeon layout.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::{ConfigError, DungeonConfig};
use crate::corridors::carve_corridors;
use crate::grid::OccupancyGrid;
use crate::model::{Dungeon, Room};
use crate::placement::place_rooms;
use crate::seed::{rand_index, resolve_seed};
use crate::spanning_tree::minimum_spanning_tree;
use crate::triangulation::{Edge, triangulate};
use crate::types::Point;

pub struct DungeonGenerator {
    /// Mutated freely by configuration consumers between runs; every
    /// `generate` call re-validates it and rebuilds all outputs.
    pub config: DungeonConfig,
}

impl DungeonGenerator {
    pub fn new(config: DungeonConfig) -> Self {
        Self { config }
    }

    /// Runs one full generation: fresh grid, fresh outputs, single RNG
    /// stream. Deterministic for any explicit (non-sentinel) seed.
    pub fn generate(&self) -> Result<Dungeon, ConfigError> {
        self.config.validate()?;

        let seed = resolve_seed(self.config.seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = OccupancyGrid::new(self.config.grid_size);

        let mut rooms = place_rooms(&self.config, &mut rng, &mut grid);

        let centers: Vec<Point> = rooms.iter().map(Room::center).collect();
        let candidate_edges = triangulate(&centers);
        let mut selected_edges = minimum_spanning_tree(&candidate_edges);

        // Cycle reinjection: draw up to `additional_edges` random leftovers
        // from the triangulation back into the tree-shaped layout.
        let mut leftover_pool: Vec<Edge> = candidate_edges
            .iter()
            .filter(|edge| !selected_edges.contains(edge))
            .copied()
            .collect();
        for _ in 0..self.config.additional_edges {
            if leftover_pool.is_empty() {
                break;
            }
            let edge = leftover_pool[rand_index(&mut rng, leftover_pool.len())];
            leftover_pool.retain(|leftover| *leftover != edge);
            selected_edges.push(edge);
        }

        let room_edges = edges_to_room_indices(&selected_edges, &centers);
        let corridors =
            carve_corridors(&self.config, &mut rng, &mut grid, &mut rooms, &room_edges);

        Ok(Dungeon { config: self.config.clone(), seed, rooms, corridors, edges: selected_edges })
    }
}

/// One-shot convenience wrapper over [`DungeonGenerator`].
pub fn generate_dungeon(config: &DungeonConfig) -> Result<Dungeon, ConfigError> {
    DungeonGenerator::new(config.clone()).generate()
}

fn edges_to_room_indices(edges: &[Edge], centers: &[Point]) -> Vec<(usize, usize)> {
    edges
        .iter()
        .map(|edge| {
            let first = centers
                .iter()
                .position(|center| *center == edge.p1)
                .expect("edge endpoints are room centers");
            let second = centers
                .iter()
                .position(|center| *center == edge.p2)
                .expect("edge endpoints are room centers");
            (first, second)
        })
        .collect()
}
