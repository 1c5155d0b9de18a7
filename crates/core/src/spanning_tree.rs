//! Kruskal minimum spanning tree over the candidate connectivity edges.

use crate::triangulation::Edge;
use crate::types::Point;

/// Union-find with path compression. `union` points the root of `a` at the
/// root of `b`; keeping that orientation keeps the accepted-edge order stable.
struct DisjointSet {
    parents: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self { parents: (0..len).collect() }
    }

    fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parents[root] != root {
            root = self.parents[root];
        }
        let mut current = node;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        self.parents[root_a] = root_b;
    }
}

/// Builds the MST of the (possibly duplicate-carrying) edge list, shortest
/// Euclidean edges first. Node ids are assigned to distinct endpoints in
/// first-encounter order so the output is stable for a fixed input order.
/// Assumes a connected input graph; a disconnected one just yields fewer
/// than n-1 edges.
pub fn minimum_spanning_tree(edges: &[Edge]) -> Vec<Edge> {
    let mut nodes: Vec<Point> = Vec::new();
    for edge in edges {
        if !nodes.contains(&edge.p1) {
            nodes.push(edge.p1);
        }
        if !nodes.contains(&edge.p2) {
            nodes.push(edge.p2);
        }
    }

    let node_id =
        |point: Point| nodes.iter().position(|node| *node == point).expect("endpoint was indexed");
    let mut indexed_edges: Vec<(usize, usize)> =
        edges.iter().map(|edge| (node_id(edge.p1), node_id(edge.p2))).collect();
    indexed_edges.sort_by(|a, b| {
        let left = nodes[a.0].distance_to(nodes[a.1]);
        let right = nodes[b.0].distance_to(nodes[b.1]);
        left.total_cmp(&right)
    });

    let mut components = DisjointSet::new(nodes.len());
    let mut tree = Vec::new();
    for (a, b) in indexed_edges {
        if components.find(a) == components.find(b) {
            continue;
        }
        components.union(a, b);
        tree.push(Edge::new(nodes[a], nodes[b]));
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(ax: i32, ay: i32, bx: i32, by: i32) -> Edge {
        Edge::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn empty_input_yields_empty_tree() {
        assert!(minimum_spanning_tree(&[]).is_empty());
    }

    #[test]
    fn single_edge_is_its_own_tree() {
        let edges = [edge(0, 0, 5, 0)];
        assert_eq!(minimum_spanning_tree(&edges), vec![edges[0]]);
    }

    #[test]
    fn square_with_diagonal_drops_the_longest_cycle_edges() {
        // Four sides of length 3 plus one diagonal; the diagonal and one side
        // close cycles and must be dropped.
        let edges = [
            edge(0, 0, 0, 3),
            edge(0, 3, 3, 3),
            edge(3, 3, 3, 0),
            edge(3, 0, 0, 0),
            edge(0, 0, 3, 3),
        ];
        let tree = minimum_spanning_tree(&edges);
        assert_eq!(tree, vec![edges[0], edges[1], edges[2]]);
    }

    #[test]
    fn duplicate_edges_are_kept_once() {
        let edges = [edge(0, 0, 4, 0), edge(4, 0, 0, 0), edge(4, 0, 4, 2)];
        let tree = minimum_spanning_tree(&edges);
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(&edges[0]));
        assert!(tree.contains(&edges[2]));
    }

    #[test]
    fn tree_spans_all_nodes_with_exactly_n_minus_1_edges() {
        let edges = [
            edge(0, 0, 10, 0),
            edge(10, 0, 10, 10),
            edge(10, 10, 0, 10),
            edge(0, 10, 0, 0),
            edge(0, 0, 10, 10),
            edge(10, 0, 0, 10),
            edge(0, 0, 5, 5),
            edge(5, 5, 10, 10),
        ];
        let tree = minimum_spanning_tree(&edges);
        assert_eq!(tree.len(), 4);

        // Re-run union-find over the tree: one component, no cycles.
        let mut nodes: Vec<Point> = Vec::new();
        for edge in &tree {
            if !nodes.contains(&edge.p1) {
                nodes.push(edge.p1);
            }
            if !nodes.contains(&edge.p2) {
                nodes.push(edge.p2);
            }
        }
        let mut components = DisjointSet::new(nodes.len());
        for edge in &tree {
            let a = nodes.iter().position(|n| *n == edge.p1).unwrap();
            let b = nodes.iter().position(|n| *n == edge.p2).unwrap();
            assert_ne!(components.find(a), components.find(b), "tree edge closed a cycle");
            components.union(a, b);
        }
        let root = components.find(0);
        for id in 1..nodes.len() {
            assert_eq!(components.find(id), root, "tree is not a single component");
        }
    }

    #[test]
    fn shorter_edges_win_over_longer_alternatives() {
        // Path 0-1-2 with short edges beats the long direct 0-2 edge.
        let edges = [edge(0, 0, 20, 0), edge(0, 0, 9, 0), edge(9, 0, 20, 0)];
        let tree = minimum_spanning_tree(&edges);
        assert_eq!(tree, vec![edge(0, 0, 9, 0), edge(9, 0, 20, 0)]);
    }
}
