//! Dijkstra's algorithm with array-scan selection.
//!
//! ### Performance Characteristics
//!
//! | Phase            | Cost     |
//! |------------------|----------|
//! | Selection        | O(V) per round, O(V²) total |
//! | Relaxation       | O(E) total |
//! | Extra memory     | O(V)     |
//!
//! Selection scans in index order and keeps the first minimum, so ties resolve
//! to the lowest index. Negative weights are not rejected; on such graphs the
//! result is whatever the greedy selection produces.

use crate::error::Result;
use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::Graph;

use super::{PathAlgorithm, PathReport, ShortestPathTree};

/// Unvisited index with the smallest finite distance, lowest index on ties.
fn select_min(tree: &ShortestPathTree, visited: &VisitedFlags, n: usize) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for v in 0..n {
        if visited.is_visited(v) {
            continue;
        }
        let Some(d) = tree.dist(v) else { continue };
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((v, d));
        }
    }
    best.map(|(v, _)| v)
}

pub(crate) fn run(graph: &Graph, source: usize) -> Result<ShortestPathTree> {
    let n = graph.vertex_count();
    let mut tree = ShortestPathTree::new(graph, source)?;
    let mut visited = VisitedFlags::new(n)?;

    while let Some(u) = select_min(&tree, &visited, n) {
        visited.try_visit(u);
        for edge in graph.edges_at(u) {
            let v = edge.dst();
            if !visited.is_visited(v) {
                tree.relax(u, v, edge.weight());
            }
        }
    }
    Ok(tree)
}

impl Graph {
    /// Distances and parents from `src_key` to every vertex.
    ///
    /// # Errors
    /// `VertexNotFound` for an unknown source, `OutOfMemory` if the tables
    /// cannot be allocated.
    pub fn dijkstra(&self, src_key: u64) -> Result<ShortestPathTree> {
        let src = self.resolve(src_key)?;
        run(self, src)
    }

    /// Shortest weighted path from `src_key` to `dst_key`.
    ///
    /// An unreachable destination is not an error: the report carries no
    /// distance and no path.
    ///
    /// # Errors
    /// `VertexNotFound` if either key is unknown, `OutOfMemory` if the tables
    /// cannot be allocated.
    pub fn shortest_path_dijkstra(&self, src_key: u64, dst_key: u64) -> Result<PathReport> {
        self.shortest_path_report(src_key, dst_key, PathAlgorithm::Dijkstra, run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    fn classic() -> Graph {
        let mut g = Graph::create(9, false).unwrap();
        for key in 0..9 {
            g.add_vertex(key).unwrap();
        }
        for &(u, v, w) in &[
            (0, 1, 4),
            (0, 7, 8),
            (1, 2, 8),
            (1, 7, 11),
            (2, 3, 7),
            (2, 8, 2),
            (2, 5, 4),
            (3, 5, 14),
            (3, 4, 9),
            (4, 5, 10),
            (5, 6, 2),
            (6, 8, 6),
            (6, 7, 1),
            (7, 8, 7),
        ] {
            g.add_edge(u, v, w).unwrap();
        }
        g
    }

    #[test]
    fn classic_example_distances() {
        let tree = classic().dijkstra(0).unwrap();
        let expected = [0, 4, 12, 19, 21, 11, 9, 8, 14];
        let got: Vec<_> = tree.distances().iter().map(|d| d.unwrap()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn classic_example_path_to_four() {
        let report = classic().shortest_path_dijkstra(0, 4).unwrap();
        assert_eq!(report.distance(), Some(21));
        assert_eq!(report.path(), Some(&[0, 7, 6, 5, 4][..]));
        assert!(report.to_string().contains("0 -> 7 -> 6 -> 5 -> 4"));
    }

    #[test]
    fn distances_agree_with_parent_edges() {
        let g = classic();
        let tree = g.dijkstra(0).unwrap();
        for v in g.vertices() {
            let key = v.key();
            if key == 0 {
                continue;
            }
            let parent = tree.parent_of(key).unwrap();
            let w = g.edge_weight(parent, key).unwrap();
            assert_eq!(
                tree.distance_to(key).unwrap(),
                tree.distance_to(parent).unwrap() + w
            );
        }
    }

    #[test]
    fn unreachable_destination_reports_no_path() {
        let mut g = Graph::create(3, true).unwrap();
        for key in 0..3 {
            g.add_vertex(key).unwrap();
        }
        g.add_edge(0, 1, 5).unwrap();
        let report = g.shortest_path_dijkstra(0, 2).unwrap();
        assert!(!report.is_reachable());
        assert_eq!(report.path(), None);
        assert!(report.to_string().contains("No path found"));
    }

    #[test]
    fn ties_prefer_lower_index() {
        // Both 1 and 2 reach 3 at cost 2; 1 is settled first and claims it.
        let mut g = Graph::create(4, true).unwrap();
        for key in 0..4 {
            g.add_vertex(key).unwrap();
        }
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        g.add_edge(1, 3, 1).unwrap();
        let tree = g.dijkstra(0).unwrap();
        assert_eq!(tree.distance_to(3), Some(2));
        assert_eq!(tree.parent_of(3), Some(1));
    }

    #[test]
    fn unknown_keys_are_rejected_before_running() {
        let g = classic();
        assert_eq!(
            g.shortest_path_dijkstra(0, 42).unwrap_err(),
            GraphError::VertexNotFound { key: 42 }
        );
        assert_eq!(
            g.dijkstra(99).unwrap_err(),
            GraphError::VertexNotFound { key: 99 }
        );
    }

    #[test]
    fn source_equals_destination() {
        let report = classic().shortest_path_dijkstra(3, 3).unwrap();
        assert_eq!(report.distance(), Some(0));
        assert_eq!(report.path(), Some(&[3][..]));
    }
}
