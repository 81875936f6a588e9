//! Hop-count shortest paths by breadth-first layering.
//!
//! Edge weights are ignored; every edge counts as one hop. A vertex's distance
//! and parent are fixed when it is first discovered, so each vertex is queued at
//! most once and the queue never needs more than `V` slots.

use crate::collections::BoundedQueue;
use crate::error::Result;
use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::Graph;

use super::{PathAlgorithm, PathReport, ShortestPathTree};

pub(crate) fn run(graph: &Graph, source: usize) -> Result<ShortestPathTree> {
    let n = graph.vertex_count();
    let mut tree = ShortestPathTree::new(graph, source)?;
    let mut discovered = VisitedFlags::new(n)?;
    let mut queue = BoundedQueue::with_capacity(n)?;

    discovered.try_visit(source);
    queue.enqueue(source)?;
    while let Some(u) = queue.dequeue() {
        for edge in graph.edges_at(u) {
            let v = edge.dst();
            if discovered.try_visit(v) {
                tree.relax(u, v, 1);
                queue.enqueue(v)?;
            }
        }
    }
    Ok(tree)
}

impl Graph {
    /// Hop counts and parents from `src_key` to every vertex.
    ///
    /// # Errors
    /// `VertexNotFound` for an unknown source, `OutOfMemory` if the tables
    /// cannot be allocated.
    pub fn bfs_shortest_paths(&self, src_key: u64) -> Result<ShortestPathTree> {
        let src = self.resolve(src_key)?;
        run(self, src)
    }

    /// Fewest-hops path from `src_key` to `dst_key`.
    ///
    /// # Errors
    /// `VertexNotFound` if either key is unknown, `OutOfMemory` if the tables
    /// cannot be allocated.
    pub fn shortest_path_unweighted(&self, src_key: u64, dst_key: u64) -> Result<PathReport> {
        self.shortest_path_report(src_key, dst_key, PathAlgorithm::UnweightedBfs, run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_vertex_undirected() -> Graph {
        let mut g = Graph::create(10, false).unwrap();
        for key in 0..10 {
            g.add_vertex(key).unwrap();
        }
        for &(u, v) in &[
            (0, 5),
            (0, 4),
            (0, 3),
            (1, 5),
            (1, 6),
            (1, 2),
            (2, 7),
            (2, 3),
            (3, 4),
            (3, 9),
            (5, 6),
            (5, 8),
            (6, 7),
            (8, 9),
        ] {
            g.add_edge(u, v, 100).unwrap();
        }
        g
    }

    #[test]
    fn hop_counts_ignore_weights() {
        let g = ten_vertex_undirected();
        assert_eq!(g.shortest_path_unweighted(9, 6).unwrap().distance(), Some(3));
        assert_eq!(g.shortest_path_unweighted(5, 0).unwrap().distance(), Some(1));
        assert_eq!(g.shortest_path_unweighted(0, 7).unwrap().distance(), Some(3));
        assert_eq!(g.shortest_path_unweighted(1, 4).unwrap().distance(), Some(3));
    }

    #[test]
    fn path_follows_parents() {
        let g = ten_vertex_undirected();
        let report = g.shortest_path_unweighted(5, 0).unwrap();
        assert_eq!(report.path(), Some(&[5, 0][..]));
        let path = g.shortest_path_unweighted(9, 6).unwrap().path().unwrap().to_vec();
        assert_eq!(path.len(), 4);
        assert_eq!((path[0], path[3]), (9, 6));
        for pair in path.windows(2) {
            assert!(g.has_edge(pair[0], pair[1]));
        }
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = Graph::create(3, true).unwrap();
        for key in 0..3 {
            g.add_vertex(key).unwrap();
        }
        g.add_edge(0, 1, 0).unwrap();
        g.add_edge(1, 2, 0).unwrap();
        assert_eq!(g.shortest_path_unweighted(0, 2).unwrap().distance(), Some(2));
        assert!(!g.shortest_path_unweighted(2, 0).unwrap().is_reachable());
    }

    #[test]
    fn tree_marks_unreachable_as_none() {
        let mut g = Graph::create(3, true).unwrap();
        for key in 0..3 {
            g.add_vertex(key).unwrap();
        }
        g.add_edge(0, 1, 0).unwrap();
        let tree = g.bfs_shortest_paths(0).unwrap();
        assert_eq!(tree.distances(), &[Some(0), Some(1), None]);
        assert_eq!(tree.parent_of(2), None);
    }
}
