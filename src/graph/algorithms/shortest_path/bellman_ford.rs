//! Bellman-Ford relaxation with negative-cycle detection.
//!
//! ### Performance Characteristics
//!
//! | Phase          | Cost     |
//! |----------------|----------|
//! | Relaxation     | O(V·E), stops early once a pass changes nothing |
//! | Detection pass | O(V + E) |
//! | Extra memory   | O(V)     |

use crate::error::{GraphError, Result};
use crate::graph::basic::Graph;

use super::{PathAlgorithm, PathReport, ShortestPathTree};

/// One sweep over every edge list in index order; returns whether anything improved.
fn relax_all(graph: &Graph, tree: &mut ShortestPathTree) -> bool {
    let mut changed = false;
    for u in 0..graph.vertex_count() {
        if tree.dist(u).is_none() {
            continue;
        }
        for edge in graph.edges_at(u) {
            changed |= tree.relax(u, edge.dst(), edge.weight());
        }
    }
    changed
}

/// Returns `true` if any edge out of a reached vertex could still shorten a path.
fn any_improvable(graph: &Graph, tree: &ShortestPathTree) -> bool {
    (0..graph.vertex_count()).any(|u| {
        graph
            .edges_at(u)
            .any(|edge| tree.can_improve(u, edge.dst(), edge.weight()))
    })
}

pub(crate) fn run(graph: &Graph, source: usize) -> Result<ShortestPathTree> {
    let n = graph.vertex_count();
    let mut tree = ShortestPathTree::new(graph, source)?;

    for pass in 1..n {
        if !relax_all(graph, &mut tree) {
            tracing::trace!(pass, "bellman-ford converged early");
            return Ok(tree);
        }
    }
    if any_improvable(graph, &tree) {
        tracing::warn!(source = graph.key_at(source), "negative cycle reachable from source");
        return Err(GraphError::NegativeCycle);
    }
    Ok(tree)
}

impl Graph {
    /// Distances and parents from `src_key`, tolerating negative weights.
    ///
    /// # Errors
    /// - `VertexNotFound` for an unknown source.
    /// - `NegativeCycle` if a negative-weight cycle is reachable from the source.
    /// - `OutOfMemory` if the tables cannot be allocated.
    pub fn bellman_ford(&self, src_key: u64) -> Result<ShortestPathTree> {
        let src = self.resolve(src_key)?;
        run(self, src)
    }

    /// Shortest weighted path from `src_key` to `dst_key`, tolerating negative weights.
    ///
    /// No path is reported when a negative cycle is reachable.
    ///
    /// # Errors
    /// As [`bellman_ford`](Self::bellman_ford), plus `VertexNotFound` for an
    /// unknown destination.
    pub fn shortest_path_bellman_ford(&self, src_key: u64, dst_key: u64) -> Result<PathReport> {
        self.shortest_path_report(src_key, dst_key, PathAlgorithm::BellmanFord, run)
    }
}
