//! Cycle detection on top of the iterative depth-first engine.
//!
//! The back-edge test depends on how edges are stored:
//! - undirected graphs hold every logical edge twice, so the edge leading back
//!   to the discovering vertex must be excluded (parent exclusion);
//! - directed graphs report a cycle only for an edge into a vertex that is still
//!   on the current exploration path (call-stack membership).

use crate::error::Result;
use crate::graph::algorithms::traversal::DepthFirst;
use crate::graph::basic::{Graph, Vertex};

/// Back-edge test used by [`Graph::has_cycle_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStrategy {
    /// A visited neighbor other than the discovering vertex closes a cycle.
    ParentExclusion,
    /// An edge into a vertex on the current depth-first path closes a cycle.
    CallStackMembership,
}

impl CycleStrategy {
    /// The strategy matching the graph's directedness.
    pub fn for_graph(graph: &Graph) -> Self {
        if graph.is_directed() {
            Self::CallStackMembership
        } else {
            Self::ParentExclusion
        }
    }
}

impl Graph {
    /// Returns `true` if any component contains a cycle.
    ///
    /// The search starts at index 0 and relaunches from every unvisited vertex in
    /// index order. Only the verdict is reported, not a witness.
    ///
    /// # Errors
    /// `OutOfMemory` if transient traversal state cannot be allocated.
    pub fn has_cycle(&self) -> Result<bool> {
        self.has_cycle_with(CycleStrategy::for_graph(self))
    }

    /// Like [`has_cycle`](Self::has_cycle) with an explicit back-edge test.
    ///
    /// # Errors
    /// `OutOfMemory` if transient traversal state cannot be allocated.
    pub fn has_cycle_with(&self, strategy: CycleStrategy) -> Result<bool> {
        if self.is_empty() {
            return Ok(false);
        }
        let mut engine = DepthFirst::new(self, Some(strategy))?;
        let mut ignore = |_: &Vertex| {};
        let mut cursor = 0;
        while let Some(start) = engine.next_unvisited(cursor) {
            if engine.launch(start, &mut ignore)? {
                return Ok(true);
            }
            cursor = start + 1;
        }
        Ok(false)
    }
}
