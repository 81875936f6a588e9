//! Iterative depth-first and breadth-first traversals with full component coverage.
//!
//! Both traversals run from the caller's start vertex first and then relaunch
//! from the lowest-index unvisited vertex until every populated vertex has been
//! visited exactly once. The visited set is shared across launches; all other
//! per-launch state is reset.
//!
//! Vertices are marked when they leave the worklist, so a vertex can sit in the
//! worklist several times (once per discovering edge). Worklists are therefore
//! sized to `V + E + 1`, a strict upper bound for one traversal.

use crate::collections::{BoundedQueue, BoundedStack};
use crate::error::Result;
use crate::graph::access::visited::{try_filled, VisitedFlags};
use crate::graph::algorithms::cycle::CycleStrategy;
use crate::graph::basic::{Graph, Vertex};

/// Depth-first worklist entry.
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Visit `vertex`, discovered through an edge from `parent`.
    Enter { vertex: usize, parent: Option<usize> },
    /// Every vertex reachable through `vertex` has been entered.
    Exit(usize),
}

/// What a depth-first launch does with already-visited neighbors.
#[derive(Debug)]
enum CycleCheck {
    Ignore,
    ParentExclusion,
    CallStack { on_path: Vec<bool> },
}

/// Reusable depth-first engine shared by traversal and cycle detection.
pub(crate) struct DepthFirst<'g> {
    graph: &'g Graph,
    visited: VisitedFlags,
    stack: BoundedStack<Frame>,
    check: CycleCheck,
}

impl<'g> DepthFirst<'g> {
    /// Allocates all transient state up front so a failure happens before any visit.
    pub(crate) fn new(graph: &'g Graph, strategy: Option<CycleStrategy>) -> Result<Self> {
        let n = graph.vertex_count();
        let check = match strategy {
            None => CycleCheck::Ignore,
            Some(CycleStrategy::ParentExclusion) => CycleCheck::ParentExclusion,
            Some(CycleStrategy::CallStackMembership) => CycleCheck::CallStack {
                on_path: try_filled(n, false)?,
            },
        };
        Ok(Self {
            graph,
            visited: VisitedFlags::new(n)?,
            stack: BoundedStack::with_capacity(worklist_capacity(graph))?,
            check,
        })
    }

    /// Explores the component reachable from `start`.
    ///
    /// Returns `true` if the active check saw an edge closing a cycle.
    pub(crate) fn launch<F>(&mut self, start: usize, visit: &mut F) -> Result<bool>
    where
        F: FnMut(&Vertex),
    {
        let graph = self.graph;
        let Self {
            visited,
            stack,
            check,
            ..
        } = self;

        tracing::trace!(start = graph.key_at(start), "depth-first launch");
        stack.clear();
        if let CycleCheck::CallStack { on_path } = check {
            on_path.fill(false);
        }

        let mut cycle = false;
        stack.push(Frame::Enter {
            vertex: start,
            parent: None,
        })?;

        while let Some(frame) = stack.pop() {
            let (v, parent) = match frame {
                Frame::Exit(v) => {
                    if let CycleCheck::CallStack { on_path } = check {
                        on_path[v] = false;
                    }
                    continue;
                }
                Frame::Enter { vertex, parent } => (vertex, parent),
            };
            if !visited.try_visit(v) {
                continue;
            }
            if let Some(vertex) = graph.vertex_at(v) {
                visit(vertex);
            }
            if let CycleCheck::CallStack { on_path } = check {
                on_path[v] = true;
                stack.push(Frame::Exit(v))?;
            }

            for edge in graph.edges_at(v) {
                let w = edge.dst();
                if !visited.is_visited(w) {
                    stack.push(Frame::Enter {
                        vertex: w,
                        parent: Some(v),
                    })?;
                    continue;
                }
                let closes = match check {
                    CycleCheck::Ignore => false,
                    CycleCheck::ParentExclusion => parent != Some(w),
                    CycleCheck::CallStack { on_path } => on_path[w],
                };
                if closes && !cycle {
                    tracing::debug!(
                        from = graph.key_at(v),
                        to = graph.key_at(w),
                        "edge closes a cycle"
                    );
                    cycle = true;
                }
            }
        }

        Ok(cycle)
    }

    /// Lowest-index vertex at or after `from` not yet visited by any launch.
    pub(crate) fn next_unvisited(&self, from: usize) -> Option<usize> {
        if self.visited.all_visited() {
            None
        } else {
            self.visited.next_unvisited(from)
        }
    }
}

fn worklist_capacity(graph: &Graph) -> usize {
    graph.vertex_count() + graph.edge_count() + 1
}

impl Graph {
    /// Depth-first traversal from `start_key`, then from every unvisited vertex in
    /// index order, calling `visit` exactly once per populated vertex.
    ///
    /// Within a component neighbors are pushed in edge-list order (newest first),
    /// so the oldest edge out of a vertex is followed first. This is the reverse
    /// of BFS, which dequeues the newest edge first; both orders are pinned by
    /// the scenario tests.
    ///
    /// # Errors
    /// - `VertexNotFound` if `start_key` is absent.
    /// - `OutOfMemory` if transient state cannot be allocated; `visit` is not called.
    pub fn dfs<F>(&self, start_key: u64, mut visit: F) -> Result<()>
    where
        F: FnMut(&Vertex),
    {
        let start = self.resolve(start_key)?;
        let mut engine = DepthFirst::new(self, None)?;
        engine.launch(start, &mut visit)?;
        let mut cursor = 0;
        while let Some(next) = engine.next_unvisited(cursor) {
            engine.launch(next, &mut visit)?;
            cursor = next + 1;
        }
        Ok(())
    }

    /// Keys in depth-first visitation order.
    ///
    /// # Errors
    /// Same as [`dfs`](Self::dfs).
    pub fn dfs_order(&self, start_key: u64) -> Result<Vec<u64>> {
        let mut order = Vec::new();
        order.try_reserve_exact(self.vertex_count())?;
        self.dfs(start_key, |v| order.push(v.key()))?;
        Ok(order)
    }

    /// Level-aware breadth-first traversal with full component coverage.
    ///
    /// `visit` receives each vertex once together with its level: the hop count
    /// from the vertex that launched its component (launch vertices are level 0).
    ///
    /// # Errors
    /// - `VertexNotFound` if `start_key` is absent.
    /// - `OutOfMemory` if transient state cannot be allocated; `visit` is not called.
    pub fn bfs_with_depth<F>(&self, start_key: u64, mut visit: F) -> Result<()>
    where
        F: FnMut(&Vertex, usize),
    {
        let start = self.resolve(start_key)?;
        let mut visited = VisitedFlags::new(self.vertex_count())?;
        let mut queue = BoundedQueue::with_capacity(worklist_capacity(self))?;

        let mut cursor = 0;
        let mut launch = Some(start);
        while let Some(root) = launch {
            tracing::trace!(start = self.key_at(root), "breadth-first launch");
            queue.enqueue(root)?;
            let mut depth = 0;
            while !queue.is_empty() {
                let width = queue.len();
                for _ in 0..width {
                    let Some(v) = queue.dequeue() else { break };
                    if !visited.try_visit(v) {
                        continue;
                    }
                    if let Some(vertex) = self.vertex_at(v) {
                        visit(vertex, depth);
                    }
                    for edge in self.edges_at(v) {
                        if !visited.is_visited(edge.dst()) {
                            queue.enqueue(edge.dst())?;
                        }
                    }
                }
                depth += 1;
            }
            launch = if visited.all_visited() {
                None
            } else {
                visited.next_unvisited(cursor)
            };
            if let Some(next) = launch {
                cursor = next + 1;
            }
        }
        Ok(())
    }

    /// Breadth-first traversal; like [`bfs_with_depth`](Self::bfs_with_depth) without levels.
    ///
    /// Neighbors are enqueued in edge-list order, so the newest edge out of a
    /// vertex is followed first.
    ///
    /// # Errors
    /// Same as [`bfs_with_depth`](Self::bfs_with_depth).
    pub fn bfs<F>(&self, start_key: u64, mut visit: F) -> Result<()>
    where
        F: FnMut(&Vertex),
    {
        self.bfs_with_depth(start_key, |v, _| visit(v))
    }

    /// Keys in breadth-first visitation order.
    ///
    /// # Errors
    /// Same as [`bfs_with_depth`](Self::bfs_with_depth).
    pub fn bfs_order(&self, start_key: u64) -> Result<Vec<u64>> {
        let mut order = Vec::new();
        order.try_reserve_exact(self.vertex_count())?;
        self.bfs(start_key, |v| order.push(v.key()))?;
        Ok(order)
    }
}
