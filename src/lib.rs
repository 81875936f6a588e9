//! # `keygraph` - Keyed Graphs with Iterative Algorithms
//!
//! A small graph toolkit: vertices carry caller-chosen `u64` keys, edges carry
//! signed `i64` weights, and every algorithm runs iteratively over explicit,
//! capacity-bounded worklists.
//!
//! ## Guarantees
//!
//! ### Memory
//! - **Fallible allocation**: the vertex store, edge lists and every transient
//!   table are reserved with `try_reserve`; exhaustion surfaces as
//!   [`GraphError::OutOfMemory`] instead of aborting.
//! - **No recursion**: traversals, cycle detection and path reconstruction use
//!   bounded stacks and queues, so deep graphs cannot overflow the call stack.
//! - **Owned edges**: each vertex owns the edges leaving it. There is no shared
//!   ownership and no `unsafe` code.
//!
//! ### Invariants
//! - Vertex indices are dense: populated slots are exactly `0..vertex_count()`.
//! - Every edge is owned by its source and targets a populated index.
//!
//! [`Graph::validate_invariants`] checks these at runtime. In an undirected
//! graph built through [`Graph::add_edge`], every edge also has a mirror.
//!
//! ## Architecture
//!
//! 1. **Storage** ([`graph::basic`]): [`Graph`], [`Vertex`], [`Edge`] and the
//!    adjacency-matrix importer.
//! 2. **Worklists** ([`collections`]): [`BoundedStack`](collections::BoundedStack)
//!    and [`BoundedQueue`](collections::BoundedQueue).
//! 3. **Algorithms** ([`graph::algorithms`]): depth-first and breadth-first
//!    traversal covering every component, cycle detection with a back-edge test
//!    per directedness, and Dijkstra, unweighted BFS and Bellman-Ford shortest
//!    paths.
//!
//! Library code never prints. Diagnostics go through `tracing` (bridged to `log`),
//! and graphs and path reports render through `Display`.
//!
//! ## Example
//!
//! ```rust
//! use keygraph::Graph;
//!
//! let mut g = Graph::create(3, true)?;
//! for key in [10, 20, 30] {
//!     g.add_vertex(key)?;
//! }
//! g.add_edge(10, 20, 4)?;
//! g.add_edge(20, 30, 1)?;
//! g.add_edge(10, 30, 9)?;
//!
//! let report = g.shortest_path_dijkstra(10, 30)?;
//! assert_eq!(report.distance(), Some(5));
//! assert_eq!(report.path(), Some(&[10, 20, 30][..]));
//! assert!(!g.has_cycle()?);
//! # Ok::<(), keygraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    CycleStrategy, Edge, Graph, GraphStatistics, MatrixKind, PathAlgorithm, PathReport,
    ShortestPathTree, Teardown, Vertex, MAX_VERTICES,
};
