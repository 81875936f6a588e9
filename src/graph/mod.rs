//! Directed and undirected graphs keyed by caller-chosen `u64` keys.
//!
//! The graph is organized into layers:
//! - `basic`: vertex store, edge lists and adjacency-matrix import
//! - `algorithms`: traversals, cycle detection and shortest paths

pub mod algorithms;
pub mod basic;
pub(crate) mod access;

pub use algorithms::{CycleStrategy, PathAlgorithm, PathReport, ShortestPathTree};
pub use basic::{Edge, Graph, GraphStatistics, MatrixKind, Teardown, Vertex, MAX_VERTICES};
