//! Graph storage.
//!
//! Vertices live in a dense, index-addressed store; each vertex owns the list
//! of edges leaving it.

pub mod adjacency_graph;
pub mod matrix;
pub mod vertex;

pub use adjacency_graph::{Graph, GraphStatistics, Teardown, MAX_VERTICES};
pub use matrix::MatrixKind;
pub use vertex::{Edge, Vertex};
