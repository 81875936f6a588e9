//! Read-only algorithms over [`Graph`](crate::graph::basic::Graph).
//!
//! Every entry point allocates its own transient state (visited flags,
//! worklists, distance tables) sized to the populated vertex count, so the
//! graph itself is never mutated and independent calls may share a `&Graph`.

pub mod cycle;
pub mod shortest_path;
pub mod traversal;

pub use cycle::CycleStrategy;
pub use shortest_path::{PathAlgorithm, PathReport, ShortestPathTree};
