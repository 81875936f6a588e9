//! Error taxonomy shared by graph construction, traversal and shortest paths.

use std::collections::TryReserveError;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// The error type for every fallible graph operation.
///
/// Errors are returned to the caller and never terminate the process. Mutations
/// are not transactional: an error from [`Graph::add_edge`] on an undirected graph
/// may leave the forward edge in place without its mirror, and such a graph
/// should be torn down.
///
/// [`Graph::add_edge`]: crate::graph::Graph::add_edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Growing the vertex store, an edge list, or a transient per-call array failed.
    OutOfMemory,
    /// A vertex was added to a graph whose fixed capacity is exhausted.
    CapacityExceeded {
        /// The capacity the graph was created with.
        capacity: usize,
    },
    /// A key did not resolve to any populated vertex.
    VertexNotFound {
        /// The key that failed to resolve.
        key: u64,
    },
    /// An argument was outside the domain the operation accepts.
    InvalidArgument(&'static str),
    /// Bellman-Ford still found an improving edge after `V - 1` passes.
    NegativeCycle,
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfMemory => f.write_str("memory allocation failed"),
            Self::CapacityExceeded { capacity } => {
                write!(f, "graph capacity of {capacity} vertices exceeded")
            }
            Self::VertexNotFound { key } => write!(f, "no vertex with key {key}"),
            Self::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            Self::NegativeCycle => f.write_str("negative cycle detected"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<TryReserveError> for GraphError {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            GraphError::CapacityExceeded { capacity: 4 }.to_string(),
            "graph capacity of 4 vertices exceeded"
        );
        assert_eq!(GraphError::VertexNotFound { key: 42 }.to_string(), "no vertex with key 42");
        assert_eq!(
            GraphError::InvalidArgument("matrix is not square").to_string(),
            "invalid argument: matrix is not square"
        );
    }

    #[test]
    fn reserve_failure_maps_to_out_of_memory() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(GraphError::from(err), GraphError::OutOfMemory);
    }
}
