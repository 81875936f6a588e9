//! A keyed adjacency-list graph with a fixed-capacity vertex store.
//!
//! Vertices are identified by an application key and stored densely in insertion
//! order; each vertex owns its outgoing edge list. An undirected logical edge is
//! stored as two directed edges, one owned by each endpoint.
//!
//! All algorithm state (visited flags, distances, parents) lives in the calling
//! algorithm, so a `&Graph` can be shared freely between read-only traversals.

use core::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::basic::vertex::{Edge, Vertex};

/// Largest capacity a graph can be created with. Dense indices are `u16`.
pub const MAX_VERTICES: usize = u16::MAX as usize;

/// A directed or undirected graph over at most `capacity` keyed vertices.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `create` | \(O(1)\) | Reserves the whole vertex store up front |
/// | `add_vertex` | \(O(1)\) | Append-only, fails at capacity |
/// | `add_edge` | \(O(V)\) | Two linear key resolutions dominate |
/// | `index_of` | \(O(V)\) | Linear scan, first match wins |
/// | `vertex_at` | \(O(1)\) | Dense index lookup |
/// | `edge_count` | \(O(V)\) | Sums list lengths |
/// | `delete` | \(O(V + E)\) | Edges first, then vertices |
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    capacity: usize,
    is_directed: bool,
}

/// What [`Graph::delete`] released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    /// Directed edge objects freed.
    pub edges_freed: usize,
    /// Populated vertices freed.
    pub vertices_freed: usize,
}

impl Graph {
    /// Creates an empty graph able to hold `capacity` vertices.
    ///
    /// # Errors
    /// - `InvalidArgument` if `capacity` exceeds [`MAX_VERTICES`].
    /// - `OutOfMemory` if the vertex store cannot be reserved.
    pub fn create(capacity: usize, is_directed: bool) -> Result<Self> {
        if capacity > MAX_VERTICES {
            return Err(GraphError::InvalidArgument(
                "capacity exceeds the dense index range",
            ));
        }
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(capacity)?;
        tracing::debug!(capacity, is_directed, "created graph");
        Ok(Self {
            vertices,
            capacity,
            is_directed,
        })
    }

    /// Appends a vertex with `key` and returns its dense index.
    ///
    /// No uniqueness check is made: with duplicate keys, key resolution finds
    /// the earliest vertex and later duplicates are unreachable by key.
    ///
    /// # Errors
    /// `CapacityExceeded` when every slot is populated; the graph is unchanged.
    pub fn add_vertex(&mut self, key: u64) -> Result<usize> {
        let next = self.vertices.len();
        if next == self.capacity {
            tracing::warn!(key, capacity = self.capacity, "vertex store is full");
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let index = u16::try_from(next).map_err(|_| GraphError::CapacityExceeded {
            capacity: self.capacity,
        })?;
        self.vertices.push(Vertex::new(key, index));
        Ok(next)
    }

    /// Adds an edge `src_key -> dst_key` with `weight`.
    ///
    /// Undirected graphs additionally get the mirror edge `dst_key -> src_key`
    /// with the same weight. The mirror is not rolled back if the forward edge
    /// succeeded and the mirror failed.
    ///
    /// # Errors
    /// - `VertexNotFound` if either key is absent (nothing is added).
    /// - `OutOfMemory` if an edge list cannot grow.
    pub fn add_edge(&mut self, src_key: u64, dst_key: u64, weight: i64) -> Result<()> {
        let src = self.resolve(src_key)?;
        let dst = self.resolve(dst_key)?;
        self.add_directed_edge(src, dst, weight)?;
        if !self.is_directed {
            self.add_directed_edge(dst, src, weight)?;
        }
        Ok(())
    }

    /// Prepends a single directed edge between two populated indices.
    pub(crate) fn add_directed_edge(&mut self, src: usize, dst: usize, weight: i64) -> Result<()> {
        let dst_index = self.vertices[dst].index;
        let vertex = &mut self.vertices[src];
        let edge = Edge {
            src: vertex.index,
            dst: dst_index,
            weight,
        };
        vertex.push_edge(edge)
    }

    /// Dense index of the first vertex whose key is `key`.
    pub fn index_of(&self, key: u64) -> Option<usize> {
        self.vertices.iter().position(|v| v.key() == key)
    }

    /// Like [`index_of`](Self::index_of), but reports a miss as an error.
    ///
    /// # Errors
    /// `VertexNotFound` if no populated vertex has `key`.
    pub fn resolve(&self, key: u64) -> Result<usize> {
        self.index_of(key).ok_or_else(|| {
            tracing::warn!(key, "key does not resolve to a vertex");
            GraphError::VertexNotFound { key }
        })
    }

    /// The first vertex whose key is `key`.
    pub fn vertex(&self, key: u64) -> Option<&Vertex> {
        self.index_of(key).map(|i| &self.vertices[i])
    }

    /// The vertex at dense `index`, if populated.
    #[inline]
    pub fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Populated vertices in index order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// Key of the vertex at a populated `index`.
    #[inline]
    pub(crate) fn key_at(&self, index: usize) -> u64 {
        self.vertices[index].key()
    }

    /// Outgoing edges of a populated `index`, newest first.
    #[inline]
    pub(crate) fn edges_at(&self, index: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices[index].edges()
    }

    /// Number of vertex slots fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of populated vertices, which is also the next free index.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `add_edge` stores one edge (directed) or a mirrored pair.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    pub(crate) fn set_directed(&mut self, is_directed: bool) {
        self.is_directed = is_directed;
    }

    /// Number of directed edge objects. An undirected logical edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    /// Returns `true` if an edge `src_key -> dst_key` is stored.
    pub fn has_edge(&self, src_key: u64, dst_key: u64) -> bool {
        match (self.index_of(src_key), self.index_of(dst_key)) {
            (Some(src), Some(dst)) => self.vertices[src].edges().any(|e| e.dst() == dst),
            _ => false,
        }
    }

    /// Weight of the newest edge `src_key -> dst_key`, if any.
    pub fn edge_weight(&self, src_key: u64, dst_key: u64) -> Option<i64> {
        let src = self.index_of(src_key)?;
        let dst = self.index_of(dst_key)?;
        self.vertices[src]
            .edges()
            .find(|e| e.dst() == dst)
            .map(Edge::weight)
    }

    /// Out-degree of the vertex with `key`.
    ///
    /// # Errors
    /// `VertexNotFound` if `key` is absent.
    pub fn out_degree(&self, key: u64) -> Result<usize> {
        let index = self.resolve(key)?;
        Ok(self.vertices[index].out_degree())
    }

    /// Computes basic graph statistics over populated vertices.
    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = self.vertices.iter().map(Vertex::out_degree).collect();
        degrees.sort_unstable();

        let min_degree = degrees.first().copied().unwrap_or(0);
        let max_degree = degrees.last().copied().unwrap_or(0);
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if vertex_count == 0 {
                0.0
            } else {
                edge_count as f64 / vertex_count as f64
            },
        }
    }

    /// Checks the structural invariants of the vertex store.
    ///
    /// This method checks that:
    /// 1. The populated prefix never exceeds the capacity
    /// 2. Every vertex's stored index equals its position
    /// 3. Every edge is owned by its source and targets a populated vertex
    pub fn validate_invariants(&self) -> bool {
        if self.vertices.len() > self.capacity {
            return false;
        }
        let populated = self.vertices.len();
        self.vertices.iter().enumerate().all(|(position, vertex)| {
            vertex.index() == position
                && vertex
                    .edges()
                    .all(|e| e.src() == position && e.dst() < populated)
        })
    }

    /// Tears the graph down: every edge list first, then the vertex store.
    pub fn delete(mut self) -> Teardown {
        let edges_freed = self.vertices.iter_mut().map(Vertex::release_edges).sum();
        let vertices_freed = self.vertices.len();
        self.vertices.clear();
        tracing::debug!(edges_freed, vertices_freed, "deleted graph");
        Teardown {
            edges_freed,
            vertices_freed,
        }
    }
}

/// Renders the diagnostic adjacency dump: capacity, next free index, then one
/// line per populated vertex listing destination keys (and non-zero weights).
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GRAPH INFO:")?;
        writeln!(f, "  # of Vertices: {}", self.capacity)?;
        writeln!(f, "  Next Free Vertex Index: {}", self.vertex_count())?;
        writeln!(f, "  Adjacency List:")?;
        for vertex in &self.vertices {
            write!(f, "    Key: {} --> ", vertex.key())?;
            for edge in vertex.edges() {
                let dst = self.key_at(edge.dst());
                if edge.weight() == 0 {
                    write!(f, "{dst} ---> ")?;
                } else {
                    write!(f, "{dst} (wt: {}) ---> ", edge.weight())?;
                }
            }
            writeln!(f, "##")?;
        }
        Ok(())
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Number of populated vertices.
    pub vertex_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree \(= m/n\).
    pub average_degree: f64,
}
