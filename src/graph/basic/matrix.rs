//! Dense adjacency-matrix import.
//!
//! The matrix is read as directed: every non-zero cell `(i, j)` becomes exactly
//! one edge `i -> j`. Requesting an undirected result only changes the graph's
//! flag afterwards; mirror edges for an asymmetric matrix are *not* synthesized,
//! so callers wanting undirected semantics must supply a symmetric matrix.

use crate::error::{GraphError, Result};
use crate::graph::basic::adjacency_graph::{Graph, MAX_VERTICES};

/// How non-zero matrix cells translate into edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixKind {
    /// 0/1 connectivity: every non-zero cell becomes a weight-0 edge.
    #[default]
    Binary,
    /// Every non-zero cell becomes an edge weighted by the cell value.
    Weighted,
}

impl Graph {
    /// Builds a graph from a square adjacency matrix.
    ///
    /// Vertices are keyed by row index `0..N`. Within a row, cells are read left to
    /// right, so each vertex's edge list ends up ordered by descending column.
    ///
    /// # Errors
    /// - `InvalidArgument` if the matrix is not square or has more than
    ///   [`MAX_VERTICES`] rows.
    /// - `OutOfMemory` if the vertex store or an edge list cannot grow.
    pub fn from_adjacency_matrix<R: AsRef<[i64]>>(
        matrix: &[R],
        kind: MatrixKind,
        is_directed: bool,
    ) -> Result<Self> {
        let n = matrix.len();
        if n > MAX_VERTICES {
            return Err(GraphError::InvalidArgument(
                "matrix is larger than the dense index range",
            ));
        }
        if matrix.iter().any(|row| row.as_ref().len() != n) {
            return Err(GraphError::InvalidArgument("adjacency matrix is not square"));
        }

        let mut graph = Graph::create(n, true)?;
        for key in 0..n as u64 {
            graph.add_vertex(key)?;
        }

        for (i, row) in matrix.iter().enumerate() {
            for (j, &cell) in row.as_ref().iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let weight = match kind {
                    MatrixKind::Binary => 0,
                    MatrixKind::Weighted => cell,
                };
                graph.add_directed_edge(i, j, weight)?;
            }
        }

        graph.set_directed(is_directed);
        tracing::debug!(
            vertices = n,
            edges = graph.edge_count(),
            is_directed,
            "imported adjacency matrix"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMMETRIC: [[i64; 5]; 5] = [
        [0, 0, 1, 0, 0],
        [0, 0, 0, 1, 1],
        [1, 0, 0, 1, 0],
        [0, 1, 1, 0, 1],
        [0, 1, 0, 1, 0],
    ];

    #[test]
    fn one_edge_per_nonzero_cell() {
        let g = Graph::from_adjacency_matrix(&SYMMETRIC, MatrixKind::Binary, false).unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.capacity(), 5);
        assert_eq!(g.edge_count(), 10);
        assert!(!g.is_directed());
        assert!(g.has_edge(0, 2) && g.has_edge(2, 0));
        assert!(g.has_edge(3, 4) && g.has_edge(4, 3));
        assert!(g.validate_invariants());
    }

    #[test]
    fn binary_cells_become_weight_zero() {
        let g = Graph::from_adjacency_matrix(&[[0i64, 5], [0, 0]], MatrixKind::Binary, true).unwrap();
        assert_eq!(g.edge_weight(0, 1), Some(0));
    }

    #[test]
    fn weighted_cells_keep_their_value() {
        let matrix = vec![vec![0i64, 3, 0], vec![0, 0, -2], vec![7, 0, 0]];
        let g = Graph::from_adjacency_matrix(&matrix, MatrixKind::Weighted, true).unwrap();
        assert_eq!(g.edge_weight(0, 1), Some(3));
        assert_eq!(g.edge_weight(1, 2), Some(-2));
        assert_eq!(g.edge_weight(2, 0), Some(7));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn row_edges_are_ordered_by_descending_column() {
        let g = Graph::from_adjacency_matrix(&SYMMETRIC, MatrixKind::Binary, true).unwrap();
        let dsts: Vec<_> = g.vertex(3).unwrap().edges().map(|e| e.dst()).collect();
        assert_eq!(dsts, vec![4, 2, 1]);
    }

    #[test]
    fn undirected_flag_does_not_mirror_asymmetric_cells() {
        let g = Graph::from_adjacency_matrix(&[[0i64, 1], [0, 0]], MatrixKind::Binary, false).unwrap();
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn later_edges_on_an_imported_undirected_graph_are_mirrored() {
        let mut g = Graph::from_adjacency_matrix(&SYMMETRIC, MatrixKind::Binary, false).unwrap();
        g.add_edge(0, 1, 0).unwrap();
        assert!(g.has_edge(0, 1) && g.has_edge(1, 0));
        assert_eq!(g.edge_count(), 12);
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let matrix = vec![vec![0i64, 1], vec![0]];
        assert!(matches!(
            Graph::from_adjacency_matrix(&matrix, MatrixKind::Binary, true),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_matrix_yields_empty_graph() {
        let matrix: Vec<Vec<i64>> = Vec::new();
        let g = Graph::from_adjacency_matrix(&matrix, MatrixKind::Binary, true).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.capacity(), 0);
    }
}
