//! Vertices and the edges they own.
//!
//! Edge endpoints are dense vertex indices rather than references: an edge names
//! its endpoints and the graph resolves them, so no edge can outlive or dangle
//! past the vertex store.

use crate::error::Result;

/// A directed, weighted edge owned by its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub(crate) src: u16,
    pub(crate) dst: u16,
    pub(crate) weight: i64,
}

impl Edge {
    /// Dense index of the source vertex.
    #[inline]
    pub fn src(&self) -> usize {
        usize::from(self.src)
    }

    /// Dense index of the destination vertex.
    #[inline]
    pub fn dst(&self) -> usize {
        usize::from(self.dst)
    }

    /// Edge weight. Unweighted graphs use `0`.
    #[inline]
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

/// A populated slot of the vertex store.
///
/// `index` is assigned once, at insertion, in insertion order. Outgoing edges are
/// appended to `edges` and iterated newest-first, which reproduces head insertion
/// into a singly linked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    key: u64,
    pub(crate) index: u16,
    edges: Vec<Edge>,
}

impl Vertex {
    pub(crate) fn new(key: u64, index: u16) -> Self {
        Self {
            key,
            index,
            edges: Vec::new(),
        }
    }

    /// Application-chosen identifier.
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Dense position in the vertex store.
    #[inline]
    pub fn index(&self) -> usize {
        usize::from(self.index)
    }

    /// Outgoing edges, most recently added first.
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = &Edge> + ExactSizeIterator + '_ {
        self.edges.iter().rev()
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Prepends `edge` to the edge list.
    ///
    /// # Errors
    /// Returns `OutOfMemory` if the list cannot grow.
    pub(crate) fn push_edge(&mut self, edge: Edge) -> Result<()> {
        debug_assert_eq!(edge.src, self.index);
        self.edges.try_reserve(1)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Releases every owned edge and returns how many there were.
    pub(crate) fn release_edges(&mut self) -> usize {
        self.edges.drain(..).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_iterate_newest_first() {
        let mut v = Vertex::new(10, 0);
        v.push_edge(Edge { src: 0, dst: 1, weight: 5 }).unwrap();
        v.push_edge(Edge { src: 0, dst: 2, weight: 0 }).unwrap();
        v.push_edge(Edge { src: 0, dst: 3, weight: -1 }).unwrap();

        let dsts: Vec<_> = v.edges().map(Edge::dst).collect();
        assert_eq!(dsts, vec![3, 2, 1]);
        assert_eq!(v.out_degree(), 3);
        assert_eq!(v.key(), 10);
        assert_eq!(v.index(), 0);
    }

    #[test]
    fn release_edges_empties_the_list() {
        let mut v = Vertex::new(1, 4);
        assert_eq!(v.release_edges(), 0);
        v.push_edge(Edge { src: 4, dst: 4, weight: 1 }).unwrap();
        assert_eq!(v.release_edges(), 1);
        assert_eq!(v.out_degree(), 0);
    }
}
