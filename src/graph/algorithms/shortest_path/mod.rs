//! Single-source shortest paths: result tables, path reconstruction and reports.
//!
//! Every engine fills a [`ShortestPathTree`] indexed by dense vertex index:
//! `distances[v]` is `None` while `v` is unreachable ("infinite") and
//! `parents[v]` names the vertex `v` was last relaxed from. The source is its
//! own parent at distance `0`.
//!
//! Distances are `i64` and never wrap. A relaxation whose sum exceeds `i64::MAX`
//! is skipped; one that falls below `i64::MIN` saturates there.

pub mod bellman_ford;
pub mod dijkstra;
pub mod unweighted;

use core::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::graph::access::visited::try_filled;
use crate::graph::basic::Graph;

/// Engine that produced a [`PathReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathAlgorithm {
    /// Array-scan Dijkstra for non-negative weights.
    Dijkstra,
    /// Breadth-first hop counts; weights are ignored.
    UnweightedBfs,
    /// Edge relaxation tolerating negative weights.
    BellmanFord,
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dijkstra => "dijkstra",
            Self::UnweightedBfs => "unweighted-bfs",
            Self::BellmanFord => "bellman-ford",
        })
    }
}

/// Distance and parent tables from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    source: usize,
    keys: Vec<u64>,
    distances: Vec<Option<i64>>,
    parents: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// Tables for `graph` with only `source` reached.
    pub(crate) fn new(graph: &Graph, source: usize) -> Result<Self> {
        let n = graph.vertex_count();
        let mut keys = Vec::new();
        keys.try_reserve_exact(n)?;
        keys.extend(graph.vertices().map(|v| v.key()));

        let mut distances = try_filled(n, None)?;
        let mut parents = try_filled(n, None)?;
        distances[source] = Some(0);
        parents[source] = Some(source);
        Ok(Self {
            source,
            keys,
            distances,
            parents,
        })
    }

    #[inline]
    pub(crate) fn dist(&self, v: usize) -> Option<i64> {
        self.distances[v]
    }

    #[inline]
    pub(crate) fn set(&mut self, v: usize, distance: i64, parent: usize) {
        self.distances[v] = Some(distance);
        self.parents[v] = Some(parent);
    }

    /// Returns `true` if `dist(u) + weight` improves on `dist(v)`, and records it.
    ///
    /// A sum above `i64::MAX` is skipped. A sum below `i64::MIN` saturates there.
    pub(crate) fn relax(&mut self, u: usize, v: usize, weight: i64) -> bool {
        let Some(du) = self.distances[u] else {
            return false;
        };
        let candidate = match du.checked_add(weight) {
            Some(sum) => sum,
            None if weight < 0 => {
                tracing::trace!(from = self.keys[u], to = self.keys[v], "relaxation underflows, saturated");
                i64::MIN
            }
            None => {
                tracing::trace!(from = self.keys[u], to = self.keys[v], "relaxation overflows, skipped");
                return false;
            }
        };
        if self.distances[v].map_or(true, |dv| candidate < dv) {
            self.set(v, candidate, u);
            return true;
        }
        false
    }

    /// Returns `true` if `dist(u) + weight` is strictly below a reached `dist(v)`.
    ///
    /// Compared in `i128`, so a sum that `relax` saturated still counts.
    pub(crate) fn can_improve(&self, u: usize, v: usize, weight: i64) -> bool {
        match (self.distances[u], self.distances[v]) {
            (Some(du), Some(dv)) => i128::from(du) + i128::from(weight) < i128::from(dv),
            _ => false,
        }
    }

    /// Key of the source vertex.
    pub fn source_key(&self) -> u64 {
        self.keys[self.source]
    }

    /// Distances by dense vertex index; `None` means unreachable.
    pub fn distances(&self) -> &[Option<i64>] {
        &self.distances
    }

    /// Parent keys by dense vertex index; `None` means unreachable.
    pub fn parent_keys(&self) -> impl ExactSizeIterator<Item = Option<u64>> + '_ {
        self.parents.iter().map(|p| p.map(|i| self.keys[i]))
    }

    fn index_of(&self, key: u64) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }

    /// Shortest distance to the vertex with `key`, if reachable.
    pub fn distance_to(&self, key: u64) -> Option<i64> {
        self.index_of(key).and_then(|i| self.distances[i])
    }

    /// Key of the predecessor of `key` on its shortest path.
    pub fn parent_of(&self, key: u64) -> Option<u64> {
        self.index_of(key)
            .and_then(|i| self.parents[i])
            .map(|p| self.keys[p])
    }

    /// Keys from the source to `key`, source first.
    pub fn path_to(&self, key: u64) -> Option<Vec<u64>> {
        let target = self.index_of(key)?;
        let indices = self.path_indices(target)?;
        Some(indices.into_iter().map(|i| self.keys[i]).collect())
    }

    /// Walks parents back from `target`, bounded by the vertex count so a
    /// malformed parent chain cannot loop.
    fn path_indices(&self, target: usize) -> Option<Vec<usize>> {
        self.distances[target]?;
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            if path.len() > self.keys.len() {
                return None;
            }
            current = self.parents[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    fn report(self, algorithm: PathAlgorithm, destination: usize) -> PathReport {
        let distance = self.distances[destination];
        let path = self
            .path_indices(destination)
            .map(|p| p.into_iter().map(|i| self.keys[i]).collect());
        PathReport {
            algorithm,
            source: self.source_key(),
            destination: self.keys[destination],
            distance,
            path,
            tree: self,
        }
    }
}

/// The outcome of a source-to-destination query.
///
/// `Display` renders the distance table, the parent table and either the path
/// or `no path found`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    algorithm: PathAlgorithm,
    source: u64,
    destination: u64,
    distance: Option<i64>,
    path: Option<Vec<u64>>,
    tree: ShortestPathTree,
}

impl PathReport {
    /// Engine that produced this report.
    pub fn algorithm(&self) -> PathAlgorithm {
        self.algorithm
    }

    /// Source key.
    pub fn source(&self) -> u64 {
        self.source
    }

    /// Destination key.
    pub fn destination(&self) -> u64 {
        self.destination
    }

    /// Total path weight (hop count for the unweighted engine).
    pub fn distance(&self) -> Option<i64> {
        self.distance
    }

    /// Keys from source to destination, source first.
    pub fn path(&self) -> Option<&[u64]> {
        self.path.as_deref()
    }

    /// Returns `true` if the destination is reachable.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// The full single-source tables.
    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Shortest path ({}) from {} to {}",
            self.algorithm, self.source, self.destination
        )?;
        write!(f, "  Distance:")?;
        for d in &self.tree.distances {
            match d {
                Some(d) => write!(f, " {d}")?,
                None => write!(f, " INF")?,
            }
        }
        writeln!(f)?;
        write!(f, "  Parent:  ")?;
        for p in self.tree.parent_keys() {
            match p {
                Some(p) => write!(f, " {p}")?,
                None => write!(f, " -")?,
            }
        }
        writeln!(f)?;
        match (&self.path, self.distance) {
            (Some(path), Some(distance)) => {
                write!(f, "  Path:")?;
                for (i, key) in path.iter().enumerate() {
                    if i == 0 {
                        write!(f, " {key}")?;
                    } else {
                        write!(f, " -> {key}")?;
                    }
                }
                writeln!(f, " (distance {distance})")
            }
            _ => writeln!(
                f,
                "  No path found from {} to {}",
                self.source, self.destination
            ),
        }
    }
}

impl Graph {
    /// Resolves both endpoints, runs `engine` from the source and reports on the destination.
    fn shortest_path_report<E>(
        &self,
        src_key: u64,
        dst_key: u64,
        algorithm: PathAlgorithm,
        engine: E,
    ) -> Result<PathReport>
    where
        E: FnOnce(&Self, usize) -> Result<ShortestPathTree>,
    {
        let src = self.resolve(src_key)?;
        let dst = self.resolve(dst_key)?;
        let tree = engine(self, src)?;
        let report = tree.report(algorithm, dst);
        tracing::debug!(
            %algorithm,
            source = src_key,
            destination = dst_key,
            distance = ?report.distance,
            "shortest path computed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: u64) -> Graph {
        let mut g = Graph::create(n as usize, true).unwrap();
        for key in 0..n {
            g.add_vertex(100 + key).unwrap();
        }
        g
    }

    #[test]
    fn fresh_tree_reaches_only_the_source() {
        let g = line(3);
        let tree = ShortestPathTree::new(&g, 1).unwrap();
        assert_eq!(tree.distances(), &[None, Some(0), None]);
        assert_eq!(tree.parent_of(101), Some(101));
        assert_eq!(tree.path_to(101), Some(vec![101]));
        assert_eq!(tree.path_to(100), None);
        assert_eq!(tree.source_key(), 101);
    }

    #[test]
    fn relax_records_improvements_only() {
        let g = line(3);
        let mut tree = ShortestPathTree::new(&g, 0).unwrap();
        assert!(tree.relax(0, 1, 5));
        assert!(!tree.relax(0, 1, 7));
        assert!(tree.relax(0, 1, 2));
        assert!(!tree.relax(2, 1, 0), "unreachable source never relaxes");
        assert_eq!(tree.distance_to(101), Some(2));
        assert_eq!(tree.parent_of(101), Some(100));
    }

    #[test]
    fn relax_skips_overflow() {
        let g = line(3);
        let mut tree = ShortestPathTree::new(&g, 0).unwrap();
        tree.set(1, i64::MAX - 1, 0);
        assert!(!tree.relax(1, 2, 5));
        assert_eq!(tree.distance_to(102), None);
    }

    #[test]
    fn relax_saturates_underflow() {
        let g = line(3);
        let mut tree = ShortestPathTree::new(&g, 0).unwrap();
        tree.set(1, i64::MIN + 1, 0);
        assert!(tree.relax(1, 2, -5));
        assert_eq!(tree.distance_to(102), Some(i64::MIN));
        assert!(!tree.relax(1, 2, -5));
        assert!(tree.can_improve(1, 2, -5));
        assert!(!tree.can_improve(1, 2, 0));
    }

    #[test]
    fn broken_parent_chain_yields_no_path() {
        let g = line(3);
        let mut tree = ShortestPathTree::new(&g, 0).unwrap();
        tree.set(1, 1, 2);
        tree.set(2, 1, 1);
        assert_eq!(tree.path_to(102), None);
    }

    #[test]
    fn report_display_without_path() {
        let g = line(2);
        let report = ShortestPathTree::new(&g, 0)
            .unwrap()
            .report(PathAlgorithm::Dijkstra, 1);
        assert!(!report.is_reachable());
        assert_eq!(report.path(), None);
        let text = report.to_string();
        assert!(text.contains("Distance: 0 INF"));
        assert!(text.contains("Parent:   100 -"));
        assert!(text.contains("No path found from 100 to 101"));
    }

    #[test]
    fn report_serializes_algorithm_in_kebab_case() {
        let g = line(1);
        let report = ShortestPathTree::new(&g, 0)
            .unwrap()
            .report(PathAlgorithm::BellmanFord, 0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "bellman-ford");
        assert_eq!(json["distance"], 0);
        assert_eq!(json["path"], serde_json::json!([100]));
    }
}
