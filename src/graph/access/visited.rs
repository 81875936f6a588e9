//! Per-call visited flags and scratch arrays for graph algorithms.
//!
//! Every algorithm invocation owns its transient state, sized to the populated
//! vertex count and indexed by dense vertex index. Allocation is fallible so a
//! traversal can fail closed before invoking any visitor.

use crate::error::Result;

/// Allocates a `Vec` of `len` copies of `value`, reporting failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, value);
    Ok(v)
}

/// A dense visited set shared by every component launch of one traversal.
#[derive(Debug)]
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
    remaining: usize,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Result<Self> {
        Ok(Self {
            flags: try_filled(len, false)?,
            remaining: len,
        })
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags[idx]
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        if self.flags[idx] {
            return false;
        }
        self.flags[idx] = true;
        self.remaining -= 1;
        true
    }

    /// Returns `true` once every vertex has been visited.
    #[inline]
    pub(crate) fn all_visited(&self) -> bool {
        self.remaining == 0
    }

    /// Lowest unvisited index at or after `from`.
    pub(crate) fn next_unvisited(&self, from: usize) -> Option<usize> {
        (from..self.flags.len()).find(|&i| !self.flags[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_marks_once() {
        let mut visited = VisitedFlags::new(3).unwrap();
        assert!(visited.try_visit(1));
        assert!(!visited.try_visit(1));
        assert!(visited.is_visited(1));
        assert!(!visited.is_visited(0));
        assert!(!visited.all_visited());
    }

    #[test]
    fn next_unvisited_scans_in_index_order() {
        let mut visited = VisitedFlags::new(4).unwrap();
        visited.try_visit(0);
        visited.try_visit(2);
        assert_eq!(visited.next_unvisited(0), Some(1));
        assert_eq!(visited.next_unvisited(2), Some(3));
        visited.try_visit(1);
        visited.try_visit(3);
        assert_eq!(visited.next_unvisited(0), None);
        assert!(visited.all_visited());
    }

    #[test]
    fn try_filled_fills() {
        assert_eq!(try_filled(3, None::<i64>).unwrap(), vec![None, None, None]);
        assert!(try_filled::<u8>(0, 1).unwrap().is_empty());
    }
}
