//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so the algorithms can share
//! visited sets and fallible scratch allocation without exposing them as part
//! of the public API surface.

pub(crate) mod visited;
