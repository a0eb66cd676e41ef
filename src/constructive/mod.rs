//! Constructive heuristics for building tours from an edge list.
//!
//! - [`greedy_edge`] — Greedy edge selection under degree and cycle constraints, O(m log m)
//! - [`DisjointSet`] — Union-find used to detect premature cycles

mod disjoint_set;
mod greedy_edge;

pub use disjoint_set::DisjointSet;
pub use greedy_edge::{greedy_edge, greedy_edge_over};
