//! Domain model types for greedy tours.
//!
//! Provides the read-only reference data (cities, weighted edges, the graph
//! that holds them), the optimization direction, and the two results of a
//! tour computation: the unordered edge [`Selection`] and the ordered
//! [`Tour`], plus the [`Violation`]s reported when either breaks an
//! invariant.

mod city;
mod edge;
mod graph;
mod selection;
mod tour;
mod violation;

pub use city::{City, NodeId, EARTH_RADIUS_KM, ORIGIN};
pub use edge::{Direction, Edge};
pub use graph::Graph;
pub use selection::Selection;
pub use tour::Tour;
pub use violation::{Violation, ViolationType};
