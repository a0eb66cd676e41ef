//! # greedy-tour
//!
//! Approximate travelling-salesman tours over a complete city graph using
//! the greedy edge heuristic, in either direction (shortest or longest),
//! and sequencing of the selected edges into a walkable itinerary.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Edge, Graph, Selection, Tour)
//! - [`distance`] — Great-circle distance matrix and complete edge lists
//! - [`constructive`] — Greedy edge selection and union-find
//! - [`itinerary`] — Tour sequencing and the combined [`TourPlan`](itinerary::TourPlan)
//! - [`evaluation`] — Degree, walk, and closure invariant checks
//! - [`config`] — Tour configuration
//! - [`error`] — Error type for graph loading and configuration

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod itinerary;
pub mod models;

pub use error::{Error, Result};
