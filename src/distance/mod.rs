//! Distance matrices.
//!
//! Provides a dense distance matrix computed from city coordinates, and
//! its export to the complete edge list consumed by the selector.

mod matrix;

pub use matrix::DistanceMatrix;
