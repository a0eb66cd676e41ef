//! Invariant checking for selections and tours.

mod evaluator;

pub use evaluator::SelectionEvaluator;
