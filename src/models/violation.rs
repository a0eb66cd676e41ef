//! Invariant violation types.

use super::NodeId;

/// A broken tour invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A node has more than two selected edges.
    DegreeExceeded {
        /// Offending node.
        node: NodeId,
        /// Its degree in the selection.
        degree: usize,
    },
    /// A full-size selection leaves a node with fewer than two edges.
    DegreeDeficit {
        /// Offending node.
        node: NodeId,
        /// Its degree in the selection.
        degree: usize,
    },
    /// A selected edge touches a node outside the node set.
    UnknownNode {
        /// The unknown id.
        node: NodeId,
    },
    /// The stored total disagrees with the sum of edge weights.
    TotalMismatch {
        /// Stored total.
        stored: f64,
        /// Recomputed sum.
        actual: f64,
    },
    /// Leg `step` does not start where leg `step - 1` ended.
    BrokenWalk {
        /// Index of the offending leg.
        step: usize,
    },
    /// Leg `step` has no matching edge in the selection.
    LegNotSelected {
        /// Index of the offending leg.
        step: usize,
    },
    /// A complete selection produced a walk that does not return to its start.
    NotClosed,
    /// The walk has fewer legs than the selection has edges.
    Truncated {
        /// Number of selected edges.
        expected: usize,
        /// Number of legs in the walk.
        actual: usize,
    },
}

/// An invariant violation found by the
/// [`SelectionEvaluator`](crate::evaluation::SelectionEvaluator).
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}
