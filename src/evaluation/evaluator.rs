//! Invariant checks for selections and tours.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Edge, Graph, NodeId, Selection, Tour, Violation, ViolationType};

/// Relative tolerance for comparing a stored total with the recomputed sum.
const TOTAL_TOLERANCE: f64 = 1e-9;

/// Checks the Hamiltonian-cycle invariants of a [`Selection`] and the walk
/// invariants of a [`Tour`] over a fixed node set.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::{Direction, Graph};
/// use greedy_tour::evaluation::SelectionEvaluator;
/// use greedy_tour::itinerary::sequence;
///
/// let graph = Graph::random(6, 1);
/// let sel = graph.greedy_tour(Direction::Min);
/// let tour = sequence(sel.edges(), 0);
///
/// let eval = SelectionEvaluator::for_graph(&graph);
/// assert!(eval.check_selection(&sel).is_empty());
/// assert!(eval.check_tour(&tour, &sel).is_empty());
/// ```
pub struct SelectionEvaluator {
    nodes: BTreeSet<NodeId>,
}

impl SelectionEvaluator {
    /// Creates an evaluator over the given node ids.
    pub fn new(node_ids: &[NodeId]) -> Self {
        Self {
            nodes: node_ids.iter().copied().collect(),
        }
    }

    /// Creates an evaluator over all cities in `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        Self::new(&graph.node_ids())
    }

    /// Degree of every known node across `edges` (zero for untouched nodes).
    pub fn degrees(&self, edges: &[Edge]) -> BTreeMap<NodeId, usize> {
        let mut degrees: BTreeMap<NodeId, usize> = self.nodes.iter().map(|&n| (n, 0)).collect();
        for e in edges {
            for node in [e.from_id, e.to_id] {
                if let Some(d) = degrees.get_mut(&node) {
                    *d += 1;
                }
            }
        }
        degrees
    }

    /// Checks degree bounds, node membership, and the stored total.
    ///
    /// Degree deficits are only reported when the selection has as many
    /// edges as there are nodes, since a partial result is expected to
    /// leave some nodes short.
    pub fn check_selection(&self, selection: &Selection) -> Vec<Violation> {
        let mut violations = Vec::new();
        let edges = selection.edges();

        let unknown: BTreeSet<NodeId> = edges
            .iter()
            .flat_map(|e| [e.from_id, e.to_id])
            .filter(|n| !self.nodes.contains(n))
            .collect();
        for node in unknown {
            violations.push(Violation::new(ViolationType::UnknownNode { node }));
        }

        let full_size = self.nodes.len() >= 3 && edges.len() == self.nodes.len();
        for (node, degree) in self.degrees(edges) {
            if degree > 2 {
                violations.push(Violation::new(ViolationType::DegreeExceeded { node, degree }));
            } else if full_size && degree < 2 {
                violations.push(Violation::new(ViolationType::DegreeDeficit { node, degree }));
            }
        }

        let actual: f64 = edges.iter().map(|e| e.weight).sum();
        let stored = selection.total();
        if (stored - actual).abs() > TOTAL_TOLERANCE * actual.abs().max(1.0) {
            violations.push(Violation::new(ViolationType::TotalMismatch { stored, actual }));
        }

        violations
    }

    /// Checks that `tour` is a connected walk over the edges of `selection`.
    pub fn check_tour(&self, tour: &Tour, selection: &Selection) -> Vec<Violation> {
        let mut violations = Vec::new();
        let legs = tour.legs();

        if legs.len() < selection.len() {
            violations.push(Violation::new(ViolationType::Truncated {
                expected: selection.len(),
                actual: legs.len(),
            }));
        }

        for (step, leg) in legs.iter().enumerate() {
            if step > 0 && legs[step - 1].to_id != leg.from_id {
                violations.push(Violation::new(ViolationType::BrokenWalk { step }));
            }
            if !selection.edges().iter().any(|e| e.connects(leg.from_id, leg.to_id)) {
                violations.push(Violation::new(ViolationType::LegNotSelected { step }));
            }
        }

        if selection.is_complete() && legs.len() == selection.len() && !tour.is_closed() {
            violations.push(Violation::new(ViolationType::NotClosed));
        }

        violations
    }
}
