//! Result of the greedy edge selection.

use serde::{Deserialize, Serialize};

use super::{Direction, Edge};

/// An unordered set of edges approximating a Hamiltonian cycle.
///
/// Edges are kept in presentation order (heaviest first). Use
/// [`is_complete`](Self::is_complete) to tell a full cycle from a
/// best-effort partial result.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::{Direction, Edge, Selection};
///
/// let sel = Selection::new(
///     vec![Edge::new(0, 1, 3.0), Edge::new(1, 2, 4.0), Edge::new(0, 2, 5.0)],
///     3,
///     Direction::Min,
/// );
/// assert!(sel.is_complete());
/// assert_eq!(sel.total(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(rename = "routes")]
    edges: Vec<Edge>,
    #[serde(rename = "totalDistance")]
    total: f64,
    node_count: usize,
    direction: Direction,
    complete: bool,
}

impl Selection {
    /// Wraps selected edges, computing the total and completeness.
    pub fn new(edges: Vec<Edge>, node_count: usize, direction: Direction) -> Self {
        let total = edges.iter().map(|e| e.weight).sum();
        let complete = node_count >= 3 && edges.len() == node_count;
        Self {
            edges,
            total,
            node_count,
            direction,
            complete,
        }
    }

    /// An empty selection over `node_count` nodes.
    pub fn empty(node_count: usize, direction: Direction) -> Self {
        Self::new(Vec::new(), node_count, direction)
    }

    /// Selected edges, heaviest first.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Alias of [`edges`](Self::edges) for map rendering.
    pub fn routes(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of the selected weights.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Alias of [`total`](Self::total).
    pub fn total_distance(&self) -> f64 {
        self.total
    }

    /// Number of nodes the selection was built over.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Direction used to build this selection.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// `true` if the edges form a full Hamiltonian cycle (n ≥ 3 edges over n nodes).
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consumes the selection, returning its edges.
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_empty() {
        let sel = Selection::empty(0, Direction::Min);
        assert!(sel.is_empty());
        assert_eq!(sel.total(), 0.0);
        assert!(!sel.is_complete());
    }

    #[test]
    fn test_selection_partial_is_not_complete() {
        let sel = Selection::new(
            vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0)],
            4,
            Direction::Max,
        );
        assert_eq!(sel.len(), 2);
        assert!((sel.total_distance() - 3.0).abs() < 1e-10);
        assert!(!sel.is_complete());
        assert_eq!(sel.direction(), Direction::Max);
    }

    #[test]
    fn test_two_nodes_never_complete() {
        let sel = Selection::new(
            vec![Edge::new(0, 1, 1.0), Edge::new(0, 1, 1.0)],
            2,
            Direction::Min,
        );
        assert!(!sel.is_complete());
    }

    #[test]
    fn test_selection_wire_shape() {
        let sel = Selection::new(vec![Edge::new(0, 1, 2.5)], 2, Direction::Min);
        let v = serde_json::to_value(&sel).expect("serializable");
        assert_eq!(v["totalDistance"], 2.5);
        assert_eq!(v["routes"][0]["fromId"], 0);
        assert_eq!(v["direction"], "min");
    }
}
