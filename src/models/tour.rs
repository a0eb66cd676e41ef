//! Ordered tour (itinerary) type.

use serde::{Deserialize, Serialize};

use super::{Edge, NodeId};

/// An ordered walk: each leg's `to_id` is the next leg's `from_id`.
///
/// Legs are oriented in travel direction regardless of how the underlying
/// edge was stored.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::{Edge, Tour};
///
/// let tour = Tour::from_legs(vec![
///     Edge::new(0, 1, 10.0),
///     Edge::new(1, 2, 20.0),
///     Edge::new(2, 0, 30.0),
/// ]);
/// assert!(tour.is_closed());
/// assert_eq!(tour.node_order(), vec![0, 1, 2, 0]);
/// assert_eq!(tour.total_distance(), 60.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    legs: Vec<Edge>,
}

impl Tour {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self { legs: Vec::new() }
    }

    /// Wraps an already-ordered list of legs.
    pub fn from_legs(legs: Vec<Edge>) -> Self {
        Self { legs }
    }

    /// Appends a leg to the end of the walk.
    pub fn push_leg(&mut self, leg: Edge) {
        self.legs.push(leg);
    }

    /// Legs in travel order.
    pub fn legs(&self) -> &[Edge] {
        &self.legs
    }

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns `true` if the tour has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of leg weights.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().map(|l| l.weight).sum()
    }

    /// Departure node of the first leg.
    pub fn start(&self) -> Option<NodeId> {
        self.legs.first().map(|l| l.from_id)
    }

    /// Returns `true` if the walk ends where it started.
    pub fn is_closed(&self) -> bool {
        match (self.legs.first(), self.legs.last()) {
            (Some(first), Some(last)) => last.to_id == first.from_id,
            _ => false,
        }
    }

    /// Node ids in visiting order, including the final arrival.
    pub fn node_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.legs.len() + 1);
        if let Some(first) = self.legs.first() {
            order.push(first.from_id);
        }
        order.extend(self.legs.iter().map(|l| l.to_id));
        order
    }

    /// Consumes the tour, returning its legs.
    pub fn into_legs(self) -> Vec<Edge> {
        self.legs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_empty() {
        let t = Tour::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.start(), None);
        assert!(!t.is_closed());
        assert!(t.node_order().is_empty());
        assert_eq!(t.total_distance(), 0.0);
    }

    #[test]
    fn test_tour_open_path() {
        let mut t = Tour::new();
        t.push_leg(Edge::new(0, 2, 5.0));
        t.push_leg(Edge::new(2, 3, 7.0));
        assert_eq!(t.len(), 2);
        assert_eq!(t.start(), Some(0));
        assert!(!t.is_closed());
        assert_eq!(t.node_order(), vec![0, 2, 3]);
        assert!((t.total_distance() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_serializes_as_list() {
        let t = Tour::from_legs(vec![Edge::new(0, 1, 1.0)]);
        let v = serde_json::to_value(&t).expect("serializable");
        assert!(v.is_array());
        assert_eq!(v[0]["toId"], 1);
    }
}
