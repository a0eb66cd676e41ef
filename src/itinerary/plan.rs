//! Selection and itinerary bundled together.

use serde::Serialize;

use super::sequence;
use crate::config::TourConfig;
use crate::models::{Direction, Graph, NodeId, Selection, Tour};

/// The two outputs a caller presents: the unordered edge set (for drawing)
/// and the ordered walk (for the step-by-step itinerary).
///
/// # Examples
///
/// ```
/// use greedy_tour::config::TourConfig;
/// use greedy_tour::itinerary::TourPlan;
/// use greedy_tour::models::{Direction, Graph};
///
/// let graph = Graph::random(10, 7);
/// let plan = TourPlan::build(&graph, &TourConfig::default().with_direction(Direction::Max));
/// assert!(plan.selection().is_complete());
/// assert!(plan.is_fully_linearized());
/// assert_eq!(plan.tour().len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPlan {
    selection: Selection,
    tour: Tour,
    origin: NodeId,
}

impl TourPlan {
    /// Selects edges over `graph` and sequences them from the configured origin.
    pub fn build(graph: &Graph, config: &TourConfig) -> Self {
        let selection = graph.greedy_tour(config.direction);
        let tour = sequence(selection.edges(), config.origin);
        Self {
            selection,
            tour,
            origin: config.origin,
        }
    }

    /// The unordered selected edges.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The ordered walk.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Start node of the walk.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Direction the selection was built with.
    pub fn direction(&self) -> Direction {
        self.selection.direction()
    }

    /// `true` if every selected edge made it into the walk.
    pub fn is_fully_linearized(&self) -> bool {
        self.tour.len() == self.selection.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Edge};

    fn four_city_graph() -> Graph {
        let cities = (0..4).map(|i| City::new(i, format!("C{i}"), 0.0, 0.0)).collect();
        let edges = vec![
            Edge::new(0, 1, 10.0),
            Edge::new(0, 2, 15.0),
            Edge::new(0, 3, 20.0),
            Edge::new(1, 2, 35.0),
            Edge::new(1, 3, 25.0),
            Edge::new(2, 3, 30.0),
        ];
        Graph::new(cities, edges).expect("valid graph")
    }

    #[test]
    fn test_build_min() {
        let plan = TourPlan::build(&four_city_graph(), &TourConfig::default());
        assert_eq!(plan.direction(), Direction::Min);
        assert!((plan.selection().total() - 80.0).abs() < 1e-10);
        assert_eq!(plan.tour().start(), Some(0));
        assert!(plan.tour().is_closed());
        assert!(plan.is_fully_linearized());
        assert!((plan.tour().total_distance() - plan.selection().total()).abs() < 1e-10);
    }

    #[test]
    fn test_build_max_differs() {
        let graph = four_city_graph();
        let min = TourPlan::build(&graph, &TourConfig::default());
        let max = TourPlan::build(&graph, &TourConfig::default().with_direction(Direction::Max));
        assert!((max.selection().total() - 95.0).abs() < 1e-10);
        assert_ne!(min.tour(), max.tour());
    }

    #[test]
    fn test_build_origin_missing_from_graph() {
        let plan = TourPlan::build(&four_city_graph(), &TourConfig::default().with_origin(9));
        assert!(plan.selection().is_complete());
        assert!(plan.tour().is_empty());
        assert!(!plan.is_fully_linearized());
    }

    #[test]
    fn test_plan_serializes() {
        let plan = TourPlan::build(&four_city_graph(), &TourConfig::default());
        let v = serde_json::to_value(&plan).expect("serializable");
        assert_eq!(v["selection"]["totalDistance"], 80.0);
        assert_eq!(v["tour"].as_array().map(Vec::len), Some(4));
        assert_eq!(v["origin"], 0);
    }
}
