//! Turns an unordered edge set into an ordered walk.
//!
//! # Algorithm
//!
//! Build an undirected adjacency list, then walk from the start node for
//! exactly as many steps as there are edges, always leaving through the
//! first neighbor that is not the node just left. On the final step a node
//! whose only neighbor is the one just left may still close the cycle if
//! that neighbor is the start.
//!
//! A walk that gets stuck stops early: the result is shorter than the input
//! rather than an error.
//!
//! # Complexity
//!
//! O(m²) for m edges in the worst case because each leg looks up its
//! original weight by a linear scan; m is at most the city count.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Edge, NodeId, Tour, ORIGIN};

/// Orders `edges` into a walk starting at `start`.
///
/// Each leg is oriented in travel direction and carries the weight of the
/// matching input edge.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::Edge;
/// use greedy_tour::itinerary::sequence;
///
/// let edges = vec![
///     Edge::new(2, 3, 30.0),
///     Edge::new(1, 3, 25.0),
///     Edge::new(0, 2, 15.0),
///     Edge::new(0, 1, 10.0),
/// ];
/// let tour = sequence(&edges, 0);
/// assert_eq!(tour.node_order(), vec![0, 2, 3, 1, 0]);
/// assert!(tour.is_closed());
/// ```
pub fn sequence(edges: &[Edge], start: NodeId) -> Tour {
    let mut tour = Tour::new();
    if edges.is_empty() {
        return tour;
    }

    let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for e in edges {
        adjacency.entry(e.from_id).or_default().push(e.to_id);
        adjacency.entry(e.to_id).or_default().push(e.from_id);
    }

    let steps = edges.len();
    let mut current = start;
    let mut previous: Option<NodeId> = None;

    for step in 0..steps {
        let Some(neighbors) = adjacency.get(&current) else {
            debug!(node = current, step, "sequencing stopped: node has no edges");
            break;
        };

        let is_last = step + 1 == steps;
        let next = neighbors
            .iter()
            .copied()
            .find(|&nb| Some(nb) != previous)
            .or_else(|| (is_last && neighbors.contains(&start)).then_some(start));
        let Some(next) = next else {
            debug!(node = current, step, "sequencing stopped: dead end");
            break;
        };

        let Some(original) = edges.iter().find(|e| e.connects(current, next)) else {
            break;
        };
        tour.push_leg(Edge::new(current, next, original.weight));

        previous = Some(current);
        current = next;
    }

    debug!(
        start,
        legs = tour.len(),
        edges = steps,
        closed = tour.is_closed(),
        "sequencing done"
    );
    tour
}

/// Orders `edges` into a walk starting at [`ORIGIN`].
pub fn sequence_from_origin(edges: &[Edge]) -> Tour {
    sequence(edges, ORIGIN)
}
