//! Greedy edge heuristic for the travelling salesman problem.
//!
//! # Algorithm
//!
//! Sort all edges by weight (ascending for the shortest tour, descending for
//! the longest). Walk the sorted list and accept an edge `(u, v)` when
//!
//! - neither `u` nor `v` already has two accepted edges, and
//! - `u` and `v` are in different fragments, unless `n - 1` edges are
//!   already accepted, in which case the edge closes the full cycle.
//!
//! Stop once `n` edges are accepted. On a complete graph this always yields
//! a Hamiltonian cycle; on anything else the result may be partial.
//!
//! # Complexity
//!
//! O(m log m) for m edges, dominated by the sort.
//!
//! # Reference
//!
//! Bentley, J.L. (1992). "Fast algorithms for geometric traveling salesman
//! problems", *ORSA Journal on Computing* 4(4), 387-411.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::DisjointSet;
use crate::models::{Direction, Edge, NodeId, Selection};

/// Builds a greedy tour over the nodes that appear as edge endpoints.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::{Direction, Edge};
/// use greedy_tour::constructive::greedy_edge;
///
/// let edges = vec![
///     Edge::new(0, 1, 10.0),
///     Edge::new(0, 2, 15.0),
///     Edge::new(0, 3, 20.0),
///     Edge::new(1, 2, 35.0),
///     Edge::new(1, 3, 25.0),
///     Edge::new(2, 3, 30.0),
/// ];
/// let shortest = greedy_edge(&edges, Direction::Min);
/// assert!(shortest.is_complete());
/// assert_eq!(shortest.total(), 80.0);
///
/// let longest = greedy_edge(&edges, Direction::Max);
/// assert_eq!(longest.total(), 95.0);
/// ```
pub fn greedy_edge(edges: &[Edge], direction: Direction) -> Selection {
    let node_ids: Vec<NodeId> = edges.iter().flat_map(|e| [e.from_id, e.to_id]).collect();
    greedy_edge_over(edges, &node_ids, direction)
}

/// Builds a greedy tour over an explicit node set.
///
/// `n` is the number of distinct ids in `node_ids`; isolated nodes count
/// towards it, so a graph with isolated nodes yields an incomplete
/// selection. Edges with an endpoint outside the node set, and self
/// loops, are never selected.
pub fn greedy_edge_over(edges: &[Edge], node_ids: &[NodeId], direction: Direction) -> Selection {
    let mut ids = node_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    let n = ids.len();
    let index = |id: NodeId| ids.binary_search(&id).ok();

    let mut candidates = edges.to_vec();
    candidates.sort_by(|a, b| {
        direction
            .compare(a.weight, b.weight)
            .then_with(|| by_endpoints(a, b))
    });

    let mut degree = vec![0u8; n];
    let mut fragments = DisjointSet::new(n);
    let mut selected: Vec<Edge> = Vec::with_capacity(n);

    for edge in candidates {
        let (Some(u), Some(v)) = (index(edge.from_id), index(edge.to_id)) else {
            trace!(from = edge.from_id, to = edge.to_id, "skip: endpoint outside node set");
            continue;
        };
        if u == v {
            continue;
        }
        if degree[u] >= 2 || degree[v] >= 2 {
            trace!(from = edge.from_id, to = edge.to_id, "skip: degree");
            continue;
        }

        let closes_cycle = fragments.same_set(u, v);
        if closes_cycle && selected.len() < n.saturating_sub(1) {
            trace!(from = edge.from_id, to = edge.to_id, "skip: premature cycle");
            continue;
        }

        fragments.union(u, v);
        degree[u] += 1;
        degree[v] += 1;
        trace!(from = edge.from_id, to = edge.to_id, weight = edge.weight, "accept");
        selected.push(edge);

        if selected.len() == n {
            break;
        }
    }

    // Heaviest first for display.
    selected.sort_by(|a, b| b.weight.total_cmp(&a.weight).then_with(|| by_endpoints(a, b)));

    let selection = Selection::new(selected, n, direction);
    debug!(
        %direction,
        nodes = n,
        accepted = selection.len(),
        total = selection.total(),
        complete = selection.is_complete(),
        "greedy edge selection done"
    );
    selection
}

fn by_endpoints(a: &Edge, b: &Edge) -> Ordering {
    (a.from_id, a.to_id).cmp(&(b.from_id, b.to_id))
}
