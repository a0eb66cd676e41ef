//! The externally supplied city graph.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::debug;

use super::{City, Direction, Edge, NodeId, Selection};
use crate::constructive::greedy_edge_over;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// Latitude range used by [`Graph::random`] (roughly mainland Mexico).
const RANDOM_LAT: std::ops::Range<f64> = 14.5..32.7;
/// Longitude range used by [`Graph::random`].
const RANDOM_LNG: std::ops::Range<f64> = -117.1..-86.7;

/// Read-only reference data: cities and the weighted edges between them.
///
/// Construction validates the edge list (known endpoints, no self loops,
/// no duplicate pairs, finite non-negative weights) but does not require
/// the graph to be complete.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::{City, Direction, Graph};
///
/// let graph = Graph::from_cities(vec![
///     City::new(0, "A", 0.0, 0.0),
///     City::new(1, "B", 0.0, 1.0),
///     City::new(2, "C", 1.0, 0.0),
/// ])
/// .unwrap();
/// assert!(graph.is_complete());
/// assert_eq!(graph.edges().len(), 3);
///
/// let sel = graph.greedy_tour(Direction::Min);
/// assert!(sel.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    cities: Vec<City>,
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct GraphData {
    cities: Vec<City>,
    #[serde(default)]
    edges: Option<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph from cities and an explicit edge list.
    pub fn new(cities: Vec<City>, edges: Vec<Edge>) -> Result<Self> {
        let ids = unique_ids(&cities)?;

        let mut pairs = HashSet::with_capacity(edges.len());
        for e in &edges {
            for node in [e.from_id, e.to_id] {
                if !ids.contains(&node) {
                    return Err(Error::UnknownNode {
                        from_id: e.from_id,
                        to_id: e.to_id,
                        node,
                    });
                }
            }
            if e.from_id == e.to_id {
                return Err(Error::SelfLoop { node: e.from_id });
            }
            if !e.weight.is_finite() || e.weight < 0.0 {
                return Err(Error::InvalidWeight {
                    from_id: e.from_id,
                    to_id: e.to_id,
                    weight: e.weight,
                });
            }
            if !pairs.insert(e.key()) {
                return Err(Error::DuplicateEdge {
                    from_id: e.from_id,
                    to_id: e.to_id,
                });
            }
        }

        Ok(Self { cities, edges })
    }

    /// Builds the complete graph over `cities`, weighting each pair by
    /// great-circle distance.
    ///
    /// Fails with [`Error::DuplicateCity`] if two cities share an id.
    pub fn from_cities(cities: Vec<City>) -> Result<Self> {
        unique_ids(&cities)?;
        Ok(Self::complete(cities))
    }

    /// Complete great-circle graph; ids must already be unique.
    fn complete(cities: Vec<City>) -> Self {
        let edges = DistanceMatrix::from_cities(&cities).to_edges(&cities);
        Self { cities, edges }
    }

    /// Parses `{"cities": [...], "edges": [...]}`.
    ///
    /// When `edges` is omitted the complete great-circle graph is derived.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: GraphData = serde_json::from_str(json)?;
        let graph = match data.edges {
            Some(edges) => Self::new(data.cities, edges)?,
            None => Self::from_cities(data.cities)?,
        };
        debug!(
            cities = graph.node_count(),
            edges = graph.edges.len(),
            complete = graph.is_complete(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Generates a reproducible complete graph of `n` cities with ids `0..n`.
    pub fn random(n: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cities = (0..n)
            .map(|i| {
                let lat = rng.random_range(RANDOM_LAT);
                let lng = rng.random_range(RANDOM_LNG);
                City::new(i, format!("City {i}"), lat, lng)
            })
            .collect();
        Self::complete(cities)
    }

    /// All cities, in supplied order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// All edges, in supplied order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a city by id.
    pub fn city(&self, id: NodeId) -> Option<&City> {
        self.cities.iter().find(|c| c.id() == id)
    }

    /// City ids, in supplied order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.cities.iter().map(City::id).collect()
    }

    /// Number of cities.
    pub fn node_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if every unordered pair of cities has an edge.
    pub fn is_complete(&self) -> bool {
        let n = self.cities.len();
        self.edges.len() == n * n.saturating_sub(1) / 2
    }

    /// Runs the greedy edge selection over this graph.
    pub fn greedy_tour(&self, direction: Direction) -> Selection {
        greedy_edge_over(&self.edges, &self.node_ids(), direction)
    }
}

fn unique_ids(cities: &[City]) -> Result<HashSet<NodeId>> {
    let mut ids = HashSet::with_capacity(cities.len());
    for city in cities {
        if !ids.insert(city.id()) {
            return Err(Error::DuplicateCity(city.id()));
        }
    }
    Ok(ids)
}
