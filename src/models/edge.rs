//! Weighted undirected edge and optimization direction.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NodeId;
use crate::error::Error;

/// An undirected weighted connection between two cities.
///
/// The pair is unordered for selection purposes; `from_id`/`to_id` only
/// carry meaning once an edge is placed in a [`Tour`](super::Tour), where
/// they record the travel direction.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::Edge;
///
/// let e = Edge::new(0, 3, 20.0);
/// assert!(e.connects(3, 0));
/// assert_eq!(e.other(3), Some(0));
/// assert_eq!(e.reversed(), Edge::new(3, 0, 20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// First endpoint (origin when traversed).
    pub from_id: NodeId,
    /// Second endpoint (destination when traversed).
    pub to_id: NodeId,
    /// Distance, non-negative.
    pub weight: f64,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from_id: NodeId, to_id: NodeId, weight: f64) -> Self {
        Self {
            from_id,
            to_id,
            weight,
        }
    }

    /// Returns `true` if this edge joins `a` and `b` in either orientation.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from_id == a && self.to_id == b) || (self.from_id == b && self.to_id == a)
    }

    /// Returns `true` if `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.from_id == node || self.to_id == node
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.from_id == node {
            Some(self.to_id)
        } else if self.to_id == node {
            Some(self.from_id)
        } else {
            None
        }
    }

    /// The same edge with endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.to_id, self.from_id, self.weight)
    }

    /// Endpoints as `(min, max)`, the canonical key of the unordered pair.
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.from_id <= self.to_id {
            (self.from_id, self.to_id)
        } else {
            (self.to_id, self.from_id)
        }
    }
}

/// Which extreme the greedy selection chases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    /// Shortest tour: candidates in ascending weight order.
    #[default]
    Min,
    /// Longest tour: candidates in descending weight order.
    Max,
}

impl Direction {
    /// Orders two weights so that the preferred one comes first.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Direction::Min => a.total_cmp(&b),
            Direction::Max => b.total_cmp(&a),
        }
    }

    /// The lowercase wire name (`"min"` / `"max"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Min => "min",
            Direction::Max => "max",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Direction::Min),
            "max" => Ok(Direction::Max),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_both_orientations() {
        let e = Edge::new(1, 2, 5.0);
        assert!(e.connects(1, 2));
        assert!(e.connects(2, 1));
        assert!(!e.connects(1, 3));
    }

    #[test]
    fn test_touches_and_other() {
        let e = Edge::new(4, 9, 1.0);
        assert!(e.touches(4));
        assert!(e.touches(9));
        assert!(!e.touches(5));
        assert_eq!(e.other(4), Some(9));
        assert_eq!(e.other(9), Some(4));
        assert_eq!(e.other(5), None);
    }

    #[test]
    fn test_key_is_orientation_free() {
        assert_eq!(Edge::new(7, 2, 1.0).key(), (2, 7));
        assert_eq!(Edge::new(2, 7, 1.0).key(), (2, 7));
    }

    #[test]
    fn test_edge_wire_names() {
        let e: Edge = serde_json::from_str(r#"{"fromId": 0, "toId": 1, "weight": 10}"#)
            .expect("valid edge");
        assert_eq!(e, Edge::new(0, 1, 10.0));
        let json = serde_json::to_string(&e).expect("serializable");
        assert!(json.contains("\"fromId\":0"));
        assert!(json.contains("\"toId\":1"));
    }

    #[test]
    fn test_direction_compare() {
        assert_eq!(Direction::Min.compare(1.0, 2.0), Ordering::Less);
        assert_eq!(Direction::Max.compare(1.0, 2.0), Ordering::Greater);
        assert_eq!(Direction::Max.compare(3.0, 3.0), Ordering::Equal);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("min".parse::<Direction>().expect("min"), Direction::Min);
        assert_eq!(" MAX ".parse::<Direction>().expect("max"), Direction::Max);
        assert!("longest".parse::<Direction>().is_err());
        assert_eq!(Direction::default(), Direction::Min);
        assert_eq!(Direction::Max.to_string(), "max");
    }

    #[test]
    fn test_direction_serde() {
        let d: Direction = serde_json::from_str("\"max\"").expect("valid");
        assert_eq!(d, Direction::Max);
        assert_eq!(serde_json::to_string(&Direction::Max).expect("serializable"), "\"max\"");
    }

    #[test]
    fn test_direction_serde_matches_from_str() {
        for raw in ["min", "MAX", " Max ", "longest"] {
            let parsed = raw.parse::<Direction>().ok();
            let json = serde_json::to_string(raw).expect("serializable");
            let decoded = serde_json::from_str::<Direction>(&json).ok();
            assert_eq!(parsed, decoded, "{raw:?}");
        }
    }
}
