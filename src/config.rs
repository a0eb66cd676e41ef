//! Tour configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Direction, NodeId, ORIGIN};

/// Parameters for building a [`TourPlan`](crate::itinerary::TourPlan).
///
/// # Examples
///
/// ```
/// use greedy_tour::config::TourConfig;
/// use greedy_tour::models::Direction;
///
/// let config = TourConfig::default().with_direction(Direction::Max);
/// assert_eq!(config.direction, Direction::Max);
/// assert_eq!(config.origin, 0);
///
/// let parsed = TourConfig::from_json(r#"{"direction": "max"}"#).unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Shortest or longest tour.
    pub direction: Direction,
    /// Node the itinerary starts (and, when complete, ends) at.
    pub origin: NodeId,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Min,
            origin: ORIGIN,
        }
    }
}

impl TourConfig {
    /// Sets the optimization direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the itinerary start node.
    pub fn with_origin(mut self, origin: NodeId) -> Self {
        self.origin = origin;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
