//! Error types for graph loading and configuration.
//!
//! The tour construction itself never fails; only the boundary operations
//! that accept external data return [`Result`].

use thiserror::Error;

use crate::models::NodeId;

/// Result type alias for fallible greedy-tour operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a [`Graph`](crate::models::Graph) or parsing
/// configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge references a city id that is not part of the graph.
    #[error("edge {from_id}-{to_id} references unknown city {node}")]
    UnknownNode {
        /// The offending edge's first endpoint.
        from_id: NodeId,
        /// The offending edge's second endpoint.
        to_id: NodeId,
        /// The endpoint that has no matching city.
        node: NodeId,
    },

    /// An edge connects a city to itself.
    #[error("edge {node}-{node} is a self loop")]
    SelfLoop {
        /// The city on both ends.
        node: NodeId,
    },

    /// An edge weight is negative, NaN, or infinite.
    #[error("edge {from_id}-{to_id} has invalid weight {weight}")]
    InvalidWeight {
        /// First endpoint.
        from_id: NodeId,
        /// Second endpoint.
        to_id: NodeId,
        /// The rejected weight.
        weight: f64,
    },

    /// The same unordered pair appears more than once.
    #[error("edge {from_id}-{to_id} appears more than once")]
    DuplicateEdge {
        /// First endpoint.
        from_id: NodeId,
        /// Second endpoint.
        to_id: NodeId,
    },

    /// Two cities share an id.
    #[error("city id {0} is used more than once")]
    DuplicateCity(NodeId),

    /// A direction string other than `"min"` or `"max"`.
    #[error("unknown direction '{0}', expected 'min' or 'max'")]
    InvalidDirection(String),

    /// Malformed JSON input.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
