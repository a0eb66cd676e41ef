//! Itinerary construction.
//!
//! - [`sequence`] — Orders an unordered edge set into a walk from a start node
//! - [`TourPlan`] — Selection plus its ordered walk, built in one call

mod plan;
mod sequencer;

pub use plan::TourPlan;
pub use sequencer::{sequence, sequence_from_origin};
