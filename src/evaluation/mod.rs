//! Route cost evaluation.
//!
//! - [`tour_distance`] — objective over matrix indices, used by every solver
//! - [`total_round_trip_distance`] — the same objective straight from stops

mod evaluator;

pub use evaluator::{total_round_trip_distance, tour_distance};
