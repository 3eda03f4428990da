//! Constructive heuristics for building an initial round trip.
//!
//! - [`construct_heuristic`] — nearest neighbor with a return-leg look-ahead, O(n²)
//! - [`nearest_neighbor`] — plain greedy nearest neighbor, O(n²)

mod lookahead;
mod nearest_neighbor;

pub use lookahead::{construct_heuristic, DEFAULT_LOOKAHEAD_PENALTY};
pub use nearest_neighbor::nearest_neighbor;
