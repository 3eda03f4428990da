//! Greedy construction that also looks at the way home.
//!
//! # Algorithm
//!
//! From the current location (initially the start), score every unvisited
//! stop `c` as
//!
//! ```text
//! score(c) = d(current, c) + d(c, start) + penalty · k
//! ```
//!
//! where `k` is the number of stops still unvisited once `c` is taken. The
//! lowest score is appended and becomes the current location. The
//! `d(c, start)` term pulls the tour toward stops that also lie on the way
//! back. `penalty · k` is a flat per-stop estimate of the travel not yet
//! modelled; `k` is equal for every candidate within a step.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use crate::distance::DistanceMatrix;

/// Default look-ahead estimate, in kilometres per remaining stop.
pub const DEFAULT_LOOKAHEAD_PENALTY: f64 = 5.0;

/// Builds a tour over every stop in `distances` with the look-ahead greedy
/// rule.
///
/// Ties go to the stop that appears first in input order. The result always
/// contains each stop exactly once.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::constructive::{construct_heuristic, DEFAULT_LOOKAHEAD_PENALTY};
///
/// let start = Coordinate::new(0.0, 0.0);
/// let stops = [
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_locations(start, &stops).unwrap();
/// let tour = construct_heuristic(&dm, DEFAULT_LOOKAHEAD_PENALTY);
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour[0], 1);
/// ```
pub fn construct_heuristic(distances: &DistanceMatrix, lookahead_penalty: f64) -> Vec<usize> {
    let mut remaining = distances.stop_indices();
    let mut tour = Vec::with_capacity(remaining.len());
    let mut current = 0;

    while !remaining.is_empty() {
        let left_after = (remaining.len() - 1) as f64;
        let mut best: Option<(usize, f64)> = None;

        for (pos, &candidate) in remaining.iter().enumerate() {
            let score = distances.get(current, candidate)
                + distances.get(candidate, 0)
                + lookahead_penalty * left_after;
            if best.map_or(true, |(_, s)| score < s) {
                best = Some((pos, score));
            }
        }

        let Some((pos, _)) = best else { break };
        let next = remaining.remove(pos);
        tour.push(next);
        current = next;
    }

    tour
}
