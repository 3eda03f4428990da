//! Segment-reversal (2-opt) improvement of a round trip.
//!
//! # Algorithm
//!
//! Scan position pairs `(i, j)` with `j ≥ i + 2` in order. For each pair,
//! reverse `tour[i..=j]` and evaluate the whole round trip. The first
//! reversal that is strictly shorter is kept and the scan restarts from the
//! top (first-improvement). The search ends after a full scan without
//! improvement, or once `max_iterations` reversals have been accepted.
//!
//! Candidates are scored with the full objective rather than an edge delta
//! so that acceptance uses exactly the cost the rest of the crate reports.
//!
//! # Complexity
//!
//! O(n³) per scan; at most `max_iterations` accepted moves.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::evaluation::tour_distance;

/// Default bound on accepted 2-opt moves.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Outcome of a 2-opt run.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome {
    /// The refined tour.
    pub tour: Vec<usize>,
    /// Round-trip distance of `tour`.
    pub distance: f64,
    /// Number of reversals accepted.
    pub moves: usize,
    /// `true` if the search stopped on `max_iterations` while an improving
    /// reversal was still available.
    pub hit_iteration_limit: bool,
}

/// Improves `tour` with first-improvement 2-opt.
///
/// Tours shorter than four stops are returned unchanged. The result is
/// always a permutation of the input and never longer than it.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::evaluation::tour_distance;
/// use route_optimizer::local_search::refine_2opt;
///
/// let start = Coordinate::new(0.0, 0.0);
/// let stops = [
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(0.0, 2.0),
///     Coordinate::new(0.0, 3.0),
///     Coordinate::new(0.0, 4.0),
/// ];
/// let dm = DistanceMatrix::from_locations(start, &stops).unwrap();
///
/// let backtracking = [3, 2, 1, 4];
/// let refined = refine_2opt(&backtracking, &dm, 100);
/// assert!(tour_distance(&refined, &dm) < tour_distance(&backtracking, &dm));
/// ```
pub fn refine_2opt(tour: &[usize], distances: &DistanceMatrix, max_iterations: usize) -> Vec<usize> {
    refine_2opt_with_stats(tour, distances, max_iterations).tour
}

/// Same as [`refine_2opt`], also reporting how the search ended.
pub fn refine_2opt_with_stats(
    tour: &[usize],
    distances: &DistanceMatrix,
    max_iterations: usize,
) -> TwoOptOutcome {
    let mut current = tour.to_vec();
    let mut current_distance = tour_distance(&current, distances);

    if current.len() < 4 {
        return TwoOptOutcome {
            tour: current,
            distance: current_distance,
            moves: 0,
            hit_iteration_limit: false,
        };
    }

    let n = current.len();
    let mut moves = 0;

    while moves < max_iterations {
        match apply_first_improvement(&mut current, distances, current_distance) {
            Some(improved) => {
                current_distance = improved;
                moves += 1;
            }
            None => break,
        }
    }

    // At the bound, only report the limit if an improving reversal remains.
    let hit_iteration_limit = moves == max_iterations
        && apply_first_improvement(&mut current.clone(), distances, current_distance).is_some();

    log::debug!(
        "2-opt: n={n} moves={moves} limit_hit={hit_iteration_limit} km={current_distance:.3}"
    );

    TwoOptOutcome {
        tour: current,
        distance: current_distance,
        moves,
        hit_iteration_limit,
    }
}

/// Applies the first strictly improving reversal to `tour` and returns the
/// new distance, or leaves `tour` untouched and returns `None`.
fn apply_first_improvement(
    tour: &mut [usize],
    distances: &DistanceMatrix,
    current_distance: f64,
) -> Option<f64> {
    let n = tour.len();
    for i in 0..n - 1 {
        for j in i + 2..n {
            tour[i..=j].reverse();
            let candidate = tour_distance(tour, distances);
            if candidate < current_distance {
                return Some(candidate);
            }
            tour[i..=j].reverse();
        }
    }
    None
}
