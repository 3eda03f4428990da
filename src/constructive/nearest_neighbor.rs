//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the start location, always visit
//! the nearest unvisited stop. The return leg is ignored while choosing,
//! which is what [`construct_heuristic`](super::construct_heuristic)
//! improves on. Kept as the baseline for algorithm comparison.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use crate::distance::DistanceMatrix;

/// Constructs a tour using the plain nearest-neighbor rule.
///
/// Ties go to the stop that appears first in input order.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::constructive::nearest_neighbor;
///
/// let start = Coordinate::new(0.0, 0.0);
/// let stops = [
///     Coordinate::new(0.0, 3.0),
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(0.0, 2.0),
/// ];
/// let dm = DistanceMatrix::from_locations(start, &stops).unwrap();
/// assert_eq!(nearest_neighbor(&dm), vec![2, 3, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Vec<usize> {
    let mut remaining = distances.stop_indices();
    let mut tour = Vec::with_capacity(remaining.len());
    let mut current = 0;

    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        remaining.retain(|&i| i != next);
        tour.push(next);
        current = next;
    }

    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    #[test]
    fn test_nn_empty() {
        let dm = DistanceMatrix::from_locations(Coordinate::new(0.0, 0.0), &[]).expect("finite");
        assert!(nearest_neighbor(&dm).is_empty());
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_locations(
            Coordinate::new(0.0, 0.0),
            &[Coordinate::new(0.0, 10.0), Coordinate::new(0.0, 1.0)],
        )
        .expect("finite");
        // Stop 2 first (1°), then stop 1 (9° further).
        assert_eq!(nearest_neighbor(&dm), vec![2, 1]);
    }

    #[test]
    fn test_nn_ignores_return_leg() {
        // Stop 1 is slightly nearer but leads away; plain NN still takes it.
        let dm = DistanceMatrix::from_locations(
            Coordinate::new(0.0, 0.0),
            &[
                Coordinate::new(0.0, 0.9),
                Coordinate::new(0.0, -1.0),
                Coordinate::new(0.0, -2.0),
            ],
        )
        .expect("finite");
        assert_eq!(nearest_neighbor(&dm), vec![1, 2, 3]);
    }
}
