//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! Enumerates every ordering of the stops in lexicographic order of their
//! input index and keeps the first ordering of strictly minimal round-trip
//! distance. Enumeration is iterative (next-permutation), so the only bound
//! on work is the stop count, which is checked before anything runs.
//!
//! # Complexity
//!
//! O(n! · n). At the default bound of 8 stops this is 40 320 evaluations.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::tour_distance;

/// Default upper bound on the stop count for exact search.
pub const DEFAULT_EXACT_MAX_SIZE: usize = 8;

/// Largest bound a configuration may set (10! ≈ 3.6M tours).
pub const EXACT_SIZE_CEILING: usize = 10;

/// Finds the optimal round trip over every stop in `distances`.
///
/// Returns [`Error::SizeExceeded`] without searching when the matrix holds
/// more than `max_size` stops. Ties go to the ordering that comes first
/// lexicographically by input index.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::evaluation::tour_distance;
/// use route_optimizer::exact::solve_exact;
///
/// // Stops on a line east of the start: visit outward, come straight back.
/// let start = Coordinate::new(0.0, 0.0);
/// let stops = [
///     Coordinate::new(0.0, 3.0),
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(0.0, 2.0),
/// ];
/// let dm = DistanceMatrix::from_locations(start, &stops).unwrap();
/// let tour = solve_exact(&dm, 8).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert!((tour_distance(&tour, &dm) - 2.0 * dm.get(0, 1)).abs() < 1e-9);
///
/// assert!(solve_exact(&dm, 2).is_err());
/// ```
pub fn solve_exact(distances: &DistanceMatrix, max_size: usize) -> Result<Vec<usize>> {
    let n = distances.num_stops();
    if n > max_size {
        return Err(Error::SizeExceeded {
            count: n,
            max: max_size,
        });
    }

    let mut current = distances.stop_indices();
    if current.is_empty() {
        return Ok(current);
    }

    let mut best = current.clone();
    let mut best_distance = tour_distance(&current, distances);
    let mut evaluated: u64 = 1;

    while next_permutation(&mut current) {
        evaluated += 1;
        let d = tour_distance(&current, distances);
        if d < best_distance {
            best_distance = d;
            best.copy_from_slice(&current);
        }
    }

    log::debug!("exact: n={n} permutations={evaluated} best_km={best_distance:.3}");

    Ok(best)
}

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns `false` (leaving `items` as the last permutation) when there is
/// none.
fn next_permutation(items: &mut [usize]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn matrix(stops: &[(f64, f64)]) -> DistanceMatrix {
        let coords: Vec<Coordinate> = stops.iter().copied().map(Coordinate::from).collect();
        DistanceMatrix::from_locations(Coordinate::new(50.0, 5.0), &coords).expect("finite")
    }

    #[test]
    fn test_next_permutation_order() {
        let mut p = vec![1, 2, 3];
        let mut seen = vec![p.clone()];
        while next_permutation(&mut p) {
            seen.push(p.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_next_permutation_short() {
        let mut empty: Vec<usize> = vec![];
        assert!(!next_permutation(&mut empty));
        let mut one = vec![4];
        assert!(!next_permutation(&mut one));
    }

    #[test]
    fn test_empty() {
        let dm = matrix(&[]);
        assert_eq!(solve_exact(&dm, DEFAULT_EXACT_MAX_SIZE), Ok(vec![]));
    }

    #[test]
    fn test_single() {
        let dm = matrix(&[(50.3, 5.3)]);
        assert_eq!(solve_exact(&dm, DEFAULT_EXACT_MAX_SIZE), Ok(vec![1]));
    }

    #[test]
    fn test_size_exceeded() {
        let stops: Vec<(f64, f64)> = (0..9).map(|i| (50.0 + i as f64 * 0.01, 5.0)).collect();
        let dm = matrix(&stops);
        assert_eq!(
            solve_exact(&dm, DEFAULT_EXACT_MAX_SIZE),
            Err(Error::SizeExceeded { count: 9, max: 8 })
        );
    }

    #[test]
    fn test_tie_keeps_first_permutation() {
        // Mirror images around the start: a tour and its reverse sum the
        // same legs in the same order, so the first enumerated one wins.
        let dm = DistanceMatrix::from_locations(
            Coordinate::new(0.0, 0.0),
            &[Coordinate::new(0.0, 1.0), Coordinate::new(0.0, -1.0)],
        )
        .expect("finite");
        assert_eq!(solve_exact(&dm, DEFAULT_EXACT_MAX_SIZE), Ok(vec![1, 2]));
    }

    #[test]
    fn test_beats_input_order() {
        let dm = matrix(&[(50.2, 5.0), (50.0, 5.2), (50.2, 5.2), (50.0, 5.1)]);
        let best = solve_exact(&dm, DEFAULT_EXACT_MAX_SIZE).expect("within bound");
        assert!(tour_distance(&best, &dm) <= tour_distance(&[1, 2, 3, 4], &dm));
    }
}
