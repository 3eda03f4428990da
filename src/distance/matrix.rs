//! Dense distance matrix over the start location and the stops.

use crate::error::Result;
use crate::models::Coordinate;

use super::haversine;

/// A dense n×n haversine distance matrix stored in row-major order.
///
/// Location `0` is the start of the round trip; locations `1..=n` are the
/// stops in the order they were supplied. Every coordinate is validated
/// once, on construction, so lookups are infallible.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::DistanceMatrix;
///
/// let start = Coordinate::new(50.0, 5.0);
/// let stops = [Coordinate::new(50.1, 5.0), Coordinate::new(50.0, 5.1)];
/// let dm = DistanceMatrix::from_locations(start, &stops).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.num_stops(), 2);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert_eq!(dm.get(0, 2), dm.get(2, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds the matrix for a round trip from `start` through `stops`.
    ///
    /// Fails if any coordinate, including `start`, is non-finite.
    pub fn from_locations(start: Coordinate, stops: &[Coordinate]) -> Result<Self> {
        let locations: Vec<Coordinate> = std::iter::once(start)
            .chain(stops.iter().copied())
            .map(Coordinate::validate)
            .collect::<Result<_>>()?;

        let n = locations.len();
        let mut dm = Self {
            data: vec![0.0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine(locations[i], locations[j])?;
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations, start included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stops (locations other than the start).
    pub fn num_stops(&self) -> usize {
        self.size - 1
    }

    /// Stop location indices `1..=n` in input order.
    pub fn stop_indices(&self) -> Vec<usize> {
        (1..self.size).collect()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate nearest to `from`; ties go to the earliest
    /// candidate in the slice.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}
