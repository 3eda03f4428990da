//! Round-trip cost of an ordered sequence of stops.

use crate::distance::{haversine, DistanceMatrix};
use crate::error::{Error, Result};
use crate::models::{Coordinate, Locate};

/// Total distance of `start → tour[0] → … → tour[n-1] → start`.
///
/// `tour` holds location indices into `distances` (the start, index 0, is
/// implicit at both ends). An empty tour costs nothing. This is the
/// objective every solver minimizes.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::evaluation::tour_distance;
///
/// let start = Coordinate::new(0.0, 0.0);
/// let dm = DistanceMatrix::from_locations(start, &[Coordinate::new(0.0, 1.0)]).unwrap();
/// assert_eq!(tour_distance(&[], &dm), 0.0);
/// assert!((tour_distance(&[1], &dm) - 2.0 * dm.get(0, 1)).abs() < 1e-12);
/// ```
pub fn tour_distance(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let inner: f64 = tour.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    distances.get(0, first) + inner + distances.get(last, 0)
}

/// Total round-trip distance of `route` starting and ending at `start`,
/// computed directly from coordinates.
///
/// Fails if a stop has no coordinate or any coordinate is non-finite.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, Stop};
/// use route_optimizer::evaluation::total_round_trip_distance;
///
/// let start = Coordinate::new(0.0, 0.0);
/// let route = [Stop::new("a", Coordinate::new(0.0, 1.0))];
/// let d = total_round_trip_distance(&route, start).unwrap();
/// assert!((d - 222.39).abs() < 0.01);
///
/// let empty: [Stop<&str>; 0] = [];
/// assert_eq!(total_round_trip_distance(&empty, start).unwrap(), 0.0);
/// ```
pub fn total_round_trip_distance<T: Locate>(route: &[T], start: Coordinate) -> Result<f64> {
    if route.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    let mut current = start;
    for (position, stop) in route.iter().enumerate() {
        let next = stop
            .coordinate()
            .ok_or(Error::MissingCoordinate { position })?;
        total += haversine(current, next)?;
        current = next;
    }
    total += haversine(current, start)?;

    Ok(total)
}
