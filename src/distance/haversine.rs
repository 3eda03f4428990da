//! Great-circle distance on a spherical Earth.

use crate::error::Result;
use crate::models::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
///
/// Fails with [`Error::InvalidCoordinate`](crate::Error::InvalidCoordinate)
/// if either point has a non-finite component, so NaN never reaches a
/// comparison.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
/// use route_optimizer::distance::haversine;
///
/// let a = Coordinate::new(50.0, 5.0);
/// let b = Coordinate::new(51.0, 5.0);
/// let d = haversine(a, b).unwrap();
/// assert!((d - 111.19).abs() < 0.01);
/// assert_eq!(haversine(a, a).unwrap(), 0.0);
/// ```
pub fn haversine(a: Coordinate, b: Coordinate) -> Result<f64> {
    let a = a.validate()?;
    let b = b.validate()?;

    let (lat1, lon1) = (a.lat().to_radians(), a.lon().to_radians());
    let (lat2, lon2) = (b.lat().to_radians(), b.lon().to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h slightly past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_RADIUS_KM * c)
}
