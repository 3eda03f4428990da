//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point on the globe in decimal degrees.
///
/// Ranges are not checked: latitudes outside `[-90, 90]` are accepted and
/// simply fed to the distance formula. Only finiteness is validated, by
/// [`Coordinate::validate`] and by every distance computation.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Coordinate;
///
/// let c = Coordinate::new(50.85, 4.35);
/// assert_eq!(c.lat(), 50.85);
/// assert_eq!(c.lon(), 4.35);
/// assert!(c.is_finite());
/// assert!(!Coordinate::new(f64::NAN, 4.35).is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Returns `self` if finite, [`Error::InvalidCoordinate`] otherwise.
    pub fn validate(self) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(Error::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        let c: Coordinate = (50.0, 5.1).into();
        assert_eq!(c, Coordinate::new(50.0, 5.1));
    }

    #[test]
    fn test_validate() {
        assert!(Coordinate::new(0.0, 0.0).validate().is_ok());
        assert!(Coordinate::new(95.0, 400.0).validate().is_ok());
        assert!(matches!(
            Coordinate::new(f64::INFINITY, 0.0).validate(),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(Coordinate::new(0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Coordinate::new(50.5, 4.25)).expect("serialize");
        assert_eq!(json, r#"{"lat":50.5,"lon":4.25}"#);
    }
}
