//! Stops to visit and the trait that exposes their location.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Read access to an optional location.
///
/// The optimizer is generic over this trait so callers can pass their own
/// records and get references to those same records back, in route order.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, Locate};
///
/// struct Patient {
///     name: &'static str,
///     gps: Option<(f64, f64)>,
/// }
///
/// impl Locate for Patient {
///     fn coordinate(&self) -> Option<Coordinate> {
///         self.gps.map(Coordinate::from)
///     }
/// }
///
/// let p = Patient { name: "a", gps: Some((50.0, 5.0)) };
/// assert_eq!(p.coordinate(), Some(Coordinate::new(50.0, 5.0)));
/// ```
pub trait Locate {
    /// Returns the location, or `None` if this stop cannot be placed on a map.
    fn coordinate(&self) -> Option<Coordinate>;
}

impl Locate for Coordinate {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl<T: Locate + ?Sized> Locate for &T {
    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }
}

/// A visit with an opaque caller identity and an optional coordinate.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Coordinate, Locate, Stop};
///
/// let s = Stop::new(7, Coordinate::new(50.0, 5.0));
/// assert_eq!(*s.id(), 7);
/// assert!(s.coordinate().is_some());
///
/// let u = Stop::unlocated(8);
/// assert!(u.coordinate().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop<K> {
    id: K,
    coordinate: Option<Coordinate>,
}

impl<K> Stop<K> {
    /// Creates a located stop.
    pub fn new(id: K, coordinate: Coordinate) -> Self {
        Self {
            id,
            coordinate: Some(coordinate),
        }
    }

    /// Creates a stop with no known location.
    pub fn unlocated(id: K) -> Self {
        Self {
            id,
            coordinate: None,
        }
    }

    /// Caller-supplied identity.
    pub fn id(&self) -> &K {
        &self.id
    }
}

impl<K> Locate for Stop<K> {
    fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_locate() {
        let s = Stop::new("a", Coordinate::new(1.0, 2.0));
        let r = &s;
        assert_eq!(r.coordinate(), Some(Coordinate::new(1.0, 2.0)));
        assert_eq!(Coordinate::new(3.0, 4.0).coordinate(), Some(Coordinate::new(3.0, 4.0)));
    }

    #[test]
    fn test_deserialize_missing_coordinate() {
        let s: Stop<u32> = serde_json::from_str(r#"{"id":4,"coordinate":null}"#).expect("parse");
        assert_eq!(s, Stop::unlocated(4));
    }
}
