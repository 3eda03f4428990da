//! Distances between geographic points.
//!
//! Provides the haversine great-circle metric and a dense distance matrix
//! with the round-trip start at index 0.

mod haversine;
mod matrix;

pub use haversine::{haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
