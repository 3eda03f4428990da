//! Domain model types for round-trip optimization.
//!
//! A stop is anything that can report an optional [`Coordinate`] through the
//! [`Locate`] trait. [`Stop`] is a ready-made record for callers that do not
//! have their own.

mod coordinate;
mod stop;

pub use coordinate::Coordinate;
pub use stop::{Locate, Stop};
