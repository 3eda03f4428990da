//! # route-optimizer
//!
//! Single-vehicle round-trip optimization for geolocated stops: orders the
//! stops into a short tour that starts and ends at a fixed location, using
//! great-circle distances.
//!
//! ## Modules
//!
//! - [`models`] — Coordinates, stops, and the [`Locate`] trait
//! - [`distance`] — Haversine metric and distance matrix
//! - [`evaluation`] — Round-trip cost of a visiting order
//! - [`exact`] — Exhaustive search for small stop counts
//! - [`constructive`] — Greedy tour construction
//! - [`local_search`] — 2-opt refinement
//! - [`config`] — Tunables with documented defaults
//! - [`optimizer`] — Strategy selection and the end-to-end [`Optimizer`]

pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod exact;
pub mod local_search;
pub mod models;
pub mod optimizer;

pub use config::OptimizerConfig;
pub use constructive::{construct_heuristic, nearest_neighbor};
pub use distance::{haversine, DistanceMatrix};
pub use error::{Error, Result};
pub use evaluation::{total_round_trip_distance, tour_distance};
pub use exact::solve_exact;
pub use local_search::refine_2opt;
pub use models::{Coordinate, Locate, Stop};
pub use optimizer::{AlgorithmComparison, AlgorithmInfo, Optimization, Optimizer, Strategy};
