//! Strategy selection and the end-to-end pipeline.
//!
//! Up to `exact_max_size` located stops are solved exactly; larger inputs
//! get the look-ahead greedy tour refined by 2-opt.

mod comparison;
mod solver;
mod strategy;

pub use comparison::AlgorithmComparison;
pub use solver::{Optimization, Optimizer, COMPARISON_MAX_STOPS};
pub use strategy::{AlgorithmInfo, Strategy};
