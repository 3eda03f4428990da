//! Local search for improving a constructed round trip.
//!
//! - [`refine_2opt`] — first-improvement segment reversal

mod two_opt;

pub use two_opt::{refine_2opt, refine_2opt_with_stats, TwoOptOutcome, DEFAULT_MAX_ITERATIONS};
