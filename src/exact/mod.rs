//! Exact solving for small round trips.
//!
//! - [`solve_exact`] — exhaustive permutation search, O(n!·n), size-bounded

mod brute_force;

pub use brute_force::{solve_exact, DEFAULT_EXACT_MAX_SIZE, EXACT_SIZE_CEILING};
