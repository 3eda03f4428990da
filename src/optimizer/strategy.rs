//! Which algorithm handles a given problem size.

use std::fmt;

use serde::Serialize;

/// The algorithm family used for an optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    /// No located stops; nothing was run.
    Empty,
    /// Exhaustive permutation search.
    Exact,
    /// Look-ahead greedy construction followed by 2-opt.
    HeuristicTwoOpt,
}

impl Strategy {
    /// Chooses the strategy for `count` located stops.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_optimizer::Strategy;
    ///
    /// assert_eq!(Strategy::for_count(0, 8), Strategy::Empty);
    /// assert_eq!(Strategy::for_count(8, 8), Strategy::Exact);
    /// assert_eq!(Strategy::for_count(9, 8), Strategy::HeuristicTwoOpt);
    /// ```
    pub fn for_count(count: usize, exact_max_size: usize) -> Self {
        match count {
            0 => Self::Empty,
            n if n <= exact_max_size => Self::Exact,
            _ => Self::HeuristicTwoOpt,
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "No stops",
            Self::Exact => "Exact TSP",
            Self::HeuristicTwoOpt => "Improved Heuristic + 2-opt",
        }
    }

    /// Descriptive summary of the algorithm.
    pub fn info(&self) -> AlgorithmInfo {
        match self {
            Self::Empty => AlgorithmInfo {
                algorithm: self.label(),
                description: "Nothing to order",
                complexity: "O(1)",
                guaranteed_optimal: true,
            },
            Self::Exact => AlgorithmInfo {
                algorithm: self.label(),
                description: "Optimal solution using exhaustive search",
                complexity: "O(n!)",
                guaranteed_optimal: true,
            },
            Self::HeuristicTwoOpt => AlgorithmInfo {
                algorithm: self.label(),
                description: "Nearest neighbor with return look-ahead, refined by 2-opt",
                complexity: "O(n²) construction, O(n³) per 2-opt pass",
                guaranteed_optimal: false,
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static description of a [`Strategy`], suitable for showing to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    /// Same text as [`Strategy::label`].
    pub algorithm: &'static str,
    /// One-line summary of how the route is built.
    pub description: &'static str,
    /// Time complexity in the stop count `n`.
    pub complexity: &'static str,
    /// Whether the route is always a shortest round trip.
    pub guaranteed_optimal: bool,
}
