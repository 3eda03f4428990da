//! End-to-end optimization of a caller's stop list.

use crate::config::OptimizerConfig;
use crate::constructive::{construct_heuristic, nearest_neighbor};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::tour_distance;
use crate::exact::solve_exact;
use crate::local_search::refine_2opt_with_stats;
use crate::models::{Coordinate, Locate};

use super::{AlgorithmComparison, Strategy};

/// Largest located-stop count [`Optimizer::compare`] accepts.
pub const COMPARISON_MAX_STOPS: usize = 10;

/// Orders stops into a short round trip from a fixed start.
///
/// Holds only its configuration, so one optimizer can serve any number of
/// independent calls, from any thread.
///
/// # Examples
///
/// ```
/// use route_optimizer::{Coordinate, Optimizer, Stop, Strategy};
///
/// let stops = vec![
///     Stop::new("north", Coordinate::new(50.1, 5.0)),
///     Stop::unlocated("unknown"),
///     Stop::new("east", Coordinate::new(50.0, 5.1)),
/// ];
/// let start = Coordinate::new(50.0, 5.0);
///
/// let result = Optimizer::default().optimize(&stops, start).unwrap();
/// assert_eq!(result.strategy(), Strategy::Exact);
/// assert_eq!(result.route().len(), 2);
/// assert_eq!(*result.unlocated()[0].id(), "unknown");
/// assert!(result.total_distance() > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer after validating `config`.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Orders the located stops of `stops` into a round trip from `start`.
    ///
    /// Stops without a coordinate are set aside and reported through
    /// [`Optimization::unlocated`]. A non-finite start or stop coordinate
    /// fails the whole call.
    pub fn optimize<'a, T: Locate>(
        &self,
        stops: &'a [T],
        start: Coordinate,
    ) -> Result<Optimization<'a, T>> {
        let start = start.validate()?;
        let located = LocatedStops::split(stops);
        let n = located.len();
        let strategy = Strategy::for_count(n, self.config.exact_max_size);

        log::info!(
            "optimize: located={n} unlocated={} strategy=\"{strategy}\"",
            located.unlocated.len()
        );

        let (tour, total_distance) = if strategy == Strategy::Empty {
            (Vec::new(), 0.0)
        } else {
            let distances = DistanceMatrix::from_locations(start, &located.coordinates)?;
            let tour = self.solve(&distances, strategy)?;
            let total = tour_distance(&tour, &distances);
            (tour, total)
        };

        let order: Vec<usize> = tour.iter().map(|&loc| located.indices[loc - 1]).collect();

        log::info!("optimize: done stops={n} total_km={total_distance:.2}");

        Ok(Optimization {
            stops,
            order,
            unlocated: located.unlocated,
            total_distance,
            strategy,
        })
    }

    fn solve(&self, distances: &DistanceMatrix, strategy: Strategy) -> Result<Vec<usize>> {
        match strategy {
            Strategy::Empty => Ok(Vec::new()),
            Strategy::Exact => solve_exact(distances, self.config.exact_max_size),
            Strategy::HeuristicTwoOpt => {
                let initial = construct_heuristic(distances, self.config.lookahead_penalty);
                let initial_km = tour_distance(&initial, distances);
                let outcome =
                    refine_2opt_with_stats(&initial, distances, self.config.max_iterations);
                if outcome.hit_iteration_limit {
                    log::warn!(
                        "optimize: 2-opt stopped at max_iterations={} before a local optimum",
                        self.config.max_iterations
                    );
                }
                log::debug!(
                    "optimize: heuristic_km={initial_km:.3} refined_km={:.3} moves={}",
                    outcome.distance,
                    outcome.moves
                );
                Ok(outcome.tour)
            }
        }
    }

    /// Runs the plain nearest-neighbor baseline, the look-ahead heuristic
    /// and (within the exact bound) exact search on the same stops.
    ///
    /// Returns `None` when there are no located stops or more than
    /// [`COMPARISON_MAX_STOPS`].
    pub fn compare<T: Locate>(
        &self,
        stops: &[T],
        start: Coordinate,
    ) -> Result<Option<AlgorithmComparison>> {
        let start = start.validate()?;
        let located = LocatedStops::split(stops);
        let n = located.len();
        if n == 0 || n > COMPARISON_MAX_STOPS {
            log::warn!(
                "compare: skipped stops={n}, supported range is 1..={COMPARISON_MAX_STOPS}"
            );
            return Ok(None);
        }

        let distances = DistanceMatrix::from_locations(start, &located.coordinates)?;
        let nearest_neighbor_km = tour_distance(&nearest_neighbor(&distances), &distances);
        let heuristic_km = tour_distance(
            &construct_heuristic(&distances, self.config.lookahead_penalty),
            &distances,
        );
        let exact_km = if n <= self.config.exact_max_size {
            let tour = solve_exact(&distances, self.config.exact_max_size)?;
            Some(tour_distance(&tour, &distances))
        } else {
            None
        };

        let comparison = AlgorithmComparison {
            stops: n,
            nearest_neighbor_km,
            heuristic_km,
            exact_km,
        };
        log::info!("compare: {comparison}");

        Ok(Some(comparison))
    }
}

/// The result of [`Optimizer::optimize`].
///
/// Borrows the caller's stops; nothing is copied or mutated.
#[derive(Debug)]
pub struct Optimization<'a, T> {
    stops: &'a [T],
    order: Vec<usize>,
    unlocated: Vec<usize>,
    total_distance: f64,
    strategy: Strategy,
}

impl<'a, T> Optimization<'a, T> {
    /// Located stops in visiting order.
    pub fn route(&self) -> Vec<&'a T> {
        let stops = self.stops;
        self.order.iter().map(|&i| &stops[i]).collect()
    }

    /// Input positions of the located stops, in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Stops that had no coordinate, in input order.
    pub fn unlocated(&self) -> Vec<&'a T> {
        let stops = self.stops;
        self.unlocated.iter().map(|&i| &stops[i]).collect()
    }

    /// Round-trip distance of [`route`](Self::route) in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// The algorithm that produced the route.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Zero-based visiting rank for every input stop, indexed by input
    /// position.
    ///
    /// Located stops are ranked by route order; unlocated stops follow them
    /// in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_optimizer::{Coordinate, Optimizer, Stop};
    ///
    /// let stops = vec![
    ///     Stop::unlocated(0),
    ///     Stop::new(1, Coordinate::new(50.1, 5.0)),
    /// ];
    /// let result = Optimizer::default()
    ///     .optimize(&stops, Coordinate::new(50.0, 5.0))
    ///     .unwrap();
    /// assert_eq!(result.ranks(), vec![1, 0]);
    /// ```
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.stops.len()];
        for (rank, &i) in self.order.iter().chain(&self.unlocated).enumerate() {
            ranks[i] = rank;
        }
        ranks
    }
}

/// Located stops split from the input, keeping input positions.
struct LocatedStops {
    indices: Vec<usize>,
    coordinates: Vec<Coordinate>,
    unlocated: Vec<usize>,
}

impl LocatedStops {
    fn split<T: Locate>(stops: &[T]) -> Self {
        let mut indices = Vec::new();
        let mut coordinates = Vec::new();
        let mut unlocated = Vec::new();
        for (i, stop) in stops.iter().enumerate() {
            match stop.coordinate() {
                Some(c) => {
                    indices.push(i);
                    coordinates.push(c);
                }
                None => unlocated.push(i),
            }
        }
        Self {
            indices,
            coordinates,
            unlocated,
        }
    }

    fn len(&self) -> usize {
        self.indices.len()
    }
}
