//! Side-by-side distances of the available algorithms.

use std::fmt;

use serde::Serialize;

/// Round-trip distances produced by each algorithm on the same stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmComparison {
    /// Number of located stops compared.
    pub stops: usize,
    /// Plain nearest neighbor, the baseline.
    pub nearest_neighbor_km: f64,
    /// Nearest neighbor with return look-ahead.
    pub heuristic_km: f64,
    /// Exact optimum, when the stop count is within the exact bound.
    pub exact_km: Option<f64>,
}

impl AlgorithmComparison {
    /// Relative change of the look-ahead heuristic against the baseline,
    /// in percent. Negative means shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_optimizer::AlgorithmComparison;
    ///
    /// let c = AlgorithmComparison {
    ///     stops: 4,
    ///     nearest_neighbor_km: 200.0,
    ///     heuristic_km: 180.0,
    ///     exact_km: Some(150.0),
    /// };
    /// assert_eq!(c.heuristic_change_percent(), -10.0);
    /// assert_eq!(c.exact_change_percent(), Some(-25.0));
    /// ```
    pub fn heuristic_change_percent(&self) -> f64 {
        self.change_percent(self.heuristic_km)
    }

    /// Relative change of the exact optimum against the baseline, in
    /// percent.
    pub fn exact_change_percent(&self) -> Option<f64> {
        self.exact_km.map(|km| self.change_percent(km))
    }

    fn change_percent(&self, km: f64) -> f64 {
        if self.nearest_neighbor_km == 0.0 {
            return 0.0;
        }
        (km - self.nearest_neighbor_km) / self.nearest_neighbor_km * 100.0
    }
}

impl fmt::Display for AlgorithmComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stops={} nearest_neighbor_km={:.2} heuristic_km={:.2} ({:+.1}%)",
            self.stops,
            self.nearest_neighbor_km,
            self.heuristic_km,
            self.heuristic_change_percent()
        )?;
        if let (Some(km), Some(pct)) = (self.exact_km, self.exact_change_percent()) {
            write!(f, " exact_km={km:.2} ({pct:+.1}%)")?;
        }
        Ok(())
    }
}
