//! Optimizer tuning parameters.

use serde::{Deserialize, Serialize};

use crate::constructive::DEFAULT_LOOKAHEAD_PENALTY;
use crate::error::{Error, Result};
use crate::exact::{DEFAULT_EXACT_MAX_SIZE, EXACT_SIZE_CEILING};
use crate::local_search::DEFAULT_MAX_ITERATIONS;

/// Knobs trading route quality against running time.
///
/// Missing fields take their defaults when deserialized, so callers can
/// store only the values they override.
///
/// # Examples
///
/// ```
/// use route_optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default().with_max_iterations(500);
/// assert_eq!(config.exact_max_size, 8);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.lookahead_penalty, 5.0);
/// assert!(config.validate().is_ok());
///
/// assert!(OptimizerConfig::default().with_exact_max_size(12).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Largest located-stop count solved exactly; above it the heuristic
    /// path runs. At most [`EXACT_SIZE_CEILING`].
    pub exact_max_size: usize,
    /// Bound on accepted 2-opt reversals.
    pub max_iterations: usize,
    /// Look-ahead estimate per remaining stop, in kilometres.
    pub lookahead_penalty: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            exact_max_size: DEFAULT_EXACT_MAX_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            lookahead_penalty: DEFAULT_LOOKAHEAD_PENALTY,
        }
    }
}

impl OptimizerConfig {
    /// Sets the exact-search threshold.
    pub fn with_exact_max_size(mut self, size: usize) -> Self {
        self.exact_max_size = size;
        self
    }

    /// Sets the 2-opt move bound.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the look-ahead penalty.
    pub fn with_lookahead_penalty(mut self, penalty: f64) -> Self {
        self.lookahead_penalty = penalty;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.exact_max_size > EXACT_SIZE_CEILING {
            return Err(Error::invalid_config(format!(
                "exact_max_size {} exceeds the ceiling of {EXACT_SIZE_CEILING}",
                self.exact_max_size
            )));
        }
        if !self.lookahead_penalty.is_finite() || self.lookahead_penalty < 0.0 {
            return Err(Error::invalid_config(format!(
                "lookahead_penalty must be finite and non-negative, got {}",
                self.lookahead_penalty
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = OptimizerConfig::default();
        assert_eq!(c.exact_max_size, 8);
        assert_eq!(c.max_iterations, 100);
        assert_eq!(c.lookahead_penalty, 5.0);
    }

    #[test]
    fn test_builder() {
        let c = OptimizerConfig::default()
            .with_exact_max_size(6)
            .with_max_iterations(10)
            .with_lookahead_penalty(2.5);
        assert_eq!(c.exact_max_size, 6);
        assert_eq!(c.max_iterations, 10);
        assert_eq!(c.lookahead_penalty, 2.5);
    }

    #[test]
    fn test_validate() {
        assert!(OptimizerConfig::default().validate().is_ok());
        assert!(OptimizerConfig::default().with_exact_max_size(0).validate().is_ok());
        assert!(OptimizerConfig::default().with_exact_max_size(10).validate().is_ok());
        assert!(matches!(
            OptimizerConfig::default().with_exact_max_size(11).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(OptimizerConfig::default()
            .with_lookahead_penalty(-1.0)
            .validate()
            .is_err());
        assert!(OptimizerConfig::default()
            .with_lookahead_penalty(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json() {
        let c: OptimizerConfig = serde_json::from_str(r#"{"max_iterations": 25}"#).expect("parse");
        assert_eq!(c, OptimizerConfig::default().with_max_iterations(25));
    }
}
