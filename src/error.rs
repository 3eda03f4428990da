//! Error type shared by every optimizer component.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// A coordinate component is NaN or infinite.
    #[error("invalid coordinate ({lat}, {lon}): components must be finite")]
    InvalidCoordinate { lat: f64, lon: f64 },
    /// A stop without a coordinate reached a distance computation.
    #[error("stop at position {position} has no coordinate")]
    MissingCoordinate { position: usize },
    /// The exact solver was asked for more stops than its bound allows.
    #[error("exact solver supports at most {max} stops, got {count}")]
    SizeExceeded { count: usize, max: usize },
    /// An [`OptimizerConfig`](crate::OptimizerConfig) value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
