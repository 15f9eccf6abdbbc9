use thiserror::Error;

/// Error type for invalid merge configurations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The similarity threshold is not a ratio
    #[error("Invalid similarity threshold: {threshold} is not a number within [0, 1]")]
    InvalidSimilarityThreshold {
        /// The rejected threshold
        threshold: f64,
    },
}
