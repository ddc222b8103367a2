//! Error types for configuration loading

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while building a [`crate::Config`]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// A setting could not be parsed
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// Grid side length outside the supported range
    #[error("grid size must be between 1 and {max}, got {size}")]
    GridSize { size: usize, max: usize },

    /// Tick rate that is zero, negative or not finite
    #[error("ticks per second must be a positive number, got {0}")]
    TickRate(f64),
}
