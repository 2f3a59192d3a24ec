//! Error types for the geocoding library

use thiserror::Error;

/// Result type for fallible geocoding operations
pub type GeoResult<T> = Result<T, GeoError>;

#[derive(Error, Debug)]
pub enum GeoError {
    /// Ordinal field access outside the valid range
    #[error("Invalid {target} index: {index} (valid range 0..{len})")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        target: &'static str,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration I/O error: {message}")]
    Io { message: String },

    #[error("Configuration serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
}
