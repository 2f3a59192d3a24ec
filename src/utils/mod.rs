//! Utility modules for configuration and logging

pub mod config;
pub mod logging;

pub use config::{ConfigurationManager, GeocodingConfig, ValidationResult};
pub use logging::{init_logging, init_logging_from};
