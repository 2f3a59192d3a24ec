use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{DistanceUnit, GeoCoordinate, HeadingWrap, DEFAULT_USER_COORDINATE, MAX_RENDER_DISTANCE};
use crate::error::ConfigError;

/// Render distances above this are accepted but flagged (meters)
const RENDER_DISTANCE_WARNING_M: f64 = 50_000.0;

/// Library-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// Distance clamp for scene placement in render mode (meters)
    pub max_render_distance_m: f64,
    /// User coordinate before the first location fix
    pub initial_coordinate: GeoCoordinate,
    /// Compass heading assigned to the initial yaw (degrees)
    pub starting_heading_deg: f64,
    /// Wrap policy for computed headings
    pub heading_wrap: HeadingWrap,
    /// Unit returned by `CoordinateContext::distance_to`
    pub default_distance_unit: DistanceUnit,
    /// `tracing` filter directive for `init_logging_from` when no `RUST_LOG` is set
    pub log_filter: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            max_render_distance_m: MAX_RENDER_DISTANCE,
            initial_coordinate: DEFAULT_USER_COORDINATE,
            starting_heading_deg: 0.0,
            heading_wrap: HeadingWrap::UpperOnly,
            default_distance_unit: DistanceUnit::Meter,
            log_filter: format!("{}=info", env!("CARGO_CRATE_NAME")),
        }
    }
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether configuration is valid
    pub is_valid: bool,
    /// Validation errors
    pub errors: Vec<ConfigError>,
    /// Validation warnings
    pub warnings: Vec<String>,
}

/// Loads, validates and persists [`GeocodingConfig`]
pub struct ConfigurationManager {
    config: GeocodingConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self {
            config: GeocodingConfig::default(),
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    /// Get current configuration
    pub fn config(&self) -> &GeocodingConfig {
        &self.config
    }

    /// Replace the configuration after validating it
    pub fn update_config(&mut self, config: GeocodingConfig) -> Result<(), ConfigError> {
        Self::ensure_valid(Self::validate(&config))?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: GeocodingConfig = serde_json::from_str(&content).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to parse config file '{}': {}", path_str, e),
        })?;

        let validation = Self::validate(&config);
        for warning in &validation.warnings {
            tracing::warn!(path = %path_str, "{}", warning);
        }
        Self::ensure_valid(validation)?;

        tracing::info!(path = %path_str, "configuration loaded");
        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        tracing::info!(path = %path_str, "configuration saved");
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::Io {
                message: "No file path set for saving configuration".to_string(),
            }),
        }
    }

    /// Check if configuration has unsaved changes
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Adjust the render distance clamp, returning the previous value
    pub fn set_max_render_distance(&mut self, meters: f64) -> Result<f64, ConfigError> {
        if let Some(error) = check_render_distance(meters) {
            return Err(error);
        }
        let old_value = self.config.max_render_distance_m;
        self.config.max_render_distance_m = meters;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Switch the heading wrap policy
    pub fn set_heading_wrap(&mut self, wrap: HeadingWrap) {
        self.config.heading_wrap = wrap;
        self.is_modified = true;
    }

    /// Check every parameter and collect errors and warnings
    pub fn validate(config: &GeocodingConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        if let Some(error) = check_render_distance(config.max_render_distance_m) {
            result.errors.push(error);
        } else if config.max_render_distance_m > RENDER_DISTANCE_WARNING_M {
            result.warnings.push(format!(
                "max_render_distance_m of {} m exceeds {} m; distant points will be placed far from the viewer",
                config.max_render_distance_m, RENDER_DISTANCE_WARNING_M
            ));
        }

        let coord = &config.initial_coordinate;
        if !(-90.0..=90.0).contains(&coord.latitude) {
            result.errors.push(invalid("initial_coordinate.latitude", coord.latitude, "Latitude must be between -90 and 90 degrees"));
        }
        if !(-180.0..=180.0).contains(&coord.longitude) {
            result.errors.push(invalid("initial_coordinate.longitude", coord.longitude, "Longitude must be between -180 and 180 degrees"));
        }

        if !config.starting_heading_deg.is_finite() {
            result.errors.push(invalid("starting_heading_deg", config.starting_heading_deg, "Heading must be a finite angle"));
        } else if !(-180.0..=360.0).contains(&config.starting_heading_deg) {
            result.warnings.push(format!(
                "starting_heading_deg of {} lies outside [-180, 360]",
                config.starting_heading_deg
            ));
        }

        if config.log_filter.trim().is_empty() {
            result.errors.push(ConfigError::InvalidParameter {
                parameter: "log_filter".to_string(),
                value: String::new(),
                reason: "Log filter must not be empty".to_string(),
            });
        }

        result.is_valid = result.errors.is_empty();
        result
    }

    fn ensure_valid(validation: ValidationResult) -> Result<(), ConfigError> {
        match validation.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn check_render_distance(meters: f64) -> Option<ConfigError> {
    if meters.is_finite() && meters > 0.0 {
        None
    } else {
        Some(invalid("max_render_distance_m", meters, "Render distance must be a positive number of meters"))
    }
}

fn invalid(parameter: &str, value: f64, reason: &str) -> ConfigError {
    ConfigError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
