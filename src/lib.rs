//! Geocoding
//!
//! Spherical-Earth geodesy for geographic coordinates (distance, bearing,
//! midpoint, destination and interpolation), a double-precision 2D vector,
//! and compass heading calibration from device yaw.

pub mod core;
pub mod algorithms;
pub mod api;
pub mod utils;
pub mod error;

// Re-export commonly used types
pub use crate::core::{AngleUnit, DistanceUnit, FieldId, GeoCoordinate, HeadingWrap, ProjectionMode, DEFAULT_USER_COORDINATE, EARTH_RADIUS};
pub use crate::algorithms::{scene_position, HeadingReferenceTracker, ProjectionOptions, Vector2d};
pub use crate::api::{CoordinateContext, JsonCodec, UserPose};
pub use crate::utils::{init_logging, init_logging_from, ConfigurationManager, GeocodingConfig};
pub use crate::error::{ConfigError, GeoError, GeoResult};
