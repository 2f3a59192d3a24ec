//! Core types and constants for the geocoding library

pub mod types;
pub mod constants;
pub mod geo_coordinate;

pub use types::*;
pub use constants::*;
pub use geo_coordinate::{FieldId, GeoCoordinate, FIELD_COUNT};
