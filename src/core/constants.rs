//! Physical constants and unit conversion factors

use super::geo_coordinate::GeoCoordinate;

/// Spherical Earth radius in meters (WGS84 equatorial radius)
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Maximum distance (meters) at which a geo-point is placed in the scene
pub const MAX_RENDER_DISTANCE: f64 = 5000.0;

/// Coordinate used until the first location fix arrives
pub const DEFAULT_USER_COORDINATE: GeoCoordinate = GeoCoordinate {
    timestamp: 0.0,
    latitude: 39.0,
    longitude: 32.0,
    altitude: 0.0,
    horizontal_accuracy: 0.0,
    vertical_accuracy: 0.0,
};

/// Meters per kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
