//! Great-circle geodesy on a spherical Earth
//!
//! All operations treat the Earth as a sphere of radius [`EARTH_RADIUS`]
//! (the WGS84 equatorial radius). Altitude never takes part in any formula.
//! Inputs are degrees; trigonometry runs in radians.

use crate::core::{AngleUnit, DistanceUnit, GeoCoordinate, DEG_TO_RAD, EARTH_RADIUS, METERS_PER_KILOMETER, RAD_TO_DEG};

impl GeoCoordinate {
    /// Haversine great-circle distance between two coordinates
    pub fn distance(a: &GeoCoordinate, b: &GeoCoordinate, unit: DistanceUnit) -> f64 {
        unit.convert_meters(haversine_meters(a, b))
    }

    /// Distance with a raw unit code (Meter=0, Kilometer=1, Miles=2).
    ///
    /// Unknown codes yield `NaN` instead of an error.
    pub fn distance_with_unit_code(a: &GeoCoordinate, b: &GeoCoordinate, code: i32) -> f64 {
        match DistanceUnit::try_from(code) {
            Ok(unit) => Self::distance(a, b, unit),
            Err(_) => f64::NAN,
        }
    }

    /// Initial bearing from `a` towards `b`, in [-π, π] for radians
    pub fn bearing(a: &GeoCoordinate, b: &GeoCoordinate, unit: AngleUnit) -> f64 {
        unit.convert_radians(initial_bearing_radians(a, b))
    }

    /// Bearing with a raw unit code (Degree=0, Radian=1).
    ///
    /// Unknown codes yield `NaN` instead of an error.
    pub fn bearing_with_unit_code(a: &GeoCoordinate, b: &GeoCoordinate, code: i32) -> f64 {
        match AngleUnit::try_from(code) {
            Ok(unit) => Self::bearing(a, b, unit),
            Err(_) => f64::NAN,
        }
    }

    /// Midpoint of two coordinates.
    ///
    /// The latitude terms of this formula are taken from the *longitude*
    /// fields of the inputs. Existing callers depend on that output, so it is
    /// kept as is; [`GeoCoordinate::midpoint_corrected`] evaluates the
    /// formula with the real latitudes.
    pub fn midpoint(a: &GeoCoordinate, b: &GeoCoordinate) -> GeoCoordinate {
        let lon1 = a.longitude * DEG_TO_RAD;
        let lon2 = b.longitude * DEG_TO_RAD;
        spherical_midpoint(lon1, lon1, lon2, lon2)
    }

    /// Great-circle midpoint using the latitude fields
    pub fn midpoint_corrected(a: &GeoCoordinate, b: &GeoCoordinate) -> GeoCoordinate {
        spherical_midpoint(
            a.latitude * DEG_TO_RAD,
            a.longitude * DEG_TO_RAD,
            b.latitude * DEG_TO_RAD,
            b.longitude * DEG_TO_RAD,
        )
    }

    /// Destination reached from `from` along `bearing` (radians).
    ///
    /// **`distance` is in kilometers.** It is multiplied by 1000 before the
    /// direct geodesic solution is applied. Passing meters moves the point a
    /// thousand times too far.
    pub fn move_towards(from: &GeoCoordinate, distance: f64, bearing: f64) -> GeoCoordinate {
        let from_lat = from.latitude * DEG_TO_RAD;
        let from_lon = from.longitude * DEG_TO_RAD;

        let angular = distance * METERS_PER_KILOMETER / EARTH_RADIUS;

        let to_lat = (from_lat.sin() * angular.cos() + from_lat.cos() * angular.sin() * bearing.cos()).asin();
        let to_lon = from_lon
            + (bearing.sin() * angular.sin() * from_lat.cos())
                .atan2(angular.cos() - from_lat.sin() * to_lat.sin());

        GeoCoordinate::new(to_lat * RAD_TO_DEG, to_lon * RAD_TO_DEG)
    }

    /// Point along the great circle from `start` towards `end`.
    ///
    /// Moves `fraction` times the start/end distance in meters through
    /// [`GeoCoordinate::move_towards`], so the kilometer scaling of that
    /// function applies to the result.
    pub fn lerp(start: &GeoCoordinate, end: &GeoCoordinate, fraction: f64) -> GeoCoordinate {
        let bearing = Self::bearing(start, end, AngleUnit::Radian);
        let distance = Self::distance(start, end, DistanceUnit::Meter);
        Self::move_towards(start, fraction * distance, bearing)
    }
}

fn haversine_meters(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let lat1 = a.latitude * DEG_TO_RAD;
    let lat2 = b.latitude * DEG_TO_RAD;
    let half_dlat = 0.5 * (lat2 - lat1);
    let half_dlon = 0.5 * (b.longitude - a.longitude) * DEG_TO_RAD;

    let h = half_dlat.sin() * half_dlat.sin() + lat1.cos() * lat2.cos() * half_dlon.sin() * half_dlon.sin();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    c * EARTH_RADIUS
}

fn initial_bearing_radians(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let lat1 = a.latitude * DEG_TO_RAD;
    let lat2 = b.latitude * DEG_TO_RAD;
    let dlon = (b.longitude - a.longitude) * DEG_TO_RAD;

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    y.atan2(x)
}

fn spherical_midpoint(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GeoCoordinate {
    let bx = lat2.cos() * (lon2 - lon1).cos();
    let by = lat2.cos() * (lon2 - lon1).sin();
    let cos_lat1_bx = lat1.cos() + bx;

    let mid_lat = (lat1.sin() + lat2.sin()).atan2((cos_lat1_bx * cos_lat1_bx + by * by).sqrt());
    let mid_lon = lon1 + by.atan2(cos_lat1_bx);

    GeoCoordinate::new(mid_lat * RAD_TO_DEG, mid_lon * RAD_TO_DEG)
}
