//! Placement of geo-points in a viewer-relative 3D frame
//!
//! The frame is the usual scene convention: Y up, the viewer looking along
//! `forward`. A target is placed `distance` meters along `forward`, then turned
//! about the Y axis by the difference between its bearing and the viewer's
//! current compass heading.

use nalgebra::{Rotation3, Vector3};
use crate::core::{AngleUnit, DistanceUnit, GeoCoordinate, ProjectionMode, MAX_RENDER_DISTANCE};

/// How [`scene_position`] treats distance and altitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOptions {
    pub mode: ProjectionMode,
    /// Offset the result vertically by the target/user altitude difference
    pub use_altitude: bool,
    /// Distance clamp applied in [`ProjectionMode::Render`] (meters)
    pub max_render_distance: f64,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Render,
            use_altitude: false,
            max_render_distance: MAX_RENDER_DISTANCE,
        }
    }
}

impl ProjectionOptions {
    pub fn real() -> Self {
        Self {
            mode: ProjectionMode::Real,
            ..Default::default()
        }
    }

    pub fn with_altitude(mut self) -> Self {
        self.use_altitude = true;
        self
    }
}

/// Position of `target` relative to a viewer standing at `user`.
///
/// `forward` is the viewer's forward direction in scene space and
/// `heading_deg` the compass heading that direction corresponds to.
pub fn scene_position(
    user: &GeoCoordinate,
    target: &GeoCoordinate,
    forward: &Vector3<f64>,
    heading_deg: f64,
    options: &ProjectionOptions,
) -> Vector3<f64> {
    let mut distance = GeoCoordinate::distance(user, target, DistanceUnit::Meter);
    let bearing = GeoCoordinate::bearing(user, target, AngleUnit::Degree);

    if options.mode == ProjectionMode::Render && distance > options.max_render_distance {
        distance = options.max_render_distance;
    }

    let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), (bearing - heading_deg).to_radians());
    let mut position = rotation * (forward * distance);

    if options.use_altitude {
        position.y += target.altitude - user.altitude;
    }
    position
}
