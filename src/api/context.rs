//! User location and heading state shared with scene consumers
//!
//! `CoordinateContext` is handed to whatever needs the user's position or
//! heading; there is no global instance.

use nalgebra::Vector3;

use crate::algorithms::{scene_position, HeadingReferenceTracker, ProjectionOptions};
use crate::core::{DistanceUnit, GeoCoordinate, ProjectionMode};
use crate::utils::config::GeocodingConfig;

/// Viewer orientation in scene space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserPose {
    /// Forward direction of the viewer
    pub forward: Vector3<f64>,
    /// Yaw about the vertical axis (degrees)
    pub yaw: f64,
}

impl UserPose {
    /// Create a pose from a forward vector and yaw
    pub fn new(forward: Vector3<f64>, yaw: f64) -> Self {
        Self { forward, yaw }
    }
}

#[derive(Debug, Clone)]
pub struct CoordinateContext {
    user_coordinate: GeoCoordinate,
    heading: HeadingReferenceTracker,
    max_render_distance: f64,
    distance_unit: DistanceUnit,
}

impl CoordinateContext {
    /// Context at the default coordinate, calibrated so that `initial_yaw`
    /// faces `starting_heading`
    pub fn new(initial_yaw: f64, starting_heading: f64) -> Self {
        let config = GeocodingConfig {
            starting_heading_deg: starting_heading,
            ..Default::default()
        };
        Self::from_config(&config, initial_yaw)
    }

    /// Context seeded from a loaded configuration
    pub fn from_config(config: &GeocodingConfig, initial_yaw: f64) -> Self {
        let heading = HeadingReferenceTracker::new(initial_yaw, config.starting_heading_deg).with_wrap(config.heading_wrap);
        Self {
            user_coordinate: config.initial_coordinate,
            heading,
            max_render_distance: config.max_render_distance_m,
            distance_unit: config.default_distance_unit,
        }
    }

    /// Current user coordinate
    pub fn user_coordinate(&self) -> &GeoCoordinate {
        &self.user_coordinate
    }

    /// Replace the user coordinate with a new fix
    pub fn update_user_coordinate(&mut self, coordinate: GeoCoordinate) {
        tracing::trace!(%coordinate, "user coordinate updated");
        self.user_coordinate = coordinate;
    }

    pub fn heading_tracker(&self) -> &HeadingReferenceTracker {
        &self.heading
    }

    /// Great-circle distance from the user to `target` in the configured unit
    pub fn distance_to(&self, target: &GeoCoordinate) -> f64 {
        GeoCoordinate::distance(&self.user_coordinate, target, self.distance_unit)
    }

    /// Recalibrate so that `yaw` now faces `new_heading`
    pub fn update_heading(&mut self, yaw: f64, new_heading: f64) {
        self.heading.update_reference(yaw, new_heading);
    }

    /// Compass heading the viewer faces at `yaw`
    pub fn heading(&self, yaw: f64) -> f64 {
        self.heading.current_heading(yaw)
    }

    /// Scene-space position of `target` for a viewer with the given pose
    pub fn scene_position(&self, target: &GeoCoordinate, pose: &UserPose, mode: ProjectionMode, use_altitude: bool) -> Vector3<f64> {
        let options = ProjectionOptions {
            mode,
            use_altitude,
            max_render_distance: self.max_render_distance,
        };
        scene_position(&self.user_coordinate, target, &pose.forward, self.heading(pose.yaw), &options)
    }
}
