//! Heading calibration from device yaw
//!
//! A device only knows its own yaw relative to where tracking started. The
//! tracker stores one calibration pair, the yaw observed at the moment a real
//! compass heading was known, and derives the current heading from the yaw
//! delta since then.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::HeadingWrap;

/// Calibration anchor between device yaw and compass heading (degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingReferenceTracker {
    /// Device yaw at calibration time
    pub reference_angle_of_y_direction: f64,
    /// Known heading at calibration time
    pub reference_heading_angle: f64,
    /// Heading accuracy
    pub accuracy: f64,
    /// Unix seconds of the last calibration
    pub timestamp: f64,
    /// Wrap policy for computed headings
    #[serde(default)]
    pub wrap: HeadingWrap,
}

impl HeadingReferenceTracker {
    pub fn new(reference_angle_of_y_direction: f64, reference_heading_angle: f64) -> Self {
        Self::with_accuracy(reference_angle_of_y_direction, reference_heading_angle, 0.0)
    }

    pub fn with_accuracy(reference_angle_of_y_direction: f64, reference_heading_angle: f64, accuracy: f64) -> Self {
        Self {
            reference_angle_of_y_direction,
            reference_heading_angle,
            accuracy,
            timestamp: now_unix_seconds(),
            wrap: HeadingWrap::default(),
        }
    }

    pub fn with_wrap(mut self, wrap: HeadingWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Heading for the given yaw.
    ///
    /// With [`HeadingWrap::UpperOnly`] results above 180 are reduced by 360
    /// and results below -180 are returned unchanged.
    pub fn current_heading(&self, current_angle_of_y_direction: f64) -> f64 {
        let angle_difference = self.reference_angle_of_y_direction - current_angle_of_y_direction;
        let mut heading = self.reference_heading_angle - angle_difference;

        if heading > 180.0 {
            heading -= 360.0;
        }
        if self.wrap == HeadingWrap::Symmetric && heading < -180.0 {
            heading += 360.0;
        }
        heading
    }

    /// Recalibrate against a newly known heading
    pub fn update_reference(&mut self, current_angle_of_y_direction: f64, new_heading_angle: f64) {
        self.reference_angle_of_y_direction = current_angle_of_y_direction;
        self.reference_heading_angle = new_heading_angle;
        self.timestamp = now_unix_seconds();

        tracing::debug!(
            yaw = current_angle_of_y_direction,
            heading = new_heading_angle,
            "heading reference recalibrated"
        );
    }
}

fn now_unix_seconds() -> f64 {
    Utc::now().timestamp() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_at_reference_yaw() {
        let tracker = HeadingReferenceTracker::new(37.5, 112.0);
        assert_eq!(tracker.current_heading(37.5), 112.0);
        assert_eq!(tracker.accuracy, 0.0);
        assert!(tracker.timestamp > 0.0);
    }

    #[test]
    fn test_heading_follows_yaw() {
        let tracker = HeadingReferenceTracker::new(0.0, 90.0);
        assert_eq!(tracker.current_heading(45.0), 135.0);
        assert_eq!(tracker.current_heading(-30.0), 60.0);
    }

    #[test]
    fn test_upper_wrap_only() {
        let tracker = HeadingReferenceTracker::new(0.0, 170.0);
        assert_eq!(tracker.current_heading(20.0), -170.0);
        assert_eq!(tracker.current_heading(10.0), 180.0);

        let tracker = HeadingReferenceTracker::new(0.0, -170.0);
        assert_eq!(tracker.current_heading(-20.0), -190.0);
    }

    #[test]
    fn test_symmetric_wrap() {
        let tracker = HeadingReferenceTracker::new(0.0, -170.0).with_wrap(HeadingWrap::Symmetric);
        assert_eq!(tracker.current_heading(-20.0), 170.0);
        assert_eq!(tracker.current_heading(-10.0), -180.0);
        assert_eq!(tracker.current_heading(30.0), -140.0);
    }

    #[test]
    fn test_recalibration() {
        let mut tracker = HeadingReferenceTracker::with_accuracy(10.0, 0.0, 5.0);
        tracker.update_reference(100.0, 45.0);
        assert_eq!(tracker.reference_angle_of_y_direction, 100.0);
        assert_eq!(tracker.reference_heading_angle, 45.0);
        assert_eq!(tracker.accuracy, 5.0);
        assert_eq!(tracker.current_heading(100.0), 45.0);
        assert_eq!(tracker.current_heading(110.0), 55.0);

        // Recalibrating with the same pair changes nothing observable
        let before = tracker.current_heading(123.0);
        tracker.update_reference(100.0, 45.0);
        assert_eq!(tracker.current_heading(123.0), before);
    }
}
