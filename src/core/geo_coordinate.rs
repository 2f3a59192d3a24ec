//! Geographic coordinate value type
//!
//! A `GeoCoordinate` is a point on or near the Earth's surface expressed in
//! degrees, with optional altitude, timestamp and accuracy readings as
//! delivered by a location sensor. Geodesy operations on it live in
//! [`crate::algorithms::geodesy`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

/// Number of ordinal-addressable fields
pub const FIELD_COUNT: usize = 6;

/// Geographic coordinate with sensor metadata
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeoCoordinate {
    /// Seconds since the Unix epoch (0 when unknown)
    pub timestamp: f64,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f64,
    /// Horizontal accuracy in meters
    pub horizontal_accuracy: f64,
    /// Vertical accuracy in meters
    pub vertical_accuracy: f64,
}

/// Named field of a [`GeoCoordinate`], in ordinal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Timestamp,
    Latitude,
    Longitude,
    Altitude,
    HorizontalAccuracy,
    VerticalAccuracy,
}

impl FieldId {
    pub const ALL: [FieldId; FIELD_COUNT] = [
        FieldId::Timestamp,
        FieldId::Latitude,
        FieldId::Longitude,
        FieldId::Altitude,
        FieldId::HorizontalAccuracy,
        FieldId::VerticalAccuracy,
    ];

    /// Position of the field in ordinal access
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for FieldId {
    type Error = GeoError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        FieldId::ALL
            .get(index)
            .copied()
            .ok_or(GeoError::IndexOutOfRange {
                index,
                len: FIELD_COUNT,
                target: "GeoCoordinate",
            })
    }
}

impl GeoCoordinate {
    /// Surface coordinate with every other field zeroed
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }

    /// Coordinate with altitude in meters
    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            altitude,
            ..Self::new(latitude, longitude)
        }
    }

    /// Timestamped horizontal fix without altitude
    pub fn horizontal_fix(timestamp: f64, latitude: f64, longitude: f64, horizontal_accuracy: f64) -> Self {
        Self {
            timestamp,
            horizontal_accuracy,
            ..Self::new(latitude, longitude)
        }
    }

    /// Timestamped fix with altitude and its vertical accuracy
    pub fn vertical_fix(
        timestamp: f64,
        latitude: f64,
        longitude: f64,
        altitude: f64,
        vertical_accuracy: f64,
    ) -> Self {
        Self {
            timestamp,
            vertical_accuracy,
            ..Self::with_altitude(latitude, longitude, altitude)
        }
    }

    /// Complete sensor reading with every field populated
    pub fn from_reading(
        timestamp: f64,
        latitude: f64,
        longitude: f64,
        altitude: f64,
        horizontal_accuracy: f64,
        vertical_accuracy: f64,
    ) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            altitude,
            horizontal_accuracy,
            vertical_accuracy,
        }
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_accuracy(mut self, horizontal_accuracy: f64, vertical_accuracy: f64) -> Self {
        self.horizontal_accuracy = horizontal_accuracy;
        self.vertical_accuracy = vertical_accuracy;
        self
    }

    /// Read a named field
    pub fn field(&self, id: FieldId) -> f64 {
        match id {
            FieldId::Timestamp => self.timestamp,
            FieldId::Latitude => self.latitude,
            FieldId::Longitude => self.longitude,
            FieldId::Altitude => self.altitude,
            FieldId::HorizontalAccuracy => self.horizontal_accuracy,
            FieldId::VerticalAccuracy => self.vertical_accuracy,
        }
    }

    /// Write a named field
    pub fn set_field(&mut self, id: FieldId, value: f64) {
        let slot = match id {
            FieldId::Timestamp => &mut self.timestamp,
            FieldId::Latitude => &mut self.latitude,
            FieldId::Longitude => &mut self.longitude,
            FieldId::Altitude => &mut self.altitude,
            FieldId::HorizontalAccuracy => &mut self.horizontal_accuracy,
            FieldId::VerticalAccuracy => &mut self.vertical_accuracy,
        };
        *slot = value;
    }

    /// Read a field by ordinal position (0 = timestamp .. 5 = vertical accuracy)
    pub fn get(&self, index: usize) -> GeoResult<f64> {
        Ok(self.field(FieldId::try_from(index)?))
    }

    /// Write a field by ordinal position
    pub fn set(&mut self, index: usize, value: f64) -> GeoResult<()> {
        self.set_field(FieldId::try_from(index)?, value);
        Ok(())
    }

    /// Exact comparison of latitude, longitude and altitude.
    ///
    /// Timestamp and accuracy fields are ignored. Use `==` to compare every
    /// field.
    pub fn is_equal(&self, other: &GeoCoordinate) -> bool {
        self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.altitude == other.altitude
    }

    /// Timestamp as a UTC calendar time, `None` if not representable
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        if !self.timestamp.is_finite() {
            return None;
        }
        let secs = self.timestamp.floor();
        let nanos = ((self.timestamp - secs) * 1e9) as u32;
        DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
    }

    /// Every field rendered on one line
    pub fn full_description(&self) -> String {
        format!(
            "Timestamp: {} Lat: {} Lon: {} Alt: {} H-Accuracy: {} V-Accuracy: {}",
            self.timestamp,
            self.latitude,
            self.longitude,
            self.altitude,
            self.horizontal_accuracy,
            self.vertical_accuracy
        )
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {} Lon: {} Alt: {}", self.latitude, self.longitude, self.altitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_access() {
        let coord = GeoCoordinate::from_reading(5.0, 39.9, 32.8, 850.0, 3.0, 7.0);
        assert_eq!(coord.get(0).unwrap(), 5.0);
        assert_eq!(coord.get(1).unwrap(), 39.9);
        assert_eq!(coord.get(2).unwrap(), 32.8);
        assert_eq!(coord.get(3).unwrap(), 850.0);
        assert_eq!(coord.get(4).unwrap(), 3.0);
        assert_eq!(coord.get(5).unwrap(), 7.0);
    }

    #[test]
    fn test_ordinal_out_of_range() {
        let mut coord = GeoCoordinate::new(0.0, 0.0).with_timestamp(5.0);
        assert_eq!(coord.get(0).unwrap(), 5.0);
        match coord.get(6) {
            Err(GeoError::IndexOutOfRange { index, .. }) => assert_eq!(index, 6),
            other => panic!("expected index error, got {:?}", other),
        }
        assert!(coord.set(42, 1.0).is_err());
        assert!(coord.get(42).unwrap_err().to_string().contains("42"));
    }

    #[test]
    fn test_ordinal_write() {
        let mut coord = GeoCoordinate::default();
        for (i, id) in FieldId::ALL.iter().enumerate() {
            coord.set(i, i as f64 + 0.5).unwrap();
            assert_eq!(coord.field(*id), i as f64 + 0.5);
            assert_eq!(id.ordinal(), i);
        }
    }

    #[test]
    fn test_constructors() {
        let c = GeoCoordinate::horizontal_fix(10.0, 1.0, 2.0, 4.0);
        assert_eq!((c.timestamp, c.horizontal_accuracy, c.altitude), (10.0, 4.0, 0.0));

        let c = GeoCoordinate::vertical_fix(10.0, 1.0, 2.0, 3.0, 6.0);
        assert_eq!((c.altitude, c.vertical_accuracy, c.horizontal_accuracy), (3.0, 6.0, 0.0));

        let c = GeoCoordinate::with_altitude(1.0, 2.0, 3.0).with_accuracy(4.0, 5.0);
        assert_eq!(c, GeoCoordinate::from_reading(0.0, 1.0, 2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn test_is_equal_ignores_metadata() {
        let a = GeoCoordinate::with_altitude(39.0, 32.0, 10.0).with_timestamp(1.0);
        let b = GeoCoordinate::with_altitude(39.0, 32.0, 10.0).with_accuracy(5.0, 5.0);
        assert!(a.is_equal(&b));
        assert_ne!(a, b);

        let c = GeoCoordinate::with_altitude(39.0, 32.0, 10.5);
        assert!(!a.is_equal(&c));
    }

    #[test]
    fn test_text_rendering() {
        let c = GeoCoordinate::from_reading(1.0, 39.5, 32.25, 10.0, 2.0, 3.0);
        assert_eq!(c.to_string(), "Lat: 39.5 Lon: 32.25 Alt: 10");
        assert_eq!(
            c.full_description(),
            "Timestamp: 1 Lat: 39.5 Lon: 32.25 Alt: 10 H-Accuracy: 2 V-Accuracy: 3"
        );
    }

    #[test]
    fn test_date_time() {
        let c = GeoCoordinate::new(0.0, 0.0).with_timestamp(1_655_164_800.5);
        let dt = c.date_time().unwrap();
        assert_eq!(dt.timestamp(), 1_655_164_800);
        assert_eq!(dt.timestamp_subsec_millis(), 500);

        let c = GeoCoordinate::new(0.0, 0.0).with_timestamp(f64::NAN);
        assert!(c.date_time().is_none());
    }
}
