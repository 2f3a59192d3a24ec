//! Unit selectors and mode enums shared across the library

use serde::{Deserialize, Serialize};

use super::constants::{METERS_PER_KILOMETER, METERS_PER_MILE};

/// Output unit for great-circle distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Meter,
    Kilometer,
    Miles,
}

impl DistanceUnit {
    /// Convert a distance given in meters into this unit
    pub fn convert_meters(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Meter => meters,
            DistanceUnit::Kilometer => meters / METERS_PER_KILOMETER,
            DistanceUnit::Miles => meters / METERS_PER_MILE,
        }
    }
}

/// Raw unit codes follow the declaration order: Meter=0, Kilometer=1, Miles=2.
impl TryFrom<i32> for DistanceUnit {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DistanceUnit::Meter),
            1 => Ok(DistanceUnit::Kilometer),
            2 => Ok(DistanceUnit::Miles),
            other => Err(other),
        }
    }
}

/// Output unit for bearings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degree,
    #[default]
    Radian,
}

impl AngleUnit {
    pub fn convert_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degree => radians.to_degrees(),
            AngleUnit::Radian => radians,
        }
    }
}

/// Raw unit codes follow the declaration order: Degree=0, Radian=1.
impl TryFrom<i32> for AngleUnit {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AngleUnit::Degree),
            1 => Ok(AngleUnit::Radian),
            other => Err(other),
        }
    }
}

/// How a geo-point's distance is treated when placing it in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Use the true great-circle distance
    Real,
    /// Clamp the distance to the maximum render distance
    #[default]
    Render,
}

/// Wrap policy applied to computed headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingWrap {
    /// Only values above 180 are reduced by 360; values below -180 pass through
    #[default]
    UpperOnly,
    /// Values are kept inside [-180, 180]
    Symmetric,
}
