//! JSON persistence for coordinates
//!
//! Keys match the field names used by existing stored data:
//! `timestamp`, `latitude`, `longitude`, `altitude`, `horizontalAccuracy`,
//! `verticalAccuracy`. Missing keys read as 0.

use crate::core::GeoCoordinate;
use crate::error::GeoResult;

/// JSON encoder/decoder for [`GeoCoordinate`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    /// Pretty-print encoded output
    pub pretty: bool,
}

impl JsonCodec {
    /// Create a compact codec
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec that pretty-prints
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode a coordinate. Non-finite fields are written as `null`.
    pub fn encode(&self, coordinate: &GeoCoordinate) -> GeoResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(coordinate)?
        } else {
            serde_json::to_string(coordinate)?
        };
        Ok(json)
    }

    /// Decode a coordinate, reporting malformed input
    pub fn try_decode(&self, json: &str) -> GeoResult<GeoCoordinate> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a coordinate, falling back to the all-zero coordinate on
    /// malformed input
    pub fn decode_or_default(&self, json: &str) -> GeoCoordinate {
        match self.try_decode(json) {
            Ok(coordinate) => coordinate,
            Err(e) => {
                tracing::warn!(error = %e, "failed to decode coordinate, using default");
                GeoCoordinate::default()
            }
        }
    }
}

pub fn to_json(coordinate: &GeoCoordinate) -> GeoResult<String> {
    JsonCodec::new().encode(coordinate)
}

pub fn try_from_json(json: &str) -> GeoResult<GeoCoordinate> {
    JsonCodec::new().try_decode(json)
}

pub fn from_json_or_default(json: &str) -> GeoCoordinate {
    JsonCodec::new().decode_or_default(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;

    #[test]
    fn test_encode_uses_stored_key_names() {
        let coord = GeoCoordinate::from_reading(1.5, 39.0, 32.0, 900.0, 3.0, 4.0);
        let json = to_json(&coord).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":1.5,"latitude":39.0,"longitude":32.0,"altitude":900.0,"horizontalAccuracy":3.0,"verticalAccuracy":4.0}"#
        );
        assert_eq!(try_from_json(&json).unwrap(), coord);
    }

    #[test]
    fn test_pretty_output_decodes() {
        let coord = GeoCoordinate::with_altitude(-33.8688, 151.2093, 58.0);
        let json = JsonCodec::pretty().encode(&coord).unwrap();
        assert!(json.contains('\n'));
        assert_eq!(JsonCodec::new().try_decode(&json).unwrap(), coord);
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let coord = try_from_json(r#"{"latitude": 12.5, "longitude": -3.25}"#).unwrap();
        assert_eq!(coord, GeoCoordinate::new(12.5, -3.25));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(try_from_json("{latitude: oops"), Err(GeoError::Serialization(_))));
        assert_eq!(from_json_or_default("{latitude: oops"), GeoCoordinate::default());
        assert_eq!(from_json_or_default(r#"{"latitude": "north"}"#), GeoCoordinate::default());
        assert_eq!(from_json_or_default(""), GeoCoordinate::default());
    }
}
