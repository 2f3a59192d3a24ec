//! Consumer-facing surfaces: user context and JSON persistence

pub mod context;
pub mod json;

pub use context::{CoordinateContext, UserPose};
pub use json::{from_json_or_default, to_json, try_from_json, JsonCodec};
