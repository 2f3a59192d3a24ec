//! Geodesy, planar vector math and heading calibration

pub mod geodesy;
pub mod vector2d;
pub mod heading;
pub mod projection;

pub use vector2d::Vector2d;
pub use heading::HeadingReferenceTracker;
pub use projection::{scene_position, ProjectionOptions};
