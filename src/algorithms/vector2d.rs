//! Double-precision 2D vector
//!
//! Planar counterpart of the geodesy types. Equality is approximate: two
//! vectors compare equal when the squared length of their difference is below
//! `EPSILON²`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::core::RAD_TO_DEG;
use crate::error::{GeoError, GeoResult};

/// Below this magnitude a vector normalizes to zero
const NORMALIZE_THRESHOLD: f64 = 9.99999974737875e-06;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

impl Vector2d {
    pub const EPSILON: f64 = 1e-5;

    pub const ZERO: Vector2d = Vector2d { x: 0.0, y: 0.0 };
    pub const ONE: Vector2d = Vector2d { x: 1.0, y: 1.0 };
    pub const UP: Vector2d = Vector2d { x: 0.0, y: 1.0 };
    pub const RIGHT: Vector2d = Vector2d { x: 1.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Component by ordinal: 0 = x, 1 = y
    pub fn get(&self, index: usize) -> GeoResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Self::index_error(index)),
        }
    }

    /// Set a component by ordinal
    pub fn set_component(&mut self, index: usize, value: f64) -> GeoResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(Self::index_error(index)),
        }
        Ok(())
    }

    fn index_error(index: usize) -> GeoError {
        GeoError::IndexOutOfRange {
            index,
            len: 2,
            target: "Vector2d",
        }
    }

    /// Length of the vector
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length of the vector
    pub fn sqr_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn sqr_magnitude_of(v: Vector2d) -> f64 {
        v.sqr_magnitude()
    }

    /// Unit-length copy, or zero for vectors shorter than ~1e-5
    pub fn normalized(&self) -> Vector2d {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Normalize in place
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if magnitude > NORMALIZE_THRESHOLD {
            *self /= magnitude;
        } else {
            *self = Self::ZERO;
        }
    }

    /// Linear interpolation with `t` clamped to [0, 1]
    pub fn lerp(from: Vector2d, to: Vector2d, t: f64) -> Vector2d {
        let t = t.clamp(0.0, 1.0);
        Vector2d::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
    }

    /// Step from `current` towards `target` by at most `max_distance_delta`
    pub fn move_towards(current: Vector2d, target: Vector2d, max_distance_delta: f64) -> Vector2d {
        let delta = target - current;
        let magnitude = delta.magnitude();
        if magnitude <= max_distance_delta || magnitude == 0.0 {
            return target;
        }
        current + delta / magnitude * max_distance_delta
    }

    /// Component-wise product
    pub fn scale(a: Vector2d, b: Vector2d) -> Vector2d {
        Vector2d::new(a.x * b.x, a.y * b.y)
    }

    /// Component-wise product applied in place
    pub fn scale_by(&mut self, scale: Vector2d) {
        self.x *= scale.x;
        self.y *= scale.y;
    }

    /// Dot product of two vectors
    pub fn dot(lhs: Vector2d, rhs: Vector2d) -> f64 {
        lhs.x * rhs.x + lhs.y * rhs.y
    }

    /// Unsigned angle between two vectors in degrees
    pub fn angle(from: Vector2d, to: Vector2d) -> f64 {
        Self::dot(from.normalized(), to.normalized()).clamp(-1.0, 1.0).acos() * RAD_TO_DEG
    }

    /// Distance between two points
    pub fn distance(a: Vector2d, b: Vector2d) -> f64 {
        (a - b).magnitude()
    }

    /// Copy with its length capped at `max_length`
    pub fn clamp_magnitude(vector: Vector2d, max_length: f64) -> Vector2d {
        if vector.sqr_magnitude() > max_length * max_length {
            vector.normalized() * max_length
        } else {
            vector
        }
    }

    /// Component-wise minimum
    pub fn min(lhs: Vector2d, rhs: Vector2d) -> Vector2d {
        Vector2d::new(lhs.x.min(rhs.x), lhs.y.min(rhs.y))
    }

    /// Component-wise maximum
    pub fn max(lhs: Vector2d, rhs: Vector2d) -> Vector2d {
        Vector2d::new(lhs.x.max(rhs.x), lhs.y.max(rhs.y))
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl PartialEq for Vector2d {
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).sqr_magnitude() < Self::EPSILON * Self::EPSILON
    }
}

impl Add for Vector2d {
    type Output = Vector2d;

    fn add(self, rhs: Vector2d) -> Vector2d {
        Vector2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2d {
    type Output = Vector2d;

    fn sub(self, rhs: Vector2d) -> Vector2d {
        Vector2d::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2d {
    type Output = Vector2d;

    fn neg(self) -> Vector2d {
        Vector2d::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2d {
    type Output = Vector2d;

    fn mul(self, d: f64) -> Vector2d {
        Vector2d::new(self.x * d, self.y * d)
    }
}

impl Mul<Vector2d> for f64 {
    type Output = Vector2d;

    fn mul(self, v: Vector2d) -> Vector2d {
        v * self
    }
}

impl Div<f64> for Vector2d {
    type Output = Vector2d;

    fn div(self, d: f64) -> Vector2d {
        Vector2d::new(self.x / d, self.y / d)
    }
}

impl AddAssign for Vector2d {
    fn add_assign(&mut self, rhs: Vector2d) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2d {
    fn sub_assign(&mut self, rhs: Vector2d) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector2d {
    fn mul_assign(&mut self, d: f64) {
        *self = *self * d;
    }
}

impl DivAssign<f64> for Vector2d {
    fn div_assign(&mut self, d: f64) {
        *self = *self / d;
    }
}

impl From<[f64; 2]> for Vector2d {
    fn from(a: [f64; 2]) -> Self {
        Vector2d::new(a[0], a[1])
    }
}

impl From<Vector2d> for [f64; 2] {
    fn from(v: Vector2d) -> Self {
        v.to_array()
    }
}

impl From<Vector2<f64>> for Vector2d {
    fn from(v: Vector2<f64>) -> Self {
        Vector2d::new(v.x, v.y)
    }
}

impl From<Vector2d> for Vector2<f64> {
    fn from(v: Vector2d) -> Self {
        Vector2::new(v.x, v.y)
    }
}

/// Rendered as `y,x` with five decimals, i.e. latitude first for geo vectors
impl fmt::Display for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude_and_normalized() {
        let v = Vector2d::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.sqr_magnitude(), 25.0);
        assert_eq!(Vector2d::sqr_magnitude_of(v), 25.0);
        assert_eq!(v.normalized(), Vector2d::new(0.6, 0.8));
        assert_relative_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_small_vector_is_zero() {
        let mut tiny = Vector2d::new(5e-6, 5e-6);
        tiny.normalize();
        assert_eq!(tiny.to_array(), [0.0, 0.0]);

        let mut small = Vector2d::new(2e-5, 0.0);
        small.normalize();
        assert_relative_eq!(small.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2d::new(1.0, 2.0);
        let b = Vector2d::new(3.0, -1.0);
        assert_eq!((a + b).to_array(), [4.0, 1.0]);
        assert_eq!((a - b).to_array(), [-2.0, 3.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, 4.0]);
        assert_eq!((2.0 * a).to_array(), [2.0, 4.0]);
        assert_eq!((b / 2.0).to_array(), [1.5, -0.5]);

        let mut c = a;
        c += b;
        c -= a;
        c *= 3.0;
        c /= 1.5;
        assert_eq!(c.to_array(), [6.0, -2.0]);
    }

    #[test]
    fn test_equality_tolerance() {
        let a = Vector2d::new(1.0, 1.0);
        assert_eq!(a, Vector2d::new(1.0 + 1e-7, 1.0 - 1e-7));
        assert_ne!(a, Vector2d::new(1.001, 1.0));
    }

    #[test]
    fn test_lerp_clamps() {
        let a = Vector2d::new(0.0, 0.0);
        let b = Vector2d::new(10.0, -10.0);
        assert_eq!(Vector2d::lerp(a, b, 0.0), a);
        assert_eq!(Vector2d::lerp(a, b, 1.0), b);
        assert_eq!(Vector2d::lerp(a, b, 0.25), Vector2d::new(2.5, -2.5));
        assert_eq!(Vector2d::lerp(a, b, -3.0), a);
        assert_eq!(Vector2d::lerp(a, b, 7.0), b);
    }

    #[test]
    fn test_move_towards() {
        let current = Vector2d::new(0.0, 0.0);
        let target = Vector2d::new(10.0, 0.0);
        assert_eq!(Vector2d::move_towards(current, target, 3.0), Vector2d::new(3.0, 0.0));
        assert_eq!(Vector2d::move_towards(current, target, 20.0), target);
        assert_eq!(Vector2d::move_towards(target, target, 0.0), target);
    }

    #[test]
    fn test_scale() {
        let a = Vector2d::new(2.0, 3.0);
        let s = Vector2d::new(-1.0, 0.5);
        assert_eq!(Vector2d::scale(a, s).to_array(), [-2.0, 1.5]);

        let mut b = a;
        b.scale_by(s);
        assert_eq!(b.to_array(), [-2.0, 1.5]);
    }

    #[test]
    fn test_dot_angle_distance() {
        assert_eq!(Vector2d::dot(Vector2d::new(1.0, 2.0), Vector2d::new(3.0, 4.0)), 11.0);
        assert_relative_eq!(Vector2d::angle(Vector2d::RIGHT, Vector2d::UP), 90.0, epsilon = 1e-9);
        assert_relative_eq!(Vector2d::angle(Vector2d::RIGHT, -Vector2d::RIGHT), 180.0, epsilon = 1e-9);
        assert_relative_eq!(Vector2d::angle(Vector2d::ONE, Vector2d::ONE * 4.0), 0.0, epsilon = 1e-5);
        assert_eq!(Vector2d::distance(Vector2d::ZERO, Vector2d::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_clamp_magnitude_min_max() {
        let v = Vector2d::new(30.0, 40.0);
        assert_eq!(Vector2d::clamp_magnitude(v, 5.0), Vector2d::new(3.0, 4.0));
        assert_eq!(Vector2d::clamp_magnitude(v, 100.0), v);

        let a = Vector2d::new(1.0, 5.0);
        let b = Vector2d::new(3.0, -2.0);
        assert_eq!(Vector2d::min(a, b).to_array(), [1.0, -2.0]);
        assert_eq!(Vector2d::max(a, b).to_array(), [3.0, 5.0]);
    }

    #[test]
    fn test_indexed_access() {
        let mut v = Vector2d::new(7.0, 8.0);
        assert_eq!(v.get(0).unwrap(), 7.0);
        assert_eq!(v.get(1).unwrap(), 8.0);
        assert!(matches!(v.get(2), Err(GeoError::IndexOutOfRange { index: 2, .. })));

        v.set_component(1, -1.0).unwrap();
        assert_eq!(v.y, -1.0);
        assert!(v.set_component(5, 0.0).is_err());
    }

    #[test]
    fn test_conversions_and_display() {
        let v = Vector2d::new(32.8597, 39.9334);
        let n: Vector2<f64> = v.into();
        assert_eq!(Vector2d::from(n).to_array(), [32.8597, 39.9334]);
        assert_eq!(Vector2d::from([1.0, 2.0]).to_array(), [1.0, 2.0]);
        assert_eq!(v.to_string(), "39.93340,32.85970");
    }
}
