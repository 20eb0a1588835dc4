//! 2D vector type

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::consts::{DEG_TO_RAD, EPSILON, RAD_TO_DEG};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);
    pub const UP: Self = Self::Y;
    pub const DOWN: Self = Self::new(0.0, -1.0);
    pub const RIGHT: Self = Self::X;
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { Self::ZERO }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Rotate counter-clockwise by `radians`
    #[inline]
    pub fn rotate(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotate counter-clockwise by `degrees`
    #[inline]
    pub fn rotate_degrees(self, degrees: f32) -> Self {
        self.rotate(degrees * DEG_TO_RAD)
    }

    /// Unsigned angle between two vectors in degrees, in `[0, 180]`.
    ///
    /// Returns 0 when either vector is (nearly) zero.
    pub fn angle_degrees(self, other: Self) -> f32 {
        let denom = (self.length_squared() * other.length_squared()).sqrt();
        if denom < EPSILON {
            return 0.0;
        }
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        cos.acos() * RAD_TO_DEG
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Operator implementations for Vec2
impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}
impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs) }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}
impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_dot() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn test_vec2_rotate_quarter_turn() {
        let r = Vec2::X.rotate_degrees(90.0);
        assert!((r - Vec2::Y).length() < 1e-6);

        let l = Vec2::X.rotate_degrees(-90.0);
        assert!((l - Vec2::DOWN).length() < 1e-6);
    }

    #[test]
    fn test_vec2_angle_degrees() {
        assert!((Vec2::UP.angle_degrees(Vec2::UP)).abs() < 1e-4);
        assert!((Vec2::RIGHT.angle_degrees(Vec2::UP) - 90.0).abs() < 1e-4);
        assert!((Vec2::DOWN.angle_degrees(Vec2::UP) - 180.0).abs() < 1e-4);

        let slope_normal = Vec2::UP.rotate_degrees(30.0);
        assert!((slope_normal.angle_degrees(Vec2::UP) - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_vec2_angle_of_zero_vector() {
        assert_eq!(Vec2::ZERO.angle_degrees(Vec2::UP), 0.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }
}
