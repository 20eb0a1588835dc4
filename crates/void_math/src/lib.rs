//! # void_math - 2D Math Primitives
//!
//! Small, dependency-free vector and bounds types used by the
//! kinematic controller crates.

pub mod vector;
pub mod bounds;

pub use vector::*;
pub use bounds::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Sign of `value` as `1.0` or `-1.0`; zero counts as positive
#[inline]
pub fn sign(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Of two values, the one closest to zero
#[inline]
pub fn min_magnitude(a: f32, b: f32) -> f32 {
    if a.abs() < b.abs() { a } else { b }
}

pub mod prelude {
    pub use crate::vector::Vec2;
    pub use crate::bounds::Rect;
    pub use crate::{radians, sign, min_magnitude};
}
