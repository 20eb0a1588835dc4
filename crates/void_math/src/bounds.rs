//! Axis-aligned 2D bounds

use crate::vector::Vec2;

/// Axis-aligned rectangle stored as min/max corners
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Create from center and full size
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents
    #[inline]
    pub fn extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Get the size (full extents)
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if the rectangle is empty (inverted or degenerate)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Grow every side outward by `amount`
    #[inline]
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }

    /// Pull every side inward by `amount`
    #[inline]
    pub fn shrink(&self, amount: f32) -> Self {
        self.expand(-amount)
    }

    /// Move by `offset`
    #[inline]
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center_size() {
        let r = Rect::from_center_size(Vec2::new(1.0, 2.0), Vec2::new(4.0, 2.0));
        assert_eq!(r.center(), Vec2::new(1.0, 2.0));
        assert_eq!(r.size(), Vec2::new(4.0, 2.0));
        assert_eq!(r.extents(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_rect_shrink() {
        let r = Rect::from_center_size(Vec2::ZERO, Vec2::new(1.0, 1.0)).shrink(0.1);
        assert!((r.size().x - 0.8).abs() < 1e-6);
        assert!((r.extents().y - 0.4).abs() < 1e-6);
        assert_eq!(r.center(), Vec2::ZERO);
    }

    #[test]
    fn test_rect_shrink_past_zero_is_empty() {
        let r = Rect::from_center_size(Vec2::ZERO, Vec2::new(0.1, 1.0)).shrink(0.1);
        assert!(r.is_empty());
    }

    #[test]
    fn test_rect_translate_keeps_size() {
        let r = Rect::from_center_size(Vec2::ZERO, Vec2::ONE).translate(Vec2::new(2.0, -1.0));
        assert_eq!(r.center(), Vec2::new(2.0, -1.0));
        assert_eq!(r.size(), Vec2::ONE);
    }
}
