//! Per-tick collision state

use std::fmt;

/// One of the four sides of the actor's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Above,
    Below,
    Left,
    Right,
}

impl Side {
    /// Side hit when moving vertically with the given sign
    pub fn vertical(direction: f32) -> Self {
        if direction > 0.0 { Side::Above } else { Side::Below }
    }

    /// Side hit when moving horizontally with the given sign
    pub fn horizontal(direction: f32) -> Self {
        if direction > 0.0 { Side::Right } else { Side::Left }
    }
}

/// Which sides of the actor were blocked during a tick
///
/// A flag reflects that a cast in that direction registered a hit, even if
/// the resolved step was snapped to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionState {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionState {
    /// Clear every flag
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no side is blocked
    pub fn no_collision(&self) -> bool {
        !(self.above || self.below || self.left || self.right)
    }

    /// Resting on something
    pub fn is_grounded(&self) -> bool {
        self.below
    }

    /// Blocked horizontally
    pub fn is_touching_wall(&self) -> bool {
        self.left || self.right
    }

    pub fn get(&self, side: Side) -> bool {
        match side {
            Side::Above => self.above,
            Side::Below => self.below,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Record the vertical contact for a cast moving with `direction`.
    ///
    /// Both vertical flags are written so the pair always agrees with the
    /// last vertical cast.
    pub fn set_vertical(&mut self, direction: f32) {
        self.above = direction > 0.0;
        self.below = direction < 0.0;
    }

    /// Record the horizontal contact for a cast moving with `direction`.
    pub fn set_horizontal(&mut self, direction: f32) {
        self.right = direction > 0.0;
        self.left = direction < 0.0;
    }

    /// Emit the state through the `log` facade
    pub fn log(&self) {
        log::info!("collision state: {self}");
    }
}

impl fmt::Display for CollisionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "above: {}, below: {}, left: {}, right: {}",
            self.above, self.below, self.left, self.right
        )
    }
}
