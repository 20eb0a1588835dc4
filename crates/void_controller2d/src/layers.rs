//! Collision layers and masks

use crate::error::{ControllerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A collision layer identifier (bit index into a [`LayerMask`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollisionLayer(u32);

impl CollisionLayer {
    /// Default layer
    pub const DEFAULT: Self = Self(0);
    /// Static level geometry
    pub const GROUND: Self = Self(1);
    /// One-way or passable platforms
    pub const PLATFORMS: Self = Self(2);
    /// Player actors
    pub const PLAYER: Self = Self(3);
    /// Trigger/sensor volumes
    pub const TRIGGERS: Self = Self(4);

    /// Number of addressable layers
    pub const COUNT: u32 = 32;

    /// Create a custom layer
    pub fn new(index: u32) -> Result<Self> {
        if index >= Self::COUNT {
            return Err(ControllerError::InvalidLayer(index));
        }
        Ok(Self(index))
    }

    /// Get the layer as a bitmask
    pub fn as_mask(&self) -> u32 {
        1 << self.0
    }
}

impl Default for CollisionLayer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Set of collidable layers a cast is restricted to
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(u32);

impl LayerMask {
    /// Every layer
    pub const ALL: Self = Self(u32::MAX);
    /// No layer
    pub const NONE: Self = Self(0);

    /// Create from a list of layers
    pub fn from_layers(layers: &[CollisionLayer]) -> Self {
        Self(layers.iter().fold(0u32, |acc, l| acc | l.as_mask()))
    }

    /// Raw bits
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Add a layer
    pub fn with(mut self, layer: CollisionLayer) -> Self {
        self.0 |= layer.as_mask();
        self
    }

    /// Remove a layer
    pub fn without(mut self, layer: CollisionLayer) -> Self {
        self.0 &= !layer.as_mask();
        self
    }

    /// Check whether a layer is part of this mask
    pub fn contains(&self, layer: CollisionLayer) -> bool {
        self.0 & layer.as_mask() != 0
    }

    /// Check whether two masks share any layer
    pub fn intersects(&self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<CollisionLayer> for LayerMask {
    fn from(layer: CollisionLayer) -> Self {
        Self(layer.as_mask())
    }
}

impl fmt::Debug for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerMask({:#034b})", self.0)
    }
}
