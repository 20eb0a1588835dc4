//! Controller configuration

use crate::error::{ControllerError, Result};
use crate::layers::LayerMask;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Valid range for [`ControllerConfig::skin_width`]
pub const SKIN_WIDTH_RANGE: RangeInclusive<f32> = 0.01..=0.05;
/// Valid range for [`ControllerConfig::minimum_move_distance`]
pub const MINIMUM_MOVE_DISTANCE_RANGE: RangeInclusive<f32> = 0.001..=0.1;
/// Valid range for [`ControllerConfig::max_slope_angle`] (degrees)
pub const MAX_SLOPE_ANGLE_RANGE: RangeInclusive<f32> = 10.0..=90.0;

/// Per-actor controller configuration
///
/// Set once when the actor is created and read every tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControllerConfig {
    /// Inward shrink of the bounding box and the gap kept to surfaces
    pub skin_width: f32,

    /// Resolved steps shorter than this snap to zero
    pub minimum_move_distance: f32,

    /// Layers every cast collides with
    pub solid_mask: LayerMask,

    /// Follow walkable slopes instead of stopping at their base
    pub manage_slopes: bool,

    /// Steepest walkable slope in degrees (only read when `manage_slopes` is set)
    pub max_slope_angle: f32,

    /// Log the collision state at the end of every tick
    pub log_collisions: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            skin_width: 0.01,
            minimum_move_distance: 0.001,
            solid_mask: LayerMask::ALL,
            manage_slopes: false,
            max_slope_angle: 45.0,
            log_collisions: false,
        }
    }
}

impl ControllerConfig {
    /// Slope-aware configuration for side-scrolling platformers
    pub fn platformer() -> Self {
        Self {
            manage_slopes: true,
            max_slope_angle: 45.0,
            ..Default::default()
        }
    }

    /// Axis-only configuration, slopes are treated as walls
    pub fn flat() -> Self {
        Self {
            manage_slopes: false,
            ..Default::default()
        }
    }

    /// Set skin width
    pub fn with_skin_width(mut self, skin_width: f32) -> Self {
        self.skin_width = skin_width;
        self
    }

    /// Set minimum move distance
    pub fn with_minimum_move_distance(mut self, distance: f32) -> Self {
        self.minimum_move_distance = distance;
        self
    }

    /// Set solid mask
    pub fn with_solid_mask(mut self, mask: LayerMask) -> Self {
        self.solid_mask = mask;
        self
    }

    /// Enable slope handling up to `max_angle` degrees
    pub fn with_slopes(mut self, max_angle: f32) -> Self {
        self.manage_slopes = true;
        self.max_slope_angle = max_angle;
        self
    }

    /// Disable slope handling
    pub fn without_slopes(mut self) -> Self {
        self.manage_slopes = false;
        self
    }

    /// Toggle per-tick collision logging
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_collisions = enabled;
        self
    }

    /// Check every value against its valid range
    pub fn validate(&self) -> Result<()> {
        check_range("skin_width", self.skin_width, &SKIN_WIDTH_RANGE)?;
        check_range(
            "minimum_move_distance",
            self.minimum_move_distance,
            &MINIMUM_MOVE_DISTANCE_RANGE,
        )?;
        check_range("max_slope_angle", self.max_slope_angle, &MAX_SLOPE_ANGLE_RANGE)?;
        Ok(())
    }

    /// Whether a surface whose normal is `angle` degrees from up can be walked
    pub fn is_walkable_slope(&self, angle: f32) -> bool {
        self.manage_slopes && angle > 0.0 && angle <= self.max_slope_angle
    }
}

fn check_range(name: &str, value: f32, range: &RangeInclusive<f32>) -> Result<()> {
    if !value.is_finite() || !range.contains(&value) {
        return Err(ControllerError::InvalidConfig(format!(
            "{name} = {value} is outside [{}, {}]",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ControllerConfig::default().validate().is_ok());
        assert!(ControllerConfig::platformer().validate().is_ok());
        assert!(ControllerConfig::flat().validate().is_ok());
    }

    #[test]
    fn test_skin_width_out_of_range() {
        let config = ControllerConfig::default().with_skin_width(0.0);
        assert!(matches!(config.validate(), Err(ControllerError::InvalidConfig(_))));

        let config = ControllerConfig::default().with_skin_width(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_slope_angle_out_of_range() {
        let config = ControllerConfig::default().with_slopes(95.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_walkable_slope_gate() {
        let config = ControllerConfig::default().with_slopes(45.0);
        assert!(config.is_walkable_slope(30.0));
        assert!(config.is_walkable_slope(45.0));
        assert!(!config.is_walkable_slope(0.0));
        assert!(!config.is_walkable_slope(60.0));

        let flat = config.without_slopes();
        assert!(!flat.is_walkable_slope(30.0));

        let steep = ControllerConfig::default().with_slopes(90.0);
        assert!(steep.is_walkable_slope(90.0));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ControllerConfig =
            serde_json::from_str(r#"{ "skin_width": 0.02, "manage_slopes": true }"#).unwrap();

        assert_eq!(config.skin_width, 0.02);
        assert!(config.manage_slopes);
        assert_eq!(config.max_slope_angle, 45.0);
        assert_eq!(config.solid_mask, LayerMask::ALL);
    }
}
