//! Error types for controller setup

use thiserror::Error;

/// Controller construction errors
///
/// Movement itself never fails: degenerate ticks clamp instead of erroring.
#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    /// Invalid configuration
    #[error("Invalid controller configuration: {0}")]
    InvalidConfig(String),

    /// Collider too small to survive the skin shrink
    #[error("Collider size {width}x{height} leaves no room inside the skin")]
    InvalidColliderSize { width: f32, height: f32 },

    /// Layer index outside the 32-bit mask
    #[error("Invalid collision layer: {0}")]
    InvalidLayer(u32),
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, ControllerError>;
