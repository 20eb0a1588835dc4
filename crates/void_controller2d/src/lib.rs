//! Void Controller 2D - Kinematic Character Controller
//!
//! Moves a box-shaped actor through static 2D geometry by sweeping its
//! shape ahead of every move and clamping the step at whatever it hits.
//! There is no rigid-body response: the controller owns the actor's
//! position and reports which sides are blocked.
//!
//! # Features
//!
//! - Vertical then horizontal resolution with skin-width compensation
//! - Optional slope following up to a maximum walkable angle
//! - Per-tick collision state with a one-tick history
//! - Trigger notifications via callbacks or channels
//! - Pluggable query backend (rapier2d by default)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Controller2D                  │
//! │  ┌──────────────┐  ┌───────────────────────┐ │
//! │  │CollisionState│  │ bounding box (skinned)│ │
//! │  └──────────────┘  └───────────────────────┘ │
//! └──────────────────────────────────────────────┘
//!          │ move_by(delta)
//!          ▼
//!   ┌──────────────┐      ┌───────────────┐
//!   │ AxisResolver │ ───▶ │ SlopeResolver │
//!   └──────────────┘      └───────────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//!              ┌─────────────┐      ┌────────────────┐
//!              │ ShapeCaster │ ───▶ │ CollisionQuery │
//!              └─────────────┘      └────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use void_controller2d::prelude::*;
//!
//! let mut world = RapierQueryWorld::new();
//! world.add_static(StaticCollider::block(Vec2::new(-10.0, -2.0), Vec2::new(10.0, -1.0)));
//! world.refresh();
//!
//! let mut player = Controller2D::new(
//!     world,
//!     ControllerConfig::platformer(),
//!     Vec2::ZERO,
//!     Vec2::new(1.0, 1.0),
//! )?;
//!
//! let applied = player.move_by(Vec2::new(0.1, -0.3));
//! if player.collision_state().below {
//!     // grounded
//! }
//! ```

pub mod config;
pub mod controller;
pub mod debug;
pub mod error;
pub mod events;
pub mod layers;
pub mod query;
#[cfg(feature = "rapier")]
pub mod rapier;
pub mod resolve;
pub mod slope;
pub mod state;

pub mod prelude {
    //! Common imports for controller functionality
    pub use crate::config::ControllerConfig;
    pub use crate::controller::Controller2D;
    pub use crate::debug::{DebugColor, DebugDraw, LineRecorder};
    pub use crate::error::{ControllerError, Result};
    pub use crate::events::{TriggerEvent, TriggerEventType, TriggerEvents, TriggerRef};
    pub use crate::layers::{CollisionLayer, LayerMask};
    pub use crate::query::{BoxCast, CollisionQuery, Hit, RayCast, ShapeCaster};
    #[cfg(feature = "rapier")]
    pub use crate::rapier::{RampFacing, RapierQueryWorld, StaticCollider, StaticShape};
    pub use crate::resolve::{Axis, AxisResolver, AxisStep};
    pub use crate::slope::SlopeResolver;
    pub use crate::state::{CollisionState, Side};
    pub use void_math::{Rect, Vec2};
}

pub use prelude::*;
