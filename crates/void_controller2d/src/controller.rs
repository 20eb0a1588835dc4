//! Kinematic 2D character controller

use crate::config::ControllerConfig;
use crate::debug::DebugDraw;
use crate::error::{ControllerError, Result};
use crate::events::{TriggerEvent, TriggerEvents, TriggerRef};
use crate::query::{CollisionQuery, ShapeCaster};
use crate::resolve::{Axis, AxisResolver};
use crate::slope::SlopeResolver;
use crate::state::CollisionState;
use void_math::{Rect, Vec2};

/// Moves a box-shaped actor through static geometry
///
/// Each call to [`move_by`](Self::move_by) resolves the vertical component of
/// the requested delta first, applies it, then resolves the horizontal one
/// (following walkable slopes when enabled). Collisions are reported through
/// [`collision_state`](Self::collision_state).
pub struct Controller2D<Q: CollisionQuery> {
    query: Q,
    config: ControllerConfig,
    position: Vec2,
    collider_size: Vec2,
    /// Skin-shrunk box centered on the origin
    bounding_box: Rect,
    state: CollisionState,
    last_state: CollisionState,
    last_tick_collision_free: bool,
    triggers: TriggerEvents,
    debug: Option<Box<dyn DebugDraw>>,
}

impl<Q: CollisionQuery> Controller2D<Q> {
    /// Create a controller for an actor at `position` with a box collider of
    /// `collider_size` (full width and height).
    pub fn new(query: Q, config: ControllerConfig, position: Vec2, collider_size: Vec2) -> Result<Self> {
        config.validate()?;
        let bounding_box = skin_bounds(collider_size, config.skin_width)?;

        log::debug!(
            "controller created at ({}, {}) size {}x{}, slopes: {}",
            position.x,
            position.y,
            collider_size.x,
            collider_size.y,
            config.manage_slopes
        );

        Ok(Self {
            query,
            config,
            position,
            collider_size,
            bounding_box,
            state: CollisionState::default(),
            last_state: CollisionState::default(),
            last_tick_collision_free: true,
            triggers: TriggerEvents::new(),
            debug: None,
        })
    }

    /// Move by `delta` for one tick and return the displacement applied.
    ///
    /// The returned vector includes any snap onto a slope.
    pub fn move_by(&mut self, delta: Vec2) -> Vec2 {
        self.last_tick_collision_free = self.last_state.no_collision();
        self.state.reset();

        let start = self.position;
        let Self {
            query,
            config,
            position,
            bounding_box,
            state,
            debug,
            ..
        } = self;

        let sink: Option<&mut dyn DebugDraw> = match debug {
            Some(sink) => Some(sink.as_mut()),
            None => None,
        };
        let mut caster = ShapeCaster::new(&*query, sink);
        let axes = AxisResolver::new(config, *bounding_box);

        if delta.y != 0.0 {
            let vertical = axes.resolve(Axis::Vertical, &mut caster, state, *position, delta.y);
            position.y += vertical.step;
        }

        if delta.x != 0.0 {
            let horizontal = axes.resolve(Axis::Horizontal, &mut caster, state, *position, delta.x);
            if horizontal.blocked && config.is_walkable_slope(horizontal.angle) {
                let step = SlopeResolver::new(config, *bounding_box).resolve(
                    &mut caster,
                    state,
                    position,
                    delta,
                    horizontal.angle,
                );
                *position += step;
            } else {
                position.x += horizontal.step;
            }
        }

        self.last_state = self.state;
        if self.config.log_collisions {
            self.state.log();
        }

        self.position - start
    }

    /// Collision state of the latest tick
    pub fn collision_state(&self) -> CollisionState {
        self.state
    }

    /// Collision state archived at the end of the latest tick
    pub fn last_collision_state(&self) -> CollisionState {
        self.last_state
    }

    /// Whether the tick before the latest one ended without any contact.
    ///
    /// Informational only, resolution does not depend on it.
    pub fn last_tick_was_collision_free(&self) -> bool {
        self.last_tick_collision_free
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Teleport the actor. Collision state is left untouched.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn collider_size(&self) -> Vec2 {
        self.collider_size
    }

    /// Change the collider size.
    ///
    /// The bounding box keeps its old dimensions until
    /// [`recompute_bounding_box`](Self::recompute_bounding_box) is called.
    pub fn set_collider_size(&mut self, size: Vec2) {
        self.collider_size = size;
    }

    /// Rebuild the skin-shrunk bounding box from the current collider size
    pub fn recompute_bounding_box(&mut self) -> Result<()> {
        self.bounding_box = skin_bounds(self.collider_size, self.config.skin_width)?;
        Ok(())
    }

    /// Skin-shrunk bounding box in world space
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box.translate(self.position)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut Q {
        &mut self.query
    }

    pub fn triggers(&self) -> &TriggerEvents {
        &self.triggers
    }

    pub fn triggers_mut(&mut self) -> &mut TriggerEvents {
        &mut self.triggers
    }

    /// Install or remove the diagnostic line sink
    pub fn set_debug_draw(&mut self, sink: Option<Box<dyn DebugDraw>>) {
        self.debug = sink;
    }

    /// Take the diagnostic sink back out of the controller
    pub fn take_debug_draw(&mut self) -> Option<Box<dyn DebugDraw>> {
        self.debug.take()
    }

    /// The host reports that the actor's trigger volume started overlapping `other`
    pub fn trigger_enter(&mut self, other: TriggerRef) {
        self.triggers.dispatch(TriggerEvent::enter(other));
    }

    /// The host reports that the overlap with `other` continues
    pub fn trigger_stay(&mut self, other: TriggerRef) {
        self.triggers.dispatch(TriggerEvent::stay(other));
    }

    /// The host reports that the overlap with `other` ended
    pub fn trigger_exit(&mut self, other: TriggerRef) {
        self.triggers.dispatch(TriggerEvent::exit(other));
    }
}

impl<Q: CollisionQuery> std::fmt::Debug for Controller2D<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller2D")
            .field("position", &self.position)
            .field("collider_size", &self.collider_size)
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Collider box centered on the origin, shrunk by the skin on every side
fn skin_bounds(collider_size: Vec2, skin_width: f32) -> Result<Rect> {
    let bounds = Rect::from_center_size(Vec2::ZERO, collider_size).shrink(skin_width);
    if !collider_size.is_finite() || bounds.is_empty() {
        return Err(ControllerError::InvalidColliderSize {
            width: collider_size.x,
            height: collider_size.y,
        });
    }
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{BoxCast, Hit, RayCast};
    use approx::assert_relative_eq;

    struct Empty;

    impl CollisionQuery for Empty {
        fn box_cast(&self, _cast: &BoxCast) -> Option<Hit> {
            None
        }

        fn raycast(&self, _cast: &RayCast) -> Option<Hit> {
            None
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ControllerConfig::default().with_skin_width(1.0);
        let result = Controller2D::new(Empty, config, Vec2::ZERO, Vec2::ONE);
        assert!(matches!(result, Err(ControllerError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_collider_smaller_than_skin() {
        let result = Controller2D::new(Empty, ControllerConfig::default(), Vec2::ZERO, Vec2::new(0.02, 1.0));
        assert_eq!(
            result.err(),
            Some(ControllerError::InvalidColliderSize { width: 0.02, height: 1.0 })
        );
    }

    #[test]
    fn test_bounding_box_is_skin_shrunk() {
        let controller =
            Controller2D::new(Empty, ControllerConfig::default(), Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0)).unwrap();
        let bounds = controller.bounding_box();

        assert_relative_eq!(bounds.size().x, 0.98, epsilon = 1e-6);
        assert_relative_eq!(bounds.size().y, 1.98, epsilon = 1e-6);
        assert_relative_eq!(bounds.center().x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(bounds.center().y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_collider_resize_needs_recompute() {
        let mut controller = Controller2D::new(Empty, ControllerConfig::default(), Vec2::ZERO, Vec2::ONE).unwrap();

        controller.set_collider_size(Vec2::new(2.0, 2.0));
        assert_relative_eq!(controller.bounding_box().size().x, 0.98, epsilon = 1e-6);

        controller.recompute_bounding_box().unwrap();
        assert_relative_eq!(controller.bounding_box().size().x, 1.98, epsilon = 1e-6);

        controller.set_collider_size(Vec2::ZERO);
        assert!(controller.recompute_bounding_box().is_err());
        assert_relative_eq!(controller.bounding_box().size().x, 1.98, epsilon = 1e-6);
    }

    #[test]
    fn test_free_move_applies_full_delta() {
        let mut controller = Controller2D::new(Empty, ControllerConfig::platformer(), Vec2::ZERO, Vec2::ONE).unwrap();

        let applied = controller.move_by(Vec2::new(0.3, -0.2));

        assert_eq!(applied, Vec2::new(0.3, -0.2));
        assert_eq!(controller.position(), Vec2::new(0.3, -0.2));
        assert!(controller.collision_state().no_collision());
        assert!(controller.last_tick_was_collision_free());
    }
}
