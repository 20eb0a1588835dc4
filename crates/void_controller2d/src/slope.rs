//! Slope following
//!
//! When the horizontal sweep runs into a walkable incline, the flat step is
//! replaced by one that climbs along it. Resolution happens in two stages:
//!
//! 1. Short probe rays just ahead of the leading edge look for the ramp at
//!    foot level and snap the actor onto it, one skin above the contact.
//! 2. A slightly reduced copy of the actor's box is swept along the incline
//!    to find how far the actor may travel up it this tick.
//!
//! A single sweep along the incline misses the ramp while the actor is still
//! level with its base, so the probes have to run first.

use crate::config::ControllerConfig;
use crate::query::{cast_length, BoxCast, RayCast, ShapeCaster};
use crate::resolve::AxisResolver;
use crate::state::CollisionState;
use void_math::{sign, Rect, Vec2};

/// Number of probe rays, stacked one skin apart from the actor's bottom
pub const PROBE_COUNT: usize = 3;

/// Scale applied to the swept box so it does not scrape the incline itself
const SWEEP_SCALE: f32 = 0.9;

/// Diagonal resolver for walkable slopes
pub struct SlopeResolver<'c> {
    config: &'c ControllerConfig,
    bounds: Rect,
}

impl<'c> SlopeResolver<'c> {
    /// `bounds` is the actor's skin-shrunk box centered on the origin
    pub fn new(config: &'c ControllerConfig, bounds: Rect) -> Self {
        Self { config, bounds }
    }

    /// Resolve the horizontal part of `delta` over a slope of `angle` degrees.
    ///
    /// `position` may be snapped onto the slope. Returns the step to apply
    /// from the (possibly snapped) position. An unobstructed incline takes
    /// the whole of `delta` rotated onto it, so gravity keeps pressing the
    /// actor into the ramp.
    pub fn resolve(
        &self,
        caster: &mut ShapeCaster<'_>,
        state: &mut CollisionState,
        position: &mut Vec2,
        delta: Vec2,
        angle: f32,
    ) -> Vec2 {
        let direction = sign(delta.x);

        if let Some(snapped) = self.probe(caster, *position, direction) {
            log::debug!(
                "slope {angle:.1} deg: snapped ({:.4}, {:.4}) -> ({:.4}, {:.4})",
                position.x,
                position.y,
                snapped.x,
                snapped.y
            );
            *position = snapped;
            state.below = true;
        }

        let skin = self.config.skin_width;
        let tilt = angle * direction;
        let size = (self.bounds.size() - Vec2::splat(skin)) * SWEEP_SCALE;
        let cast = BoxCast::new(
            *position + Vec2::new(0.0, skin),
            size,
            Vec2::RIGHT.rotate_degrees(tilt) * direction,
            cast_length(delta.x, skin),
            self.config.solid_mask,
        )
        .with_angle(tilt);

        let travel = match caster.cast(&cast) {
            None => delta,
            Some(hit) => {
                let along = AxisResolver::new(self.config, self.bounds).clamp_to_skin(hit.distance, direction);
                if along == 0.0 {
                    return Vec2::ZERO;
                }
                Vec2::new(along, 0.0)
            }
        };

        log::debug!(
            "slope {angle:.1} deg: travel ({:.4}, {:.4}) along incline",
            travel.x,
            travel.y
        );
        travel.rotate_degrees(tilt) + Vec2::new(0.0, skin)
    }

    /// Fire the foot-level probes and return the snapped position of the
    /// last probe that hit.
    fn probe(&self, caster: &mut ShapeCaster<'_>, position: Vec2, direction: f32) -> Option<Vec2> {
        let skin = self.config.skin_width;
        let extents = self.bounds.extents();
        let forward = Vec2::RIGHT * direction;
        let edge_x = position.x + extents.x * 0.5 * direction;
        let bottom = position.y - extents.y;

        let mut snapped = None;
        for i in 0..PROBE_COUNT {
            let ray = RayCast::new(
                Vec2::new(edge_x, bottom + i as f32 * skin),
                forward,
                self.bounds.size().x,
                self.config.solid_mask,
            );
            if let Some(hit) = caster.ray(&ray) {
                snapped = Some(Vec2::new(
                    hit.point.x - (extents.x + skin) * direction,
                    hit.point.y + extents.y + skin,
                ));
            }
        }
        snapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{CollisionQuery, Hit};
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Scripted {
        boxes: RefCell<VecDeque<Option<Hit>>>,
        rays: RefCell<VecDeque<Option<Hit>>>,
        ray_log: RefCell<Vec<RayCast>>,
        box_log: RefCell<Vec<BoxCast>>,
    }

    impl CollisionQuery for Scripted {
        fn box_cast(&self, cast: &BoxCast) -> Option<Hit> {
            self.box_log.borrow_mut().push(*cast);
            self.boxes.borrow_mut().pop_front().flatten()
        }

        fn raycast(&self, cast: &RayCast) -> Option<Hit> {
            self.ray_log.borrow_mut().push(*cast);
            self.rays.borrow_mut().pop_front().flatten()
        }
    }

    fn setup() -> (ControllerConfig, Rect) {
        let config = ControllerConfig::platformer();
        let bounds = Rect::from_center_size(Vec2::ZERO, Vec2::ONE).shrink(config.skin_width);
        (config, bounds)
    }

    #[test]
    fn test_free_sweep_climbs_incline() {
        let (config, bounds) = setup();
        let query = Scripted::default();
        let mut state = CollisionState::default();
        let mut position = Vec2::ZERO;

        let step = SlopeResolver::new(&config, bounds).resolve(
            &mut ShapeCaster::silent(&query),
            &mut state,
            &mut position,
            Vec2::new(0.2, 0.0),
            30.0,
        );

        assert_eq!(position, Vec2::ZERO);
        assert_relative_eq!(step.x, 0.2 * 30f32.to_radians().cos(), epsilon = 1e-5);
        assert_relative_eq!(step.y, 0.2 * 30f32.to_radians().sin() + 0.01, epsilon = 1e-5);
        assert!(!state.below);
    }

    #[test]
    fn test_free_sweep_rotates_vertical_component_too() {
        let (config, bounds) = setup();
        let query = Scripted::default();
        let mut state = CollisionState::default();
        let mut position = Vec2::ZERO;

        let step = SlopeResolver::new(&config, bounds).resolve(
            &mut ShapeCaster::silent(&query),
            &mut state,
            &mut position,
            Vec2::new(0.2, -0.1),
            30.0,
        );

        let (sin, cos) = 30f32.to_radians().sin_cos();
        assert_relative_eq!(step.x, 0.2 * cos + 0.1 * sin, epsilon = 1e-5);
        assert_relative_eq!(step.y, 0.2 * sin - 0.1 * cos + 0.01, epsilon = 1e-5);
    }

    #[test]
    fn test_blocked_sweep_ignores_vertical_component() {
        let (config, bounds) = setup();
        let query = Scripted::default();
        query
            .boxes
            .borrow_mut()
            .push_back(Some(Hit::new(0.1, Vec2::LEFT, Vec2::ZERO)));
        let mut state = CollisionState::default();
        let mut position = Vec2::ZERO;

        let step = SlopeResolver::new(&config, bounds).resolve(
            &mut ShapeCaster::silent(&query),
            &mut state,
            &mut position,
            Vec2::new(0.2, -0.1),
            30.0,
        );

        assert_relative_eq!(step.x, 0.09 * 30f32.to_radians().cos(), epsilon = 1e-5);
        assert_relative_eq!(step.y, 0.09 * 30f32.to_radians().sin() + 0.01, epsilon = 1e-5);
    }

    #[test]
    fn test_leftward_move_mirrors_incline() {
        let (config, bounds) = setup();
        let query = Scripted::default();
        let mut state = CollisionState::default();
        let mut position = Vec2::ZERO;

        let step = SlopeResolver::new(&config, bounds).resolve(
            &mut ShapeCaster::silent(&query),
            &mut state,
            &mut position,
            Vec2::new(-0.2, 0.0),
            30.0,
        );

        assert!(step.x < 0.0);
        assert_relative_eq!(step.y, 0.2 * 30f32.to_radians().sin() + 0.01, epsilon = 1e-5);
        let cast = query.box_log.borrow()[0];
        assert_relative_eq!(cast.angle, -30.0);
        assert!(cast.direction.x < 0.0 && cast.direction.y > 0.0);
    }

    #[test]
    fn test_probes_snap_onto_ramp() {
        let (config, bounds) = setup();
        let query = Scripted::default();
        query
            .rays
            .borrow_mut()
            .extend([None, Some(Hit::new(0.1, Vec2::LEFT, Vec2::new(0.4, -0.47))), None]);
        let mut state = CollisionState::default();
        let mut position = Vec2::ZERO;

        SlopeResolver::new(&config, bounds).resolve(
            &mut ShapeCaster::silent(&query),
            &mut state,
            &mut position,
            Vec2::new(0.2, 0.0),
            30.0,
        );

        assert!(state.below);
        assert_relative_eq!(position.x, 0.4 - 0.5, epsilon = 1e-6);
        assert_relative_eq!(position.y, -0.47 + 0.5, epsilon = 1e-6);

        let rays = query.ray_log.borrow();
        assert_eq!(rays.len(), PROBE_COUNT);
        assert_relative_eq!(rays[0].origin.x, 0.245, epsilon = 1e-6);
        assert_relative_eq!(rays[2].origin.y, -0.49 + 0.02, epsilon = 1e-6);
        assert_relative_eq!(rays[0].max_distance, 0.98, epsilon = 1e-6);

        // sweep starts one skin above the snapped position
        let cast = query.box_log.borrow()[0];
        assert_relative_eq!(cast.origin.y, position.y + 0.01, epsilon = 1e-6);
    }

    #[test]
    fn test_blocked_sweep_clamps_along_incline() {
        let (config, bounds) = setup();
        let query = Scripted::default();
        query
            .boxes
            .borrow_mut()
            .push_back(Some(Hit::new(0.1, Vec2::LEFT, Vec2::ZERO)));
        let mut state = CollisionState::default();
        let mut position = Vec2::ZERO;

        let step = SlopeResolver::new(&config, bounds).resolve(
            &mut ShapeCaster::silent(&query),
            &mut state,
            &mut position,
            Vec2::new(0.2, 0.0),
            30.0,
        );

        assert_relative_eq!(step.x, 0.09 * 30f32.to_radians().cos(), epsilon = 1e-5);
        assert_relative_eq!(step.y, 0.09 * 30f32.to_radians().sin() + 0.01, epsilon = 1e-5);
    }

    #[test]
    fn test_blocked_sweep_under_threshold_is_zero() {
        let (config, bounds) = setup();
        let query = Scripted::default();
        query
            .boxes
            .borrow_mut()
            .push_back(Some(Hit::new(0.0005, Vec2::LEFT, Vec2::ZERO)));
        let mut state = CollisionState::default();
        let mut position = Vec2::ZERO;

        let step = SlopeResolver::new(&config, bounds).resolve(
            &mut ShapeCaster::silent(&query),
            &mut state,
            &mut position,
            Vec2::new(0.2, 0.0),
            30.0,
        );

        assert_eq!(step, Vec2::ZERO);
    }
}
