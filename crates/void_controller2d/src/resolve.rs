//! Per-axis collision resolution
//!
//! Vertical and horizontal moves share one algorithm: sweep a slab of the
//! actor's cross-section ahead of it, and if something is in the way clamp
//! the step so the actor stops at the surface instead of passing through.

use crate::config::ControllerConfig;
use crate::query::{cast_length, BoxCast, ShapeCaster};
use crate::state::CollisionState;
use void_math::{min_magnitude, sign, Rect, Vec2};

/// Axis being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Unit vector pointing along the positive axis
    pub fn unit(self) -> Vec2 {
        match self {
            Axis::Vertical => Vec2::UP,
            Axis::Horizontal => Vec2::RIGHT,
        }
    }
}

/// Outcome of resolving one axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisStep {
    /// Signed step to apply along the axis
    pub step: f32,
    /// Angle between the hit normal and up, in degrees (0 without a hit)
    pub angle: f32,
    /// Whether the sweep hit anything
    pub blocked: bool,
}

/// Resolves a single-axis move against the solid mask
pub struct AxisResolver<'c> {
    config: &'c ControllerConfig,
    bounds: Rect,
}

impl<'c> AxisResolver<'c> {
    /// `bounds` is the actor's skin-shrunk box centered on the origin
    pub fn new(config: &'c ControllerConfig, bounds: Rect) -> Self {
        Self { config, bounds }
    }

    /// Resolve `delta` along `axis` for an actor centered at `position`.
    ///
    /// A zero delta skips the axis: no cast and no state change.
    pub fn resolve(
        &self,
        axis: Axis,
        caster: &mut ShapeCaster<'_>,
        state: &mut CollisionState,
        position: Vec2,
        delta: f32,
    ) -> AxisStep {
        if delta == 0.0 {
            return AxisStep::default();
        }

        let direction = sign(delta);
        let cast = self.sweep(axis, position, direction, cast_length(delta, self.config.skin_width));

        let Some(hit) = caster.cast(&cast) else {
            return AxisStep {
                step: delta,
                angle: 0.0,
                blocked: false,
            };
        };

        match axis {
            Axis::Vertical => state.set_vertical(direction),
            Axis::Horizontal => state.set_horizontal(direction),
        }

        let step = self.clamp_to_skin(hit.distance, direction);
        log::trace!(
            "{axis:?} delta {delta:.4} blocked at {:.4}, step {step:.4}",
            hit.distance
        );

        AxisStep {
            step,
            angle: hit.normal_angle(),
            blocked: true,
        }
    }

    /// Turn an unsigned hit distance into the signed step actually taken.
    ///
    /// Distances under the minimum move distance snap to zero. Otherwise the
    /// step is the smaller in magnitude of the raw distance and the distance
    /// pulled back by one skin, leaving at most a skin of gap to the surface.
    ///
    /// A surface between half a skin and a skin away yields a step against
    /// `direction`: the actor backs off to a full skin of clearance while
    /// the contact flag for `direction` still reports the hit.
    pub fn clamp_to_skin(&self, hit_distance: f32, direction: f32) -> f32 {
        let distance = hit_distance * direction;
        if distance.abs() < self.config.minimum_move_distance {
            return 0.0;
        }
        let compensated = distance - self.config.skin_width * direction;
        min_magnitude(compensated, distance)
    }

    /// Slab swept ahead of the actor along `axis`
    pub fn sweep(&self, axis: Axis, position: Vec2, direction: f32, length: f32) -> BoxCast {
        let skin = self.config.skin_width;
        let extents = self.bounds.extents();
        let size = self.bounds.size();

        let (offset, slab) = match axis {
            Axis::Vertical => (
                Vec2::new(0.0, extents.y * 0.5 * direction),
                Vec2::new(size.x, extents.y + skin),
            ),
            // Trimmed by one skin so the slab clears the floor the actor rests on
            Axis::Horizontal => (
                Vec2::new(extents.x * 0.5 * direction, 0.0),
                Vec2::new(extents.x + skin, size.y - skin),
            ),
        };

        BoxCast::new(
            position + offset,
            slab,
            axis.unit() * direction,
            length,
            self.config.solid_mask,
        )
    }
}
