//! Collision queries (box sweeps and raycasts)
//!
//! The controller never talks to a physics engine directly. Every sweep goes
//! through a [`CollisionQuery`] implementation supplied by the host, which
//! keeps resolution deterministic and lets tests script the world.

use crate::debug::{draw_rect, DebugColor, DebugDraw};
use crate::layers::LayerMask;
use void_math::Vec2;

/// Result of a sweep or ray query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance travelled along the cast direction before contact
    pub distance: f32,
    /// Surface normal of the hit geometry (unit length)
    pub normal: Vec2,
    /// Impact point in world space. For box sweeps this is the box center
    /// at the moment of contact.
    pub point: Vec2,
}

impl Hit {
    pub fn new(distance: f32, normal: Vec2, point: Vec2) -> Self {
        Self {
            distance,
            normal,
            point,
        }
    }

    /// Angle between the surface normal and world up, in degrees
    pub fn normal_angle(&self) -> f32 {
        self.normal.angle_degrees(Vec2::UP)
    }
}

/// An oriented rectangle swept along a direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCast {
    /// Center of the rectangle at the start of the sweep
    pub origin: Vec2,
    /// Full width and height
    pub size: Vec2,
    /// Rotation of the rectangle in degrees (counter-clockwise)
    pub angle: f32,
    /// Unit sweep direction
    pub direction: Vec2,
    pub max_distance: f32,
    pub mask: LayerMask,
}

impl BoxCast {
    /// Axis-aligned sweep
    pub fn new(origin: Vec2, size: Vec2, direction: Vec2, max_distance: f32, mask: LayerMask) -> Self {
        Self {
            origin,
            size,
            angle: 0.0,
            direction,
            max_distance,
            mask,
        }
    }

    /// Rotate the swept rectangle
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn is_rotated(&self) -> bool {
        self.angle != 0.0
    }

    /// Top-left corner of the rectangle at `center`, ignoring rotation
    fn top_left_at(&self, center: Vec2) -> Vec2 {
        Vec2::new(center.x - self.size.x * 0.5, center.y + self.size.y * 0.5)
    }
}

/// A ray query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCast {
    pub origin: Vec2,
    /// Unit ray direction
    pub direction: Vec2,
    pub max_distance: f32,
    pub mask: LayerMask,
}

impl RayCast {
    pub fn new(origin: Vec2, direction: Vec2, max_distance: f32, mask: LayerMask) -> Self {
        Self {
            origin,
            direction,
            max_distance,
            mask,
        }
    }
}

/// Read-only geometry queries against the host's static world
pub trait CollisionQuery {
    /// Nearest hit of a rectangle swept along `cast.direction`
    fn box_cast(&self, cast: &BoxCast) -> Option<Hit>;

    /// Nearest hit of a ray
    fn raycast(&self, cast: &RayCast) -> Option<Hit>;
}

impl<T: CollisionQuery + ?Sized> CollisionQuery for &T {
    fn box_cast(&self, cast: &BoxCast) -> Option<Hit> {
        (**self).box_cast(cast)
    }

    fn raycast(&self, cast: &RayCast) -> Option<Hit> {
        (**self).raycast(cast)
    }
}

impl<T: CollisionQuery + ?Sized> CollisionQuery for Box<T> {
    fn box_cast(&self, cast: &BoxCast) -> Option<Hit> {
        (**self).box_cast(cast)
    }

    fn raycast(&self, cast: &RayCast) -> Option<Hit> {
        (**self).raycast(cast)
    }
}

/// Sweep length for a requested move along one axis.
///
/// Moves shorter than the skin are inflated to `2 * skin` so a surface the
/// actor already rests against is still detected.
pub fn cast_length(delta: f32, skin_width: f32) -> f32 {
    let length = delta.abs();
    if length < skin_width {
        2.0 * skin_width
    } else {
        length
    }
}

/// Stateless sweep helper used by the resolvers
///
/// Wraps a query backend and an optional debug sink. Each cast draws the
/// start and end rectangles, plus the rectangle at the impact when there is
/// one.
pub struct ShapeCaster<'a> {
    query: &'a dyn CollisionQuery,
    debug: Option<&'a mut dyn DebugDraw>,
}

impl<'a> ShapeCaster<'a> {
    pub fn new(query: &'a dyn CollisionQuery, debug: Option<&'a mut dyn DebugDraw>) -> Self {
        Self { query, debug }
    }

    /// Caster without diagnostics
    pub fn silent(query: &'a dyn CollisionQuery) -> Self {
        Self { query, debug: None }
    }

    /// Sweep a rectangle
    pub fn cast(&mut self, cast: &BoxCast) -> Option<Hit> {
        let hit = self.query.box_cast(cast);

        log::trace!(
            "box cast from ({:.4}, {:.4}) dir ({:.3}, {:.3}) len {:.4}: {:?}",
            cast.origin.x,
            cast.origin.y,
            cast.direction.x,
            cast.direction.y,
            cast.max_distance,
            hit.map(|h| h.distance)
        );

        if let Some(sink) = self.debug.as_deref_mut() {
            let (sweep, impact) = if cast.is_rotated() {
                (DebugColor::Yellow, DebugColor::Green)
            } else {
                (DebugColor::Red, DebugColor::Cyan)
            };
            let end = cast.origin + cast.direction * cast.max_distance;
            draw_rect(sink, cast.top_left_at(cast.origin), cast.size, sweep);
            draw_rect(sink, cast.top_left_at(end), cast.size, sweep);
            if let Some(hit) = &hit {
                let center = cast.origin + cast.direction * hit.distance;
                draw_rect(sink, cast.top_left_at(center), cast.size, impact);
            }
        }

        hit
    }

    /// Cast a ray
    pub fn ray(&mut self, cast: &RayCast) -> Option<Hit> {
        if let Some(sink) = self.debug.as_deref_mut() {
            sink.draw_ray(cast.origin, cast.direction, cast.max_distance, DebugColor::Magenta);
        }
        self.query.raycast(cast)
    }
}
