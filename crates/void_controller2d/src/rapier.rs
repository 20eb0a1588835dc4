//! Rapier 2D query backend
//!
//! A static scene of colliders with a query pipeline on top. Nothing is
//! simulated: the world only answers sweeps and raycasts for controllers.

use crate::layers::{CollisionLayer, LayerMask};
use crate::query::{BoxCast, CollisionQuery, Hit, RayCast};
use rapier2d::parry::query::ShapeCastOptions;
use rapier2d::parry::shape::Cuboid;
use rapier2d::prelude as rapier;
use void_math::{radians, Vec2};

/// Which way a ramp rises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampFacing {
    /// High side on the right
    Right,
    /// High side on the left
    Left,
}

/// Shape of a static collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticShape {
    /// Box given by half extents
    Cuboid { half_extents: Vec2 },
    /// Right triangle whose base sits on the collider origin
    Ramp { width: f32, height: f32, facing: RampFacing },
}

impl StaticShape {
    /// Box from full width and height
    pub fn cuboid(width: f32, height: f32) -> Self {
        Self::Cuboid {
            half_extents: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Ramp rising at `angle` degrees over `width`
    pub fn ramp(width: f32, angle: f32, facing: RampFacing) -> Self {
        Self::Ramp {
            width,
            height: width * radians(angle).tan(),
            facing,
        }
    }

    fn builder(&self) -> rapier::ColliderBuilder {
        match *self {
            StaticShape::Cuboid { half_extents } => {
                rapier::ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            }
            StaticShape::Ramp {
                width,
                height,
                facing,
            } => {
                // counter-clockwise winding either way
                let (a, b, c) = match facing {
                    RampFacing::Right => ((0.0, 0.0), (width, 0.0), (width, height)),
                    RampFacing::Left => ((width, 0.0), (0.0, height), (0.0, 0.0)),
                };
                rapier::ColliderBuilder::triangle(
                    rapier::Point::new(a.0, a.1),
                    rapier::Point::new(b.0, b.1),
                    rapier::Point::new(c.0, c.1),
                )
            }
        }
    }
}

/// Description of a static collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider {
    pub shape: StaticShape,
    /// Cuboid center, or ramp base corner
    pub position: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    pub layer: CollisionLayer,
}

impl StaticCollider {
    pub fn new(shape: StaticShape, position: Vec2) -> Self {
        Self {
            shape,
            position,
            rotation: 0.0,
            layer: CollisionLayer::GROUND,
        }
    }

    /// Axis-aligned box spanning `min`..`max`
    pub fn block(min: Vec2, max: Vec2) -> Self {
        let size = max - min;
        Self::new(StaticShape::cuboid(size.x, size.y), (min + max) * 0.5)
    }

    /// Counter-clockwise rotation about the collider's center, in degrees
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_layer(mut self, layer: CollisionLayer) -> Self {
        self.layer = layer;
        self
    }
}

/// Static collision world backed by rapier2d
pub struct RapierQueryWorld {
    bodies: rapier::RigidBodySet,
    colliders: rapier::ColliderSet,
    query_pipeline: rapier::QueryPipeline,
    dirty: bool,
}

impl RapierQueryWorld {
    pub fn new() -> Self {
        Self {
            bodies: rapier::RigidBodySet::new(),
            colliders: rapier::ColliderSet::new(),
            query_pipeline: rapier::QueryPipeline::new(),
            dirty: false,
        }
    }

    /// Add a static collider. Call [`refresh`](Self::refresh) before querying.
    pub fn add_static(&mut self, desc: StaticCollider) -> rapier::ColliderHandle {
        let collider = desc
            .shape
            .builder()
            .translation(rapier::Vector::new(desc.position.x, desc.position.y))
            .rotation(radians(desc.rotation))
            .collision_groups(rapier::InteractionGroups::new(
                rapier::Group::from_bits_truncate(desc.layer.as_mask()),
                rapier::Group::ALL,
            ))
            .build();
        self.dirty = true;
        self.colliders.insert(collider)
    }

    /// Remove a collider
    pub fn remove(&mut self, handle: rapier::ColliderHandle) -> bool {
        let mut islands = rapier::IslandManager::new();
        let removed = self
            .colliders
            .remove(handle, &mut islands, &mut self.bodies, false)
            .is_some();
        self.dirty |= removed;
        removed
    }

    /// Rebuild the query acceleration structure after edits
    pub fn refresh(&mut self) {
        self.query_pipeline.update(&self.colliders);
        self.dirty = false;
    }

    /// Whether colliders changed since the last refresh
    pub fn needs_refresh(&self) -> bool {
        self.dirty
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    fn filter(mask: LayerMask) -> rapier::QueryFilter<'static> {
        rapier::QueryFilter::new()
            .groups(rapier::InteractionGroups::new(
                rapier::Group::ALL,
                rapier::Group::from_bits_truncate(mask.bits()),
            ))
            .exclude_sensors()
    }
}

impl Default for RapierQueryWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionQuery for RapierQueryWorld {
    fn box_cast(&self, cast: &BoxCast) -> Option<Hit> {
        let shape = Cuboid::new(rapier::Vector::new(cast.size.x * 0.5, cast.size.y * 0.5));
        let pos = rapier::Isometry::new(
            rapier::Vector::new(cast.origin.x, cast.origin.y),
            radians(cast.angle),
        );
        let vel = rapier::Vector::new(cast.direction.x, cast.direction.y);
        let options = ShapeCastOptions {
            max_time_of_impact: cast.max_distance,
            stop_at_penetration: true,
            ..Default::default()
        };

        self.query_pipeline
            .cast_shape(
                &self.bodies,
                &self.colliders,
                &pos,
                &vel,
                &shape,
                options,
                Self::filter(cast.mask),
            )
            .map(|(_, hit)| {
                let center = cast.origin + cast.direction * hit.time_of_impact;
                Hit::new(
                    hit.time_of_impact,
                    Vec2::new(hit.normal1.x, hit.normal1.y),
                    center,
                )
            })
    }

    fn raycast(&self, cast: &RayCast) -> Option<Hit> {
        let ray = rapier::Ray::new(
            rapier::Point::new(cast.origin.x, cast.origin.y),
            rapier::Vector::new(cast.direction.x, cast.direction.y),
        );

        self.query_pipeline
            .cast_ray_and_get_normal(
                &self.bodies,
                &self.colliders,
                &ray,
                cast.max_distance,
                true,
                Self::filter(cast.mask),
            )
            .map(|(_, intersection)| {
                let point = ray.point_at(intersection.time_of_impact);
                Hit::new(
                    intersection.time_of_impact,
                    Vec2::new(intersection.normal.x, intersection.normal.y),
                    Vec2::new(point.x, point.y),
                )
            })
    }
}
