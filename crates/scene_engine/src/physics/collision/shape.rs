//! World-space collision shapes
//!
//! Colliders store their shape in model space. Before testing, the physics
//! step places each one with the entity's world transform.

use super::primitives::{Aabb, BoundingSphere, Contact};
use crate::ecs::components::ColliderShape;
use crate::foundation::math::{Transform, Vec3};

/// Collider placed in world space for one physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldSpaceShape {
    /// Box collider
    Box(Aabb),
    /// Sphere collider
    Sphere(BoundingSphere),
}

impl WorldSpaceShape {
    /// Place a model-space shape with a world transform
    ///
    /// Boxes stay axis aligned; their half extents follow the world scale.
    /// Spheres use the largest scale axis so they never shrink inside a
    /// stretched parent.
    pub fn from_collider(shape: &ColliderShape, transform: &Transform) -> Self {
        let scale = transform.scale.abs();
        match shape {
            ColliderShape::Box { half_extents } => Self::Box(Aabb::from_center_extents(
                transform.position,
                half_extents.component_mul(&scale),
            )),
            ColliderShape::Sphere { radius } => {
                Self::Sphere(BoundingSphere::new(transform.position, radius * scale.max()))
            }
        }
    }

    /// Center of the shape
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Box(aabb) => aabb.center(),
            Self::Sphere(sphere) => sphere.center,
        }
    }

    /// Shift the shape
    pub fn translate(&mut self, offset: Vec3) {
        match self {
            Self::Box(aabb) => aabb.translate(offset),
            Self::Sphere(sphere) => sphere.translate(offset),
        }
    }

    /// Contact with the normal pointing from `other` towards `self`
    pub fn contact(&self, other: &Self) -> Option<Contact> {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => a.contact_sphere(b),
            (Self::Sphere(a), Self::Box(b)) => a.contact_aabb(b),
            (Self::Box(a), Self::Sphere(b)) => b.contact_aabb(a).map(Contact::flipped),
            (Self::Box(a), Self::Box(b)) => a.contact_aabb(b),
        }
    }
}
