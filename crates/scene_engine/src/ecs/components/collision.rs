//! Collision detection components for ECS
//!
//! A collider describes a model-space shape; the physics step scales it by
//! the entity's world transform when testing contacts. Disabling a collider
//! removes the entity from contact detection without touching anything else.

use crate::ecs::Component;
use crate::foundation::math::Vec3;
use crate::physics::CollisionLayers;

/// Model-space collision shape
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderShape {
    /// Axis-aligned box given by its half extents
    Box {
        /// Half size along each axis before scaling
        half_extents: Vec3,
    },
    /// Sphere around the entity origin
    Sphere {
        /// Radius before scaling
        radius: f32,
    },
}

/// Component that marks an entity as taking part in contact detection
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderComponent {
    /// The collision shape
    pub shape: ColliderShape,

    /// Whether contacts are detected for this entity
    pub enabled: bool,

    /// Layers this collider is on
    pub layer: CollisionLayers,

    /// Layers this collider reacts to
    pub mask: CollisionLayers,

    /// Trigger volumes report contacts but never bounce bodies
    pub is_trigger: bool,
}

impl Component for ColliderComponent {
    const NAME: &'static str = "collider";

    fn name(&self) -> &'static str {
        match self.shape {
            ColliderShape::Box { .. } => "boxcollider",
            ColliderShape::Sphere { .. } => "spherecollider",
        }
    }
}

impl ColliderComponent {
    /// Create a new collider with default settings
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            enabled: true,
            layer: CollisionLayers::all(),
            mask: CollisionLayers::all(),
            is_trigger: false,
        }
    }

    /// Box matching a unit cube mesh
    pub fn cuboid() -> Self {
        Self::new(ColliderShape::Box {
            half_extents: Vec3::new(0.5, 0.5, 0.5),
        })
    }

    /// Sphere with the given model-space radius
    pub fn sphere(radius: f32) -> Self {
        Self::new(ColliderShape::Sphere { radius })
    }

    /// Create a collider with specific layer and mask
    #[must_use]
    pub fn with_layers(mut self, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Mark this as a trigger volume
    #[must_use]
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Enable or disable contact detection
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_follow_shape() {
        assert_eq!(ColliderComponent::cuboid().name(), "boxcollider");
        assert_eq!(ColliderComponent::sphere(0.5).name(), "spherecollider");
    }

    #[test]
    fn test_default_collider_is_enabled_on_all_layers() {
        let collider = ColliderComponent::sphere(1.0);

        assert!(collider.enabled);
        assert!(!collider.is_trigger);
        assert_eq!(collider.layer, CollisionLayers::all());
        assert_eq!(collider.mask, CollisionLayers::all());
    }
}
