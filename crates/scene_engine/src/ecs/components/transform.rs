//! Transform component for the ECS system
//!
//! Pure data: position, rotation and scale relative to the entity's scene
//! graph parent. World-space values come from [`World::world_transform`].
//!
//! [`World::world_transform`]: crate::ecs::World::world_transform

use crate::ecs::Component;
use crate::foundation::math::{Mat4, Quat, Transform as MathTransform, Vec3};

/// ECS Transform component (parent-local space)
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    /// Local position
    pub position: Vec3,

    /// Local rotation quaternion
    pub rotation: Quat,

    /// Local scale factors
    pub scale: Vec3,
}

impl Component for TransformComponent {
    const NAME: &'static str = "transform";
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl TransformComponent {
    /// Create identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Move by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Replace the position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Multiply the scale per axis
    pub fn scale_by(&mut self, factors: Vec3) {
        self.scale.component_mul_assign(&factors);
    }

    /// Replace the scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Convert to foundation math Transform for calculations
    pub fn to_math_transform(&self) -> MathTransform {
        MathTransform {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    /// Create from foundation math Transform
    pub fn from_math_transform(transform: &MathTransform) -> Self {
        Self {
            position: transform.position,
            rotation: transform.rotation,
            scale: transform.scale,
        }
    }

    /// Local-to-parent matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        self.to_math_transform().to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_identity() {
        let transform = TransformComponent::identity();

        assert_eq!(transform.position, Vec3::zeros());
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(transform.to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_translate_accumulates_and_set_position_replaces() {
        let mut transform = TransformComponent::from_position(Vec3::new(1.0, 0.0, 0.0));
        transform.translate(Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(transform.position, Vec3::new(1.0, 1.5, 0.0));

        transform.set_position(Vec3::zeros());
        assert_eq!(transform.position, Vec3::zeros());
    }

    #[test]
    fn test_scale_by_multiplies() {
        let mut transform = TransformComponent::default();
        transform.scale_by(Vec3::new(1.0 / 3.0, 1.0, 1.0));
        transform.scale_by(Vec3::new(3.0, 1.0, 1.0));

        assert_relative_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-6);
    }
}
