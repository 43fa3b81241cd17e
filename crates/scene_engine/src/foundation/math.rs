//! Math utilities and types
//!
//! Thin aliases over `nalgebra` plus the TRS [`Transform`] used by the scene graph.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.position + self.rotation * self.scale.component_mul(point)
    }

    /// Combine this (parent) transform with a child transform
    ///
    /// Scale composes per axis, which is exact as long as rotations are
    /// multiples of the axis permutations the scene uses.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            position: self.transform_point(&other.position),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> Self {
        let inv_scale = Vec3::new(1.0 / self.scale.x, 1.0 / self.scale.y, 1.0 / self.scale.z);
        let inv_rotation = self.rotation.inverse();
        let inv_position = (inv_rotation * -self.position).component_mul(&inv_scale);

        Self {
            position: inv_position,
            rotation: inv_rotation,
            scale: inv_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_point_applies_scale_then_translation() {
        let transform = Transform {
            position: Vec3::new(0.0, -9.5, 0.0),
            scale: Vec3::new(3.0, 1.0, 1.0),
            ..Default::default()
        };

        let world = transform.transform_point(&Vec3::new(1.0, 1.5, 0.0));
        assert_relative_eq!(world, Vec3::new(3.0, -8.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_combine_matches_matrix_product() {
        let parent = Transform {
            position: Vec3::new(1.0, 2.0, 0.0),
            scale: Vec3::new(3.0, 1.0, 1.0),
            ..Default::default()
        };
        let child = Transform {
            position: Vec3::new(0.5, 1.5, 0.0),
            scale: Vec3::new(1.0 / 3.0, 1.0, 1.0),
            ..Default::default()
        };

        let combined = parent.combine(&child);
        assert_relative_eq!(combined.to_matrix(), parent.to_matrix() * child.to_matrix(), epsilon = 1e-5);
        assert_relative_eq!(combined.scale, Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_round_trip() {
        let transform = Transform {
            position: Vec3::new(2.0, 3.0, 1.0),
            rotation: Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        let identity = transform.combine(&transform.inverse());
        assert_relative_eq!(identity.position, Vec3::zeros(), epsilon = 1e-5);
        assert_relative_eq!(identity.scale, Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-5);
    }
}
