//! Primitive collision shapes and intersection algorithms
//!
//! Every test returns a [`Contact`] whose normal points from the second
//! shape towards the first, i.e. the direction that pushes the first shape
//! out of the second.

use crate::foundation::math::Vec3;

const EPSILON: f32 = 1e-6;

/// Penetration between two shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal from the second shape towards the first
    pub normal: Vec3,
    /// Overlap along the normal (0 when exactly touching)
    pub depth: f32,
}

impl Contact {
    /// Same contact seen from the other shape
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given half extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Point of the box closest to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.zip_zip_map(&self.min, &self.max, |p, lo, hi| p.clamp(lo, hi))
    }

    /// Shift the box
    pub fn translate(&mut self, offset: Vec3) {
        self.min += offset;
        self.max += offset;
    }

    /// Box-box contact along the axis of least overlap
    pub fn contact_aabb(&self, other: &Self) -> Option<Contact> {
        let mut best: Option<(usize, f32)> = None;
        for axis in 0..3 {
            let overlap = self.max[axis].min(other.max[axis]) - self.min[axis].max(other.min[axis]);
            if overlap < 0.0 {
                return None;
            }
            if best.map_or(true, |(_, depth)| overlap < depth) {
                best = Some((axis, overlap));
            }
        }

        let (axis, depth) = best?;
        let mut normal = Vec3::zeros();
        normal[axis] = if self.center()[axis] >= other.center()[axis] { 1.0 } else { -1.0 };
        Some(Contact { normal, depth })
    }
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &Self) -> bool {
        let radius_sum = self.radius + other.radius;
        (self.center - other.center).magnitude_squared() <= radius_sum * radius_sum
    }

    /// Shift the sphere
    pub fn translate(&mut self, offset: Vec3) {
        self.center += offset;
    }

    /// Sphere-sphere contact
    pub fn contact_sphere(&self, other: &Self) -> Option<Contact> {
        if !self.intersects(other) {
            return None;
        }
        let delta = self.center - other.center;
        let distance = delta.magnitude();
        let normal = if distance > EPSILON { delta / distance } else { Vec3::y() };
        Some(Contact {
            normal,
            depth: self.radius + other.radius - distance,
        })
    }

    /// Sphere-box contact
    ///
    /// When the center is inside the box the sphere is pushed out through
    /// the nearest face.
    pub fn contact_aabb(&self, aabb: &Aabb) -> Option<Contact> {
        let closest = aabb.closest_point(self.center);
        let delta = self.center - closest;
        let distance_squared = delta.magnitude_squared();
        if distance_squared > self.radius * self.radius {
            return None;
        }

        if distance_squared > EPSILON * EPSILON {
            let distance = distance_squared.sqrt();
            return Some(Contact {
                normal: delta / distance,
                depth: self.radius - distance,
            });
        }

        let mut best = (0, f32::INFINITY, 1.0);
        for axis in 0..3 {
            let to_min = self.center[axis] - aabb.min[axis];
            let to_max = aabb.max[axis] - self.center[axis];
            if to_min < best.1 {
                best = (axis, to_min, -1.0);
            }
            if to_max < best.1 {
                best = (axis, to_max, 1.0);
            }
        }
        let (axis, face_distance, sign) = best;
        let mut normal = Vec3::zeros();
        normal[axis] = sign;
        Some(Contact {
            normal,
            depth: self.radius + face_distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb_contains_point() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        assert!(aabb.contains_point(Vec3::zeros()));
        assert!(aabb.contains_point(Vec3::new(0.5, 0.5, 0.5)));
        assert!(!aabb.contains_point(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_sphere_above_box_pushes_up() {
        let floor = Aabb::from_center_extents(Vec3::new(0.0, -20.0, 0.0), Vec3::new(25.0, 10.0, 25.0));
        let ball = BoundingSphere::new(Vec3::new(0.0, -9.7, 0.0), 0.5);

        let contact = ball.contact_aabb(&floor).unwrap();
        assert_relative_eq!(contact.normal, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(contact.depth, 0.2, epsilon = 1e-5);
    }

    #[test]
    fn test_sphere_clear_of_box() {
        let brick = Aabb::from_center_extents(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 0.5, 0.5));
        let ball = BoundingSphere::new(Vec3::new(0.0, 3.0, 0.0), 0.5);

        assert!(ball.contact_aabb(&brick).is_none());
    }

    #[test]
    fn test_sphere_center_inside_box_uses_nearest_face() {
        let wall = Aabb::from_center_extents(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.5, 10.0, 0.5));
        let ball = BoundingSphere::new(Vec3::new(9.6, 0.0, 0.0), 0.5);

        let contact = ball.contact_aabb(&wall).unwrap();
        assert_eq!(contact.normal, Vec3::new(-1.0, 0.0, 0.0));
        assert_relative_eq!(contact.depth, 0.6, epsilon = 1e-5);
    }

    #[test]
    fn test_aabb_contact_picks_least_overlap() {
        let a = Aabb::from_center_extents(Vec3::new(0.0, 0.9, 0.0), Vec3::new(1.0, 0.5, 0.5));
        let b = Aabb::from_center_extents(Vec3::zeros(), Vec3::new(1.0, 0.5, 0.5));

        let contact = a.contact_aabb(&b).unwrap();
        assert_eq!(contact.normal, Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(contact.depth, 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_sphere_sphere_contact() {
        let a = BoundingSphere::new(Vec3::new(0.0, 0.0, 0.0), 0.5);
        let b = BoundingSphere::new(Vec3::new(0.8, 0.0, 0.0), 0.5);

        let contact = a.contact_sphere(&b).unwrap();
        assert_relative_eq!(contact.normal, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(contact.depth, 0.2, epsilon = 1e-5);
        assert!(!a.intersects(&BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 0.5)));
    }
}
