//! Rigid body component
//!
//! Mass, restitution and velocity for entities the physics step moves. A
//! mass of zero marks a static body: it takes part in contacts but is never
//! integrated and ignores impulses.

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Physics-simulated body
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyComponent {
    /// Mass in kilograms (0 = static)
    pub mass: f32,

    /// Bounciness in [0, 1] used when resolving contacts
    pub restitution: f32,

    /// Linear velocity in units per second
    pub velocity: Vec3,

    /// Whether the physics step simulates this body
    pub enabled: bool,
}

impl Component for RigidBodyComponent {
    const NAME: &'static str = "rigidbody";
}

impl RigidBodyComponent {
    /// Create an enabled body at rest
    pub fn new(mass: f32, restitution: f32) -> Self {
        Self {
            mass: mass.max(0.0),
            restitution: restitution.clamp(0.0, 1.0),
            velocity: Vec3::zeros(),
            enabled: true,
        }
    }

    /// Create a static body with zero restitution
    pub fn fixed() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Whether this body never moves under simulation
    pub fn is_static(&self) -> bool {
        self.mass <= 0.0
    }

    /// Whether the physics step integrates this body
    pub fn is_dynamic(&self) -> bool {
        self.enabled && !self.is_static()
    }

    /// Inverse mass (0 for static bodies)
    pub fn inverse_mass(&self) -> f32 {
        if self.is_static() {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Apply an instantaneous impulse, changing velocity by `impulse / mass`
    pub fn add_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse * self.inverse_mass();
    }

    /// Replace the velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Stop all movement
    pub fn stop(&mut self) {
        self.velocity = Vec3::zeros();
    }

    /// Position delta for this frame
    pub fn position_delta(&self, delta_time: f32) -> Vec3 {
        if self.is_dynamic() {
            self.velocity * delta_time
        } else {
            Vec3::zeros()
        }
    }
}

impl Default for RigidBodyComponent {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_scales_with_mass() {
        let mut body = RigidBodyComponent::new(2.0, 1.0);
        body.add_impulse(Vec3::new(4.0, 10.0, 0.0));

        assert_eq!(body.velocity, Vec3::new(2.0, 5.0, 0.0));
    }

    #[test]
    fn test_static_body_ignores_impulse() {
        let mut body = RigidBodyComponent::new(0.0, 1.0);
        body.add_impulse(Vec3::new(5.0, 10.0, 0.0));

        assert!(body.is_static());
        assert_eq!(body.velocity, Vec3::zeros());
    }

    #[test]
    fn test_disabled_body_does_not_move() {
        let mut body = RigidBodyComponent::new(1.0, 1.0);
        body.set_velocity(Vec3::new(1.0, 0.0, 0.0));
        body.enabled = false;

        assert!(!body.is_dynamic());
        assert_eq!(body.position_delta(0.5), Vec3::zeros());

        body.enabled = true;
        assert_eq!(body.position_delta(0.5), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_restitution_is_clamped() {
        assert_eq!(RigidBodyComponent::new(1.0, 3.0).restitution, 1.0);
        assert_eq!(RigidBodyComponent::new(-1.0, -1.0).mass, 0.0);
    }
}
