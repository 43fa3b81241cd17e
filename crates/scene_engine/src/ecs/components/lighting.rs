//! Lighting component for ECS
//!
//! Pure data component: a Phong directional light.

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Directional light (parallel rays) for Phong shading
#[derive(Debug, Clone, PartialEq)]
pub struct PhongDirectionalLightComponent {
    /// RGB color values for the light (0.0 to 1.0 range)
    pub color: Vec3,
    /// Light intensity multiplier
    pub intensity: f32,
    /// Direction the light travels in world space (normalized)
    pub direction: Vec3,
    /// Whether the light is currently enabled
    pub enabled: bool,
}

impl Component for PhongDirectionalLightComponent {
    const NAME: &'static str = "light";
}

impl PhongDirectionalLightComponent {
    /// Create a directional light shining along `direction`
    pub fn new(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            direction: direction.try_normalize(f32::EPSILON).unwrap_or_else(|| -Vec3::z()),
            enabled: true,
        }
    }
}

impl Default for PhongDirectionalLightComponent {
    /// White light shining into the screen (-Z)
    fn default() -> Self {
        Self::new(-Vec3::z(), Vec3::new(1.0, 1.0, 1.0), 1.0)
    }
}
