//! Phong material parameters

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Phong material properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhongMaterial {
    /// Diffuse color (RGB, 0.0 to 1.0)
    pub color: Vec3,

    /// Specular color (RGB, 0.0 to 1.0)
    pub specular: Vec3,

    /// Specular exponent
    pub shininess: f32,
}

impl PhongMaterial {
    /// Create a white material with a soft highlight
    pub fn new() -> Self {
        Self {
            color: Vec3::new(1.0, 1.0, 1.0),
            specular: Vec3::new(0.5, 0.5, 0.5),
            shininess: 32.0,
        }
    }

    /// Set the diffuse color
    #[must_use]
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.set_color(color);
        self
    }

    /// Replace the diffuse color, clamping each channel to [0, 1]
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color.map(|channel| channel.clamp(0.0, 1.0));
    }

    /// Set the specular exponent
    #[must_use]
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess.max(0.0);
        self
    }
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_clamped() {
        let material = PhongMaterial::new().with_color(Vec3::new(1.5, -0.2, 0.8));

        assert_eq!(material.color, Vec3::new(1.0, 0.0, 0.8));
    }
}
