//! Lighting system for converting ECS entities to render data

use crate::ecs::components::PhongDirectionalLightComponent;
use crate::ecs::World;
use crate::foundation::math::Vec3;

/// Most directional lights a frame carries
pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;

/// Directional light ready for shading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLightData {
    /// World-space direction the light travels
    pub direction: Vec3,
    /// Color premultiplied by intensity
    pub radiance: Vec3,
}

/// Extracts enabled lights from the world each frame
#[derive(Debug, Default)]
pub struct LightingSystem {
    cached: Vec<DirectionalLightData>,
}

impl LightingSystem {
    /// Create a new lighting system
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the light list from the world
    ///
    /// Lights beyond [`MAX_DIRECTIONAL_LIGHTS`] are dropped with a warning.
    pub fn collect(&mut self, world: &World) -> &[DirectionalLightData] {
        self.cached.clear();
        for (entity, light) in world.query::<PhongDirectionalLightComponent>() {
            if !light.enabled {
                continue;
            }
            if self.cached.len() == MAX_DIRECTIONAL_LIGHTS {
                log::warn!("LightingSystem: ignoring directional light {entity:?}, limit reached");
                continue;
            }
            let rotation = world.world_transform(entity).rotation;
            self.cached.push(DirectionalLightData {
                direction: rotation * light.direction,
                radiance: light.color * light.intensity,
            });
        }
        &self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_lights_are_skipped() {
        let mut world = World::new();
        let mut off = PhongDirectionalLightComponent::default();
        off.enabled = false;
        world.spawn("sun").with(PhongDirectionalLightComponent::default()).build();
        world.spawn("off").with(off).build();

        let mut lighting = LightingSystem::new();
        let lights = lighting.collect(&world);

        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].direction, -Vec3::z());
        assert_eq!(lights[0].radiance, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_light_count_is_capped() {
        let mut world = World::new();
        for _ in 0..(MAX_DIRECTIONAL_LIGHTS + 2) {
            world.spawn("sun").with(PhongDirectionalLightComponent::default()).build();
        }

        assert_eq!(LightingSystem::new().collect(&world).len(), MAX_DIRECTIONAL_LIGHTS);
    }
}
