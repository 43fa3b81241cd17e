//! Mesh component for entities that can be rendered
//!
//! Holds the mesh description and a visibility flag. Whatever renders the
//! scene skips entities whose mesh is hidden.

use crate::ecs::Component;
use crate::render::Mesh;

/// Component for entities that can be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    /// Geometry and material
    pub mesh: Mesh,

    /// Whether this object is visible
    pub visible: bool,
}

impl Component for MeshComponent {
    const NAME: &'static str = "mesh";
}

impl MeshComponent {
    /// Create a visible mesh component
    pub fn new(mesh: Mesh) -> Self {
        Self { mesh, visible: true }
    }

    /// Set visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Check if this component should be rendered
    pub fn should_render(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::{Geometry, PhongMaterial};

    #[test]
    fn test_visibility_toggle() {
        let mesh = Mesh::new(Geometry::Cube, PhongMaterial::new().with_color(Vec3::new(0.3, 0.0, 0.0)));
        let mut component = MeshComponent::new(mesh);

        assert!(component.should_render());

        component.set_visible(false);
        assert!(!component.should_render());

        component.set_visible(true);
        assert!(component.should_render());
    }
}
