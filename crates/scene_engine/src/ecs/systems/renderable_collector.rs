//! # Renderable Collector
//!
//! Gathers every visible mesh with its world matrix so a host renderer can
//! draw the frame without walking the scene graph itself.

use crate::ecs::components::MeshComponent;
use crate::ecs::{Entity, World};
use crate::foundation::math::Mat4;
use crate::render::Mesh;

/// One mesh to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    /// Source entity
    pub entity: Entity,
    /// Model-to-world matrix
    pub model_matrix: Mat4,
    /// Geometry and material
    pub mesh: Mesh,
}

/// System responsible for collecting renderables
#[derive(Debug, Default)]
pub struct RenderableCollector {
    items: Vec<RenderItem>,
}

impl RenderableCollector {
    /// Create a new renderable collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the draw list, skipping hidden meshes
    pub fn collect(&mut self, world: &World) -> &[RenderItem] {
        self.items.clear();
        self.items.extend(
            world
                .query::<MeshComponent>()
                .filter(|(_, mesh)| mesh.should_render())
                .map(|(entity, mesh)| RenderItem {
                    entity,
                    model_matrix: world.world_transform(entity).to_matrix(),
                    mesh: mesh.mesh.clone(),
                }),
        );
        log::trace!("RenderableCollector: {} visible meshes", self.items.len());
        &self.items
    }
}
