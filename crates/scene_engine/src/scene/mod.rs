//! Scene management
//!
//! A [`Scene`] is a root entity at the world origin. Entities added to it are
//! positioned in world space; entities parented elsewhere inherit that
//! parent's transform through the scene graph.

pub mod scene_graph;

use crate::ecs::{EcsError, Entity, World};

/// Root of the world-space hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    root: Entity,
}

impl Scene {
    /// Create the scene root inside `world`
    pub fn new(world: &mut World) -> Self {
        let root = world.spawn("scene").build();
        Self { root }
    }

    /// The root entity
    pub fn root(&self) -> Entity {
        self.root
    }

    /// Reparent `entity` directly under the scene root
    pub fn add_child(&self, world: &mut World, entity: Entity) -> Result<(), EcsError> {
        world.add_child(self.root, entity)
    }

    /// Whether `entity` is attached somewhere below the scene root
    pub fn contains(&self, world: &World, entity: Entity) -> bool {
        entity != self.root && world.is_ancestor(self.root, entity)
    }

    /// Whether `entity` is a direct child of the scene root
    pub fn is_direct_child(&self, world: &World, entity: Entity) -> bool {
        world.parent(entity) == Some(self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_tracks_descendants() {
        let mut world = World::new();
        let scene = Scene::new(&mut world);
        let paddle = world.spawn("paddle").build();
        let ball = world.spawn("ball").build();

        scene.add_child(&mut world, paddle).unwrap();
        world.add_child(paddle, ball).unwrap();

        assert!(scene.contains(&world, paddle));
        assert!(scene.contains(&world, ball));
        assert!(scene.is_direct_child(&world, paddle));
        assert!(!scene.is_direct_child(&world, ball));
    }
}
