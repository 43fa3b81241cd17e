//! Scene graph: parent/child relationships between entities
//!
//! Every entity has at most one parent. A child's [`TransformComponent`] is
//! expressed in its parent's space; the world transform is the chain of
//! parent transforms combined down to the entity.

use crate::ecs::components::TransformComponent;
use crate::ecs::{EcsError, Entity, World};
use crate::foundation::math::Transform;

impl World {
    /// Parent of an entity, if it has one
    pub fn parent(&self, entity: Entity) -> Option<Entity> {
        self.entities.get(entity).and_then(|record| record.parent)
    }

    /// Children of an entity in insertion order
    pub fn children(&self, entity: Entity) -> &[Entity] {
        self.entities
            .get(entity)
            .map(|record| record.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `ancestor` is `entity` or one of its parents
    pub fn is_ancestor(&self, ancestor: Entity, entity: Entity) -> bool {
        let mut current = Some(entity);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Reparent `child` under `parent`
    ///
    /// The child keeps its local transform, so its world placement follows
    /// the new parent. Callers that want to keep the world placement convert
    /// the transform first.
    pub fn add_child(&mut self, parent: Entity, child: Entity) -> Result<(), EcsError> {
        if !self.contains(parent) {
            return Err(EcsError::NoSuchEntity(parent));
        }
        if !self.contains(child) {
            return Err(EcsError::NoSuchEntity(child));
        }
        if self.is_ancestor(child, parent) {
            return Err(EcsError::HierarchyCycle { parent, child });
        }
        if self.parent(child) == Some(parent) {
            return Ok(());
        }

        self.detach(child)?;
        if let Some(record) = self.entities.get_mut(parent) {
            record.children.push(child);
        }
        if let Some(record) = self.entities.get_mut(child) {
            record.parent = Some(parent);
        }
        log::trace!("parented {child:?} under {parent:?}");
        Ok(())
    }

    /// Remove `entity` from its parent, making it a world-space root
    pub fn detach(&mut self, entity: Entity) -> Result<(), EcsError> {
        let parent = self
            .entities
            .get_mut(entity)
            .ok_or(EcsError::NoSuchEntity(entity))?
            .parent
            .take();

        if let Some(record) = parent.and_then(|parent| self.entities.get_mut(parent)) {
            record.children.retain(|&c| c != entity);
        }
        Ok(())
    }

    /// Local transform combined with every ancestor's
    ///
    /// Entities without a [`TransformComponent`] contribute the identity.
    pub fn world_transform(&self, entity: Entity) -> Transform {
        let local = self
            .get_component::<TransformComponent>(entity)
            .map(TransformComponent::to_math_transform)
            .unwrap_or_default();

        match self.parent(entity) {
            Some(parent) => self.world_transform(parent).combine(&local),
            None => local,
        }
    }
}
