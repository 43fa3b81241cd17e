//! ECS World implementation

use std::any::TypeId;
use std::collections::HashMap;

use slotmap::SlotMap;
use thiserror::Error;

use super::entity::EntityRecord;
use super::storage::{ComponentStorage, ComponentStore};
use super::{Component, Entity};
use crate::ecs::components::TransformComponent;
use crate::foundation::math::Vec3;

/// Errors raised by world operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// The entity was never created or has been despawned
    #[error("entity {0:?} does not exist")]
    NoSuchEntity(Entity),

    /// The entity exists but lacks the requested component
    #[error("entity {entity:?} has no {component} component")]
    MissingComponent {
        /// Entity that was queried
        entity: Entity,
        /// Name of the missing component
        component: &'static str,
    },

    /// Reparenting would make an entity its own ancestor
    #[error("cannot parent {child:?} under {parent:?}: would create a cycle")]
    HierarchyCycle {
        /// Requested parent
        parent: Entity,
        /// Requested child
        child: Entity,
    },
}

/// ECS World containing all entities and components
pub struct World {
    pub(crate) entities: SlotMap<Entity, EntityRecord>,
    storages: HashMap<TypeId, Box<dyn ComponentStore>>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            storages: HashMap::new(),
        }
    }

    /// Create a new, empty entity
    pub fn create_entity(&mut self) -> Entity {
        self.create_named("entity")
    }

    /// Create a new, empty entity with a label used in logs
    pub fn create_named(&mut self, label: &'static str) -> Entity {
        let entity = self.entities.insert(EntityRecord::new(label));
        log::trace!("created entity {entity:?} ({label})");
        entity
    }

    /// Start building an entity with a transform and a chain of components
    pub fn spawn(&mut self, label: &'static str) -> EntityBuilder<'_> {
        let entity = self.create_named(label);
        self.storage_mut::<TransformComponent>()
            .insert(entity, TransformComponent::default());
        EntityBuilder { world: self, entity }
    }

    /// Whether the entity is alive
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Get an iterator over all entities
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    /// Label the entity was created with
    pub fn label(&self, entity: Entity) -> Option<&'static str> {
        self.entities.get(entity).map(|record| record.label)
    }

    /// Remove an entity, its components and all of its descendants
    pub fn despawn(&mut self, entity: Entity) -> Result<(), EcsError> {
        self.detach(entity)?;

        let mut pending = vec![entity];
        while let Some(next) = pending.pop() {
            if let Some(record) = self.entities.remove(next) {
                pending.extend(record.children);
            }
            for storage in self.storages.values_mut() {
                storage.remove_entity(next);
            }
            log::trace!("despawned entity {next:?}");
        }
        Ok(())
    }

    /// Add a component to an entity, returning the component it replaced
    pub fn add_component<T: Component>(
        &mut self,
        entity: Entity,
        component: T,
    ) -> Result<Option<T>, EcsError> {
        if !self.contains(entity) {
            return Err(EcsError::NoSuchEntity(entity));
        }
        Ok(self.storage_mut::<T>().insert(entity, component))
    }

    /// Remove a component from an entity
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any_mut().downcast_mut::<ComponentStorage<T>>())
            .and_then(|storage| storage.remove(entity))
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>().and_then(|storage| storage.get(entity))
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any_mut().downcast_mut::<ComponentStorage<T>>())
            .and_then(|storage| storage.get_mut(entity))
    }

    /// Whether the entity has a component of type `T`
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.get_component::<T>(entity).is_some()
    }

    /// Get a component, reporting why it is unavailable
    pub fn component<T: Component>(&self, entity: Entity) -> Result<&T, EcsError> {
        if !self.contains(entity) {
            return Err(EcsError::NoSuchEntity(entity));
        }
        self.get_component::<T>(entity)
            .ok_or(EcsError::MissingComponent { entity, component: T::NAME })
    }

    /// Get a mutable component, reporting why it is unavailable
    pub fn component_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T, EcsError> {
        if !self.contains(entity) {
            return Err(EcsError::NoSuchEntity(entity));
        }
        self.get_component_mut::<T>(entity)
            .ok_or(EcsError::MissingComponent { entity, component: T::NAME })
    }

    /// Iterate every entity that has a `T`
    pub fn query<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
        self.storage::<T>().into_iter().flat_map(ComponentStorage::iter)
    }

    /// Iterate every entity that has a `T`, mutably
    pub fn query_mut<T: Component>(&mut self) -> impl Iterator<Item = (Entity, &mut T)> + '_ {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any_mut().downcast_mut::<ComponentStorage<T>>())
            .into_iter()
            .flat_map(ComponentStorage::iter_mut)
    }

    /// The entity's component mapping, as sorted component names
    pub fn component_names(&self, entity: Entity) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .storages
            .values()
            .filter_map(|storage| storage.name_of(entity))
            .collect();
        names.sort_unstable();
        names
    }

    fn storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.storages
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any().downcast_ref::<ComponentStorage<T>>())
    }

    fn storage_mut<T: Component>(&mut self) -> &mut ComponentStorage<T> {
        self.storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStorage::<T>::new()))
            .as_any_mut()
            .downcast_mut::<ComponentStorage<T>>()
            .unwrap_or_else(|| unreachable!("storage registered under a foreign TypeId"))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by [`World::spawn`]
///
/// Mirrors how blueprints are written: add components, then translate and
/// scale the entity.
pub struct EntityBuilder<'w> {
    world: &'w mut World,
    entity: Entity,
}

impl EntityBuilder<'_> {
    /// Attach a component
    #[must_use]
    pub fn with<T: Component>(self, component: T) -> Self {
        self.world.storage_mut::<T>().insert(self.entity, component);
        self
    }

    /// Move the entity by an offset
    #[must_use]
    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        self.update_transform(|transform| transform.translate(Vec3::new(x, y, z)))
    }

    /// Multiply the entity's scale per axis
    #[must_use]
    pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
        self.update_transform(|transform| transform.scale_by(Vec3::new(x, y, z)))
    }

    /// Set the entity's local position
    #[must_use]
    pub fn position(self, x: f32, y: f32, z: f32) -> Self {
        self.update_transform(|transform| transform.set_position(Vec3::new(x, y, z)))
    }

    /// Entity being built
    pub fn id(&self) -> Entity {
        self.entity
    }

    /// Finish building
    pub fn build(self) -> Entity {
        log::debug!(
            "spawned {} {:?} with {:?}",
            self.world.label(self.entity).unwrap_or("entity"),
            self.entity,
            self.world.component_names(self.entity)
        );
        self.entity
    }

    fn update_transform(self, apply: impl FnOnce(&mut TransformComponent)) -> Self {
        let storage = self.world.storage_mut::<TransformComponent>();
        match storage.get_mut(self.entity) {
            Some(transform) => apply(transform),
            None => {
                let mut transform = TransformComponent::default();
                apply(&mut transform);
                storage.insert(self.entity, transform);
            }
        }
        self
    }
}
