//! Component storage
//!
//! One sparse [`SecondaryMap`] per component type, keyed by [`Entity`]. The
//! world holds them type-erased behind [`ComponentStore`].

use std::any::Any;

use slotmap::SecondaryMap;

use crate::ecs::{Component, Entity};

/// Type-erased view of a component storage
pub(crate) trait ComponentStore: Any {
    /// Drop the component owned by `entity`, if any
    fn remove_entity(&mut self, entity: Entity);

    /// Name of the component `entity` has in this storage
    fn name_of(&self, entity: Entity) -> Option<&'static str>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Storage for every component of one type
pub(crate) struct ComponentStorage<T: Component> {
    components: SecondaryMap<Entity, T>,
}

impl<T: Component> ComponentStorage<T> {
    pub(crate) fn new() -> Self {
        Self {
            components: SecondaryMap::new(),
        }
    }

    /// Insert a component, returning the one it replaced
    pub(crate) fn insert(&mut self, entity: Entity, component: T) -> Option<T> {
        self.components.insert(entity, component)
    }

    pub(crate) fn get(&self, entity: Entity) -> Option<&T> {
        self.components.get(entity)
    }

    pub(crate) fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_mut(entity)
    }

    pub(crate) fn remove(&mut self, entity: Entity) -> Option<T> {
        self.components.remove(entity)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.components.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.components.iter_mut()
    }
}

impl<T: Component> ComponentStore for ComponentStorage<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.components.remove(entity);
    }

    fn name_of(&self, entity: Entity) -> Option<&'static str> {
        self.components.get(entity).map(Component::name)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
