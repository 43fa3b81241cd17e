//! Deferred event delivery
//!
//! Systems push events into an [`EventQueue`] while they run; the
//! application drains the queue once per frame after the engine step. No
//! handler runs while the world is being mutated.

use std::collections::VecDeque;

use crate::ecs::Entity;

/// Two colliders started touching
///
/// The physics step emits one event per side, so every participant sees
/// itself as `entity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionEvent {
    /// Entity receiving the notification
    pub entity: Entity,
    /// Entity it collided with
    pub other: Entity,
}

impl CollisionEvent {
    /// Create a new collision event
    pub fn new(entity: Entity, other: Entity) -> Self {
        Self { entity, other }
    }

    /// Whether this event involves `entity` on either side
    pub fn involves(&self, entity: Entity) -> bool {
        self.entity == entity || self.other == entity
    }
}

/// FIFO queue of pending events
#[derive(Debug)]
pub struct EventQueue<E> {
    events: VecDeque<E>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }
}

impl<E> EventQueue<E> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for later delivery
    pub fn send(&mut self, event: E) {
        self.events.push_back(event);
    }

    /// Take every pending event in the order it was sent
    pub fn drain(&mut self) -> impl Iterator<Item = E> + '_ {
        self.events.drain(..)
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = EventQueue::new();
        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_collision_event_involves_both_sides() {
        let mut world = World::new();
        let ball = world.create_entity();
        let brick = world.create_entity();
        let wall = world.create_entity();

        let event = CollisionEvent::new(ball, brick);
        assert!(event.involves(ball));
        assert!(event.involves(brick));
        assert!(!event.involves(wall));
    }
}
