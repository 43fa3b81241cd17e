//! Contact detection and response
//!
//! One physics step integrates every enabled dynamic body, places all
//! enabled colliders in world space, tests each pair that involves at least
//! one dynamic body and bounces solid contacts. Pairs that were not touching
//! on the previous step produce [`CollisionEvent`]s for both participants.
//!
//! Dynamic bodies are integrated in their local space, which matches world
//! space for bodies parented directly under the scene root.

use std::collections::HashSet;

use super::collision::{Contact, WorldSpaceShape};
use super::collision_layers::CollisionLayers;
use crate::ecs::components::{ColliderComponent, RigidBodyComponent, TransformComponent};
use crate::ecs::{Entity, World};
use crate::events::{CollisionEvent, EventQueue};
use crate::foundation::math::Vec3;

/// Collision pair representing two entities that are touching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// Smaller entity key
    pub entity_a: Entity,
    /// Larger entity key
    pub entity_b: Entity,
}

impl CollisionPair {
    /// Create a new collision pair (always stores the smaller key first)
    pub fn new(entity_a: Entity, entity_b: Entity) -> Self {
        if entity_a <= entity_b {
            Self { entity_a, entity_b }
        } else {
            Self {
                entity_a: entity_b,
                entity_b: entity_a,
            }
        }
    }
}

/// Snapshot of one collider for the duration of a step
#[derive(Debug)]
struct Body {
    entity: Entity,
    shape: WorldSpaceShape,
    layer: CollisionLayers,
    mask: CollisionLayers,
    is_trigger: bool,
    inverse_mass: f32,
    restitution: f32,
    velocity: Vec3,
    correction: Vec3,
}

impl Body {
    fn is_dynamic(&self) -> bool {
        self.inverse_mass > 0.0
    }
}

/// Contact detection with enter tracking
#[derive(Debug, Default)]
pub struct PhysicsCollisionSystem {
    /// Pairs touching after the latest step
    current_pairs: HashSet<CollisionPair>,

    /// Pairs touching after the step before
    previous_pairs: HashSet<CollisionPair>,

    /// Log every contact, not only new ones
    pub debug_enabled: bool,
}

impl PhysicsCollisionSystem {
    /// Create a new collision system
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the simulation by `delta_time` seconds
    pub fn step(&mut self, world: &mut World, delta_time: f32, events: &mut EventQueue<CollisionEvent>) {
        integrate(world, delta_time);

        let mut bodies = gather(world);
        std::mem::swap(&mut self.current_pairs, &mut self.previous_pairs);
        self.current_pairs.clear();

        let mut began = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = pair_mut(&mut bodies, i, j);
                if !a.is_dynamic() && !b.is_dynamic() {
                    continue;
                }
                if !CollisionLayers::should_collide(a.layer, a.mask, b.layer, b.mask) {
                    continue;
                }
                let Some(contact) = a.shape.contact(&b.shape) else {
                    continue;
                };

                if self.debug_enabled {
                    log::trace!(
                        "contact {:?} <-> {:?}: normal {:?}, depth {:.4}",
                        a.entity,
                        b.entity,
                        contact.normal,
                        contact.depth
                    );
                }
                if !a.is_trigger && !b.is_trigger {
                    resolve(a, b, contact);
                }

                let pair = CollisionPair::new(a.entity, b.entity);
                if self.current_pairs.insert(pair) && !self.previous_pairs.contains(&pair) {
                    began.push((a.entity, b.entity));
                }
            }
        }

        write_back(world, &bodies);

        for (a, b) in began {
            log::debug!("collision began: {a:?} <-> {b:?}");
            events.send(CollisionEvent::new(a, b));
            events.send(CollisionEvent::new(b, a));
        }
    }

    /// Whether two entities were touching after the latest step
    pub fn is_touching(&self, a: Entity, b: Entity) -> bool {
        self.current_pairs.contains(&CollisionPair::new(a, b))
    }
}

fn integrate(world: &mut World, delta_time: f32) {
    let moves: Vec<(Entity, Vec3)> = world
        .query::<RigidBodyComponent>()
        .filter(|(_, body)| body.is_dynamic())
        .map(|(entity, body)| (entity, body.position_delta(delta_time)))
        .collect();

    for (entity, delta) in moves {
        if let Some(transform) = world.get_component_mut::<TransformComponent>(entity) {
            transform.translate(delta);
        }
    }
}

fn gather(world: &World) -> Vec<Body> {
    world
        .query::<ColliderComponent>()
        .filter(|(_, collider)| collider.enabled)
        .map(|(entity, collider)| {
            let transform = world.world_transform(entity);
            let body = world.get_component::<RigidBodyComponent>(entity);
            let dynamic = body.filter(|body| body.is_dynamic());
            Body {
                entity,
                shape: WorldSpaceShape::from_collider(&collider.shape, &transform),
                layer: collider.layer,
                mask: collider.mask,
                is_trigger: collider.is_trigger,
                inverse_mass: dynamic.map_or(0.0, RigidBodyComponent::inverse_mass),
                restitution: body.map_or(0.0, |body| body.restitution),
                velocity: dynamic.map_or_else(Vec3::zeros, |body| body.velocity),
                correction: Vec3::zeros(),
            }
        })
        .collect()
}

fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Push the bodies apart and reflect their approach velocity
///
/// The bounce uses the larger of the two restitutions.
fn resolve(a: &mut Body, b: &mut Body, contact: Contact) {
    let total_inverse_mass = a.inverse_mass + b.inverse_mass;
    if total_inverse_mass <= 0.0 {
        return;
    }

    let push = contact.normal * (contact.depth / total_inverse_mass);
    let push_a = push * a.inverse_mass;
    let push_b = -push * b.inverse_mass;
    a.shape.translate(push_a);
    a.correction += push_a;
    b.shape.translate(push_b);
    b.correction += push_b;

    let approach = (a.velocity - b.velocity).dot(&contact.normal);
    if approach >= 0.0 {
        return;
    }
    let restitution = a.restitution.max(b.restitution);
    let impulse = -(1.0 + restitution) * approach / total_inverse_mass;
    a.velocity += contact.normal * (impulse * a.inverse_mass);
    b.velocity -= contact.normal * (impulse * b.inverse_mass);
}

fn write_back(world: &mut World, bodies: &[Body]) {
    for body in bodies.iter().filter(|body| body.is_dynamic()) {
        if let Some(rigid_body) = world.get_component_mut::<RigidBodyComponent>(body.entity) {
            rigid_body.velocity = body.velocity;
        }
        if let Some(transform) = world.get_component_mut::<TransformComponent>(body.entity) {
            transform.translate(body.correction);
        }
    }
}
