//! Physics module for collision detection and response
//!
//! Enough simulation to drive game logic headlessly: Euler integration of
//! dynamic rigid bodies, box and sphere contacts, and a restitution bounce.

pub mod collision;
pub mod collision_layers;
pub mod collision_system;

pub use collision::{Aabb, BoundingSphere, Contact, WorldSpaceShape};
pub use collision_layers::CollisionLayers;
pub use collision_system::{CollisionPair, PhysicsCollisionSystem};
