//! Entity-Component-System implementation
//!
//! Entities are generational keys; each component type lives in its own
//! sparse storage inside the [`World`].

pub mod component;
pub mod components;
pub mod entity;
pub mod systems;
pub mod world;

mod storage;

pub use component::Component;
pub use entity::Entity;
pub use world::{EcsError, EntityBuilder, World};
