//! Narrow-phase collision geometry
//!
//! - [`primitives`] - boxes, spheres and the contact tests between them
//! - [`shape`] - model-space collider shapes placed in world space

pub mod primitives;
pub mod shape;

pub use primitives::{Aabb, BoundingSphere, Contact};
pub use shape::WorldSpaceShape;
