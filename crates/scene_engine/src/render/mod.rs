//! Render-side data
//!
//! Meshes and materials as plain values attached to entities. Drawing them
//! is left to a renderer outside this crate.

pub mod material;
pub mod mesh;

pub use material::PhongMaterial;
pub use mesh::{Geometry, Mesh};
