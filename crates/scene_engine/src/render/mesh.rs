//! Mesh description
//!
//! A mesh is a primitive geometry paired with a material. No vertex data is
//! generated here; a renderer tessellates [`Geometry`] however it likes.

use crate::render::PhongMaterial;

/// Primitive geometry a mesh is built from
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Unit cube centred on the origin (half extent 0.5)
    Cube,
    /// Sphere centred on the origin
    Sphere {
        /// Sphere radius
        radius: f32,
    },
}

/// Geometry plus material
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Shape to draw
    pub geometry: Geometry,

    /// Surface material
    pub material: PhongMaterial,
}

impl Mesh {
    /// Create a mesh
    pub fn new(geometry: Geometry, material: PhongMaterial) -> Self {
        Self { geometry, material }
    }
}
