//! ECS Components module
//!
//! Engine-provided components. Each one reports itself under a fixed name in
//! an entity's component mapping.

pub mod collision;
pub mod control;
pub mod lighting;
pub mod mesh;
pub mod rigidbody;
pub mod transform;

pub use collision::{ColliderComponent, ColliderShape};
pub use control::PaddleControlComponent;
pub use lighting::PhongDirectionalLightComponent;
pub use mesh::MeshComponent;
pub use rigidbody::RigidBodyComponent;
pub use transform::TransformComponent;
