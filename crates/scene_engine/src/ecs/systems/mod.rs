//! ECS Systems module
//!
//! Systems hold the per-frame logic; components stay plain data.

pub mod lighting;
pub mod paddle_control;
pub mod renderable_collector;

pub use lighting::{DirectionalLightData, LightingSystem, MAX_DIRECTIONAL_LIGHTS};
pub use paddle_control::PaddleControlSystem;
pub use renderable_collector::{RenderItem, RenderableCollector};
