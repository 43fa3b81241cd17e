//! # Scene Engine
//!
//! A small entity-component engine that game-object blueprints are composed on.
//!
//! ## Features
//!
//! - **ECS World**: Generational entities with typed, named component storage
//! - **Scene Graph**: Parent/child relationships and world-space transforms
//! - **Collision Dispatch**: Box and sphere colliders that queue collision events
//! - **Rigid Bodies**: Mass, restitution, velocity and impulses
//! - **Render Data**: Mesh geometry and Phong materials as plain data
//!
//! Rendering, asset loading and device input polling live outside this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let _ball = engine.world.spawn("ball")
//!             .with(RigidBodyComponent::new(1.0, 1.0))
//!             .with(ColliderComponent::sphere(0.5))
//!             .build();
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         for event in engine.drain_collisions() {
//!             log::info!("{:?} hit {:?}", event.entity, event.other);
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::default())?;
//!     engine.run(&mut MyApp, Some(600))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::EngineConfig,
        ecs::components::{
            ColliderComponent, ColliderShape, MeshComponent, PaddleControlComponent,
            PhongDirectionalLightComponent, RigidBodyComponent, TransformComponent,
        },
        ecs::{Component, EcsError, Entity, EntityBuilder, World},
        events::{CollisionEvent, EventQueue},
        foundation::math::{Mat4, Point3, Quat, Transform, Vec3},
        input::{InputManager, KeyCode},
        physics::CollisionLayers,
        render::{Geometry, Mesh, PhongMaterial},
        scene::Scene,
        AppError, AppEvent, Application, Engine, EngineError,
    };
}
