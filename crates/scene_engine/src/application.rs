//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::ecs::EcsError;
use crate::engine::{Engine, EngineError};
use crate::input::KeyCode;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create your game or application using the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame. Use this to build the initial
    /// scene.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame before the engine systems run. Collision events
    /// from the previous frame are waiting in the engine's queue.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Simulated seconds for this frame
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// Called when the host forwards an event (input, focus, close).
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        engine.handle_event(event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once after the last frame.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Entity or component lookup failed
    #[error("ECS error: {0}")]
    Ecs(#[from] EcsError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Window close requested
    WindowCloseRequested,

    /// Window lost focus
    WindowUnfocused,

    /// Key was pressed
    KeyPressed(KeyCode),

    /// Key was released
    KeyReleased(KeyCode),
}
