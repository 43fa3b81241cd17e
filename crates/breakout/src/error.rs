//! Game errors

use scene_engine::prelude::*;
use thiserror::Error;

/// Errors raised by game object operations
#[derive(Error, Debug)]
pub enum GameError {
    /// A game object lacks a component its blueprint gives it
    #[error("game object {entity:?} has no {component} component")]
    MissingComponent {
        /// Offending entity
        entity: Entity,
        /// Name of the missing component
        component: &'static str,
    },

    /// The game was updated before its level was built
    #[error("game updated before initialization")]
    NotInitialized,

    /// Any other world failure (stale entity, hierarchy cycle)
    #[error("ECS error: {0}")]
    Ecs(EcsError),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The engine failed to start or run
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

impl From<EcsError> for GameError {
    fn from(error: EcsError) -> Self {
        match error {
            EcsError::MissingComponent { entity, component } => Self::MissingComponent { entity, component },
            other => Self::Ecs(other),
        }
    }
}

impl From<GameError> for AppError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::Config(error) => Self::Config(error),
            GameError::Engine(error) => Self::Engine(error),
            other => Self::GameLogic(other.to_string()),
        }
    }
}
