//! # Breakout
//!
//! Breakout game objects on top of `scene_engine`: blueprints for the
//! paddle, ball, bricks, walls, floor and light, the ball's launch and reset
//! rules, and a [`BreakoutGame`] application that runs a level.
//!
//! ```rust,no_run
//! use breakout::{BreakoutGame, GameConfig};
//! use scene_engine::Engine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GameConfig::default();
//!     let mut engine = Engine::new(config.engine.clone())?;
//!     engine.run(&mut BreakoutGame::new(config), Some(3600))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod ball;
pub mod brick;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod level;
pub mod objects;

pub use ball::CollisionOutcome;
pub use config::GameConfig;
pub use error::GameError;
pub use game::BreakoutGame;
pub use level::Level;
