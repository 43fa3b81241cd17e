//! Game driver
//!
//! [`BreakoutGame`] plugs the level into the engine loop: launches the ball
//! on key press, routes ball contacts through the collision rules, and stops
//! the engine once the level is cleared.

use scene_engine::prelude::*;

use crate::ball::{self, CollisionOutcome};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::level::Level;

/// Breakout application
#[derive(Debug)]
pub struct BreakoutGame {
    config: GameConfig,
    level: Option<Level>,
    score: u32,
    balls_lost: u32,
    launches: u32,
}

impl BreakoutGame {
    /// Create a game that builds its level on initialization
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            level: None,
            score: 0,
            balls_lost: 0,
            launches: 0,
        }
    }

    /// The level, once initialized
    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    /// Bricks destroyed so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Times the ball hit the floor
    pub fn balls_lost(&self) -> u32 {
        self.balls_lost
    }

    /// Times the ball left the paddle
    pub fn launches(&self) -> u32 {
        self.launches
    }

    fn frame(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        let level = self.level.as_ref().ok_or(GameError::NotInitialized)?;

        if engine.input.is_key_down(self.config.controls.launch)
            && ball::launch_with_impulse(
                &mut engine.world,
                &engine.scene,
                level.ball,
                self.config.gameplay.launch_impulse,
            )?
        {
            self.launches += 1;
            log::info!("Ball launched ({} so far)", self.launches);
        }

        for event in engine.drain_collisions() {
            if event.entity != level.ball {
                continue;
            }
            match ball::handle_collision(&mut engine.world, level.ball, event.other)? {
                CollisionOutcome::Reset => {
                    self.balls_lost += 1;
                    log::info!("Ball lost ({} so far)", self.balls_lost);
                }
                CollisionOutcome::BrickDestroyed(_) => self.score += 1,
                CollisionOutcome::Ignored => {}
            }
        }

        if level.is_cleared(&engine.world)? {
            log::info!("Level cleared with score {}", self.score);
            engine.quit();
        }
        Ok(())
    }
}

impl Application for BreakoutGame {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let level = Level::build(&mut engine.world, &engine.scene, &self.config)?;
        self.level = Some(level);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        self.frame(engine)?;
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        let remaining = self
            .level
            .as_ref()
            .and_then(|level| level.bricks_remaining(&engine.world).ok())
            .unwrap_or(0);
        log::info!(
            "Game over after {} frames: score {}, balls lost {}, bricks remaining {}",
            engine.frame_count(),
            self.score,
            self.balls_lost,
            remaining
        );
    }
}
