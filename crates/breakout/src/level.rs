//! Level setup
//!
//! Builds the whole playfield under the scene root: light, floor, walls,
//! paddle with the ball on it, and the brick grid.

use scene_engine::prelude::*;

use crate::brick;
use crate::components::Brick;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::objects;

/// Entities making up one level
#[derive(Debug, Clone)]
pub struct Level {
    /// Player paddle
    pub paddle: Entity,
    /// The ball
    pub ball: Entity,
    /// Every brick, destroyed or not, row by row
    pub bricks: Vec<Entity>,
    /// Left wall, right wall and roof
    pub walls: [Entity; 3],
    /// Floor below the paddle
    pub floor: Entity,
    /// Scene light
    pub light: Entity,
}

impl Level {
    /// Create every object and attach it to `scene`
    pub fn build(world: &mut World, scene: &Scene, config: &GameConfig) -> Result<Self, GameError> {
        let light = objects::spawn_directional_light(world);
        let floor = objects::spawn_floor(world);
        let walls = [
            objects::spawn_left_wall(world),
            objects::spawn_right_wall(world),
            objects::spawn_roof(world),
        ];

        let paddle = objects::spawn_paddle(world);
        let control = world.component_mut::<PaddleControlComponent>(paddle)?;
        *control = PaddleControlComponent::new(config.gameplay.paddle_speed, config.gameplay.paddle_limit)
            .with_keys(config.controls.left, config.controls.right);

        for entity in [light, floor, paddle].into_iter().chain(walls) {
            scene.add_child(world, entity)?;
        }
        let ball = objects::spawn_ball(world, paddle)?;

        let grid = &config.bricks;
        let mut bricks = Vec::with_capacity(grid.len());
        for row in 0..grid.rows {
            for column in 0..grid.columns {
                let (x, y) = grid.position(row, column);
                let entity = objects::spawn_brick_in_grid(world, x, y, Brick { row, column });
                scene.add_child(world, entity)?;
                bricks.push(entity);
            }
        }

        log::info!("Level built: {} bricks in {}x{} grid", bricks.len(), grid.rows, grid.columns);
        Ok(Self {
            paddle,
            ball,
            bricks,
            walls,
            floor,
            light,
        })
    }

    /// Bricks still standing
    pub fn bricks_remaining(&self, world: &World) -> Result<usize, GameError> {
        let mut remaining = 0;
        for &entity in &self.bricks {
            if !brick::is_destroyed(world, entity)? {
                remaining += 1;
            }
        }
        Ok(remaining)
    }

    /// Whether every brick has been destroyed
    pub fn is_cleared(&self, world: &World) -> Result<bool, GameError> {
        Ok(self.bricks_remaining(world)? == 0)
    }
}
