//! Keyboard-driven horizontal movement
//!
//! Every entity with a [`PaddleControlComponent`] moves along X while one of
//! its keys is held. Holding both keys cancels out. The position is clamped
//! to `[-limit, limit]` after each move.

use crate::ecs::components::{PaddleControlComponent, TransformComponent};
use crate::ecs::{Entity, World};
use crate::input::InputManager;

/// Moves controlled entities from keyboard state
#[derive(Debug, Default)]
pub struct PaddleControlSystem;

impl PaddleControlSystem {
    /// Create a new paddle control system
    pub fn new() -> Self {
        Self
    }

    /// Apply one frame of input
    pub fn update(&self, world: &mut World, input: &InputManager, delta_time: f32) {
        let moves: Vec<(Entity, f32, f32)> = world
            .query::<PaddleControlComponent>()
            .filter_map(|(entity, control)| {
                let mut direction = 0.0;
                if input.is_key_down(control.left_key) {
                    direction -= 1.0;
                }
                if input.is_key_down(control.right_key) {
                    direction += 1.0;
                }
                (direction != 0.0).then(|| (entity, direction * control.speed * delta_time, control.limit))
            })
            .collect();

        for (entity, dx, limit) in moves {
            if let Some(transform) = world.get_component_mut::<TransformComponent>(entity) {
                transform.position.x = (transform.position.x + dx).clamp(-limit, limit);
            }
        }
    }
}
