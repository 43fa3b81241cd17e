//! Paddle control component
//!
//! Moves an entity left and right from keyboard state. The keyboard itself
//! is fed by the host through [`InputManager`](crate::input::InputManager).

use crate::ecs::Component;
use crate::input::KeyCode;

/// Horizontal keyboard control for a paddle
#[derive(Debug, Clone, PartialEq)]
pub struct PaddleControlComponent {
    /// Horizontal speed in units per second
    pub speed: f32,

    /// Largest distance from x = 0 the entity may reach
    pub limit: f32,

    /// Key moving towards -X
    pub left_key: KeyCode,

    /// Key moving towards +X
    pub right_key: KeyCode,
}

impl Component for PaddleControlComponent {
    const NAME: &'static str = "controller";
}

impl PaddleControlComponent {
    /// Create a controller using the arrow keys
    pub fn new(speed: f32, limit: f32) -> Self {
        Self {
            speed,
            limit: limit.abs(),
            left_key: KeyCode::Left,
            right_key: KeyCode::Right,
        }
    }

    /// Use different keys
    #[must_use]
    pub fn with_keys(mut self, left_key: KeyCode, right_key: KeyCode) -> Self {
        self.left_key = left_key;
        self.right_key = right_key;
        self
    }
}

impl Default for PaddleControlComponent {
    fn default() -> Self {
        Self::new(15.0, 8.0)
    }
}
