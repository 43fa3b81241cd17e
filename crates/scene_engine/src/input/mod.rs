//! Keyboard state
//!
//! The engine never polls a device. The host pushes key transitions into the
//! [`InputManager`] and systems read the resulting state each frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    down: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// End the frame: clears the "just pressed" set
    pub fn update(&mut self) {
        self.pressed_this_frame.clear();
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.down.insert(key) {
                self.pressed_this_frame.insert(key);
            }
        } else {
            self.down.remove(&key);
        }
    }

    /// Whether the key is currently held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Whether the key went down since the last [`update`](Self::update)
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    /// Release every key (focus loss)
    pub fn release_all(&mut self) {
        self.down.clear();
        self.pressed_this_frame.clear();
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// P key
    P,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}
