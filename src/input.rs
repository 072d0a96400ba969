//! Host-agnostic input events
//!
//! The host maps its own keycodes onto [`Key`] before handing events to
//! the game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Toggle pause
    Escape,
    /// Start over after a game over
    Restart,
    Other,
}

impl Key {
    /// Default WASD / arrow layout
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'w' => Key::Up,
            's' => Key::Down,
            'a' => Key::Left,
            'd' => Key::Right,
            'r' => Key::Restart,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseDown { button: MouseButton, pos: Vec2 },
    MouseMove(Vec2),
}
