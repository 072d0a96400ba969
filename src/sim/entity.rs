//! Movable axis-aligned bodies
//!
//! Every actor in the arena (player, enemies, projectiles) is built on a
//! [`Body`]. Position is private so the bounding rect can never go stale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(200, 0, 0);
    pub const BRIGHT_RED: Color = Color::rgb(255, 32, 32);
    pub const GREEN: Color = Color::rgb(0, 200, 0);
    pub const GREY: Color = Color::rgb(117, 117, 117);
}

/// A moving rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pos: Vec2,
    size: Vec2,
    rect: Rect,
    /// Scalar speed in pixels/second
    pub speed: f32,
    /// Unit or zero vector
    pub direction: Vec2,
    pub color: Color,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, color: Color) -> Self {
        Self {
            pos,
            size,
            rect: Rect::new(pos, size),
            speed,
            direction: Vec2::ZERO,
            color,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn midpoint(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
        self.rect = Rect::new(self.pos, self.size);
    }

    /// Move along `direction` at `speed` for `dt` seconds. Never clamped.
    pub fn advance(&mut self, dt: f32) {
        let pos = self.pos + self.direction * self.speed * dt;
        self.set_pos(pos);
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        self.rect.intersects(&other.rect)
    }
}
