//! Draw primitives handed to the host renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Body, Color, Rect};

/// Shape of a draw command, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect { pos: Vec2, size: Vec2 },
    /// Filled ellipse inscribed in the given box
    Ellipse { pos: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f32 },
}

/// One thing for the host to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub shape: Shape,
    pub color: Color,
    /// Outline width; `None` means filled
    pub outline: Option<f32>,
}

/// Filled rectangle
pub fn rect(rect: &Rect, color: Color) -> DrawCommand {
    DrawCommand {
        shape: Shape::Rect {
            pos: rect.pos,
            size: rect.size,
        },
        color,
        outline: None,
    }
}

/// Rectangle outline of the given width
pub fn rect_outline(rect: &Rect, color: Color, width: f32) -> DrawCommand {
    DrawCommand {
        outline: Some(width),
        ..self::rect(rect, color)
    }
}

/// Filled ellipse covering `rect`
pub fn ellipse(rect: &Rect, color: Color) -> DrawCommand {
    DrawCommand {
        shape: Shape::Ellipse {
            pos: rect.pos,
            size: rect.size,
        },
        color,
        outline: None,
    }
}

/// Filled circle
pub fn circle(center: Vec2, radius: f32, color: Color) -> DrawCommand {
    DrawCommand {
        shape: Shape::Circle { center, radius },
        color,
        outline: None,
    }
}

/// A body as a filled rectangle in its own colour
pub fn body_rect(body: &Body) -> DrawCommand {
    rect(body.rect(), body.color)
}

/// A body as a filled ellipse in its own colour
pub fn body_ellipse(body: &Body) -> DrawCommand {
    ellipse(body.rect(), body.color)
}
