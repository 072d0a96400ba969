//! Axis-aligned rectangle geometry
//!
//! Screen space: origin at the top-left, x grows right, y grows down.
//! Overlap tests are strict, so rectangles that only share an edge do not
//! collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle anchored at the origin (the screen)
    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment, left/top edges inclusive and right/bottom exclusive
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Grow the rectangle by `fraction` of its own size on every side
    pub fn inflate_fraction(&self, fraction: f32) -> Rect {
        let margin = self.size * fraction;
        Rect::new(self.pos - margin, self.size + margin * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_point_edges() {
        let r = Rect::from_size(Vec2::new(100.0, 50.0));
        assert!(r.contains_point(Vec2::ZERO));
        assert!(r.contains_point(Vec2::new(99.9, 49.9)));
        assert!(!r.contains_point(Vec2::new(100.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(-0.1, 10.0)));
    }

    #[test]
    fn test_inflate_fraction() {
        let r = Rect::from_size(Vec2::new(100.0, 50.0)).inflate_fraction(0.2);
        assert_eq!(r.pos, Vec2::new(-20.0, -10.0));
        assert_eq!(r.size, Vec2::new(140.0, 70.0));
    }
}
