//! Axis-aligned rectangle geometry
//!
//! Screen-space convention: `pos` is the top-left corner and y grows
//! downward. Hit tests are inclusive on every edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle spanning two corners (in any order)
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            pos: min,
            size: max - min,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Snap the corners toward zero to whole units
    pub fn truncated(&self) -> Self {
        Self::from_corners(self.min().trunc(), self.max().trunc())
    }

    /// Inclusive point containment
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(40.0, 60.0)));
        assert!(r.contains(Vec2::new(25.0, 30.0)));
        assert!(!r.contains(Vec2::new(40.1, 30.0)));
        assert!(!r.contains(Vec2::new(25.0, 19.9)));
    }

    #[test]
    fn test_from_corners_orders_points() {
        let r = Rect::from_corners(Vec2::new(5.0, 8.0), Vec2::new(1.0, 2.0));
        assert_eq!(r.pos, Vec2::new(1.0, 2.0));
        assert_eq!(r.size, Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_truncated() {
        let r = Rect::new(-2.5, 3.7, 10.0, 1.0).truncated();
        assert_eq!(r.min(), Vec2::new(-2.0, 3.0));
        assert_eq!(r.max(), Vec2::new(7.0, 4.0));
    }
}
