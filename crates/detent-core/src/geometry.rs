//! Geometric primitives: Point, Rect.

use serde::{Deserialize, Serialize};

/// A 2D point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Point at a fractional position inside the rectangle.
    ///
    /// `(0.0, 0.0)` is the top-left corner and `(1.0, 1.0)` the bottom-right.
    /// Fractions outside `0..=1` land outside the rectangle.
    #[must_use]
    pub fn point_at(&self, fx: f32, fy: f32) -> Point {
        Point::new(
            fx.mul_add(self.width, self.x),
            fy.mul_add(self.height, self.y),
        )
    }

    /// Horizontal position of `x` relative to this rectangle, as a fraction
    /// of its width. Not clamped; a zero width yields a non-finite result.
    #[must_use]
    pub fn horizontal_fraction(&self, x: f32) -> f64 {
        (f64::from(x) - f64::from(self.x)) / f64::from(self.width)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_rect_point_at() {
        let r = Rect::new(10.0, 10.0, 100.0, 20.0);
        assert_eq!(r.point_at(0.5, 0.5), Point::new(60.0, 20.0));
        assert_eq!(r.point_at(0.0, 0.0), Point::new(10.0, 10.0));
        assert_eq!(r.point_at(1.5, 0.5), Point::new(160.0, 20.0));
    }

    #[test]
    fn test_rect_horizontal_fraction() {
        let r = Rect::new(100.0, 0.0, 200.0, 20.0);
        assert!((r.horizontal_fraction(200.0) - 0.5).abs() < f64::EPSILON);
        assert!(r.horizontal_fraction(50.0) < 0.0);
        assert!(r.horizontal_fraction(400.0) > 1.0);
    }

    #[test]
    fn test_rect_horizontal_fraction_zero_width() {
        let r = Rect::new(100.0, 0.0, 0.0, 20.0);
        assert!(!r.horizontal_fraction(150.0).is_finite());
        assert!(r.horizontal_fraction(100.0).is_nan());
    }

    #[test]
    fn test_rect_contains_point_inclusive() {
        let r = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert!(r.contains_point(&Point::new(10.0, 10.0)));
        assert!(r.contains_point(&Point::new(110.0, 110.0)));
        assert!(!r.contains_point(&Point::new(5.0, 50.0)));
        assert!(!r.contains_point(&Point::new(50.0, 111.0)));
    }
}
