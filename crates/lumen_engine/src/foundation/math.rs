//! Math utilities and types
//!
//! Provides the 2D vector and rectangle types shared by physics, camera and
//! the render contract. Everything is `f64` in logical pixels.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// Axis-aligned rectangle described by its top-left origin and its size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,

    /// Width and height, both expected to be >= 0
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from origin and size
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle anchored at (0, 0)
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            origin: Vec2::zeros(),
            size: Vec2::new(width, height),
        }
    }

    /// Left edge
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.origin.x + self.size.x
    }

    /// Top edge
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.y
    }

    /// Geometric center
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Whether `other` lies entirely inside this rectangle (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

/// Math utility functions
pub mod utils {
    use super::Vec2;

    /// Rotate `point` by `angle` radians around `pivot`
    ///
    /// Positive angles turn clockwise on screen since +Y points down.
    pub fn rotate_about(point: Vec2, pivot: Vec2, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        let d = point - pivot;
        pivot + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));

        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::from_size(320.0, 200.0);

        assert!(outer.contains_rect(&Rect::new(Vec2::new(304.0, 0.0), Vec2::new(16.0, 16.0))));
        assert!(!outer.contains_rect(&Rect::new(Vec2::new(305.0, 0.0), Vec2::new(16.0, 16.0))));
    }

    #[test]
    fn test_rotate_about_quarter_turn() {
        let rotated = utils::rotate_about(Vec2::new(11.0, 10.0), Vec2::new(10.0, 10.0), FRAC_PI_2);

        assert_relative_eq!(rotated, Vec2::new(10.0, 11.0), epsilon = 1e-12);
    }
}
