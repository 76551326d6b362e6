//! Geometric primitives: Point, Size

use std::ops::Sub;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// True when either dimension is zero, negative or not a number.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_subtraction_is_componentwise() {
        let delta = Point::new(120.0, 40.0) - Point::new(100.0, 50.0);
        assert_eq!(delta, Point::new(20.0, -10.0));
    }

    #[test]
    fn size_emptiness() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(f32::NAN, 10.0).is_empty());
        assert!(Size::new(1200.0, -1.0).is_empty());
        assert!(!Size::new(1200.0, 800.0).is_empty());
    }
}
