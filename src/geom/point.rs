//! Point and size value types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point with floating-point coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    /// Creates a new point with the given x and y values.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: PointF) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Rounds both coordinates to the nearest integer point.
    #[inline]
    pub fn to_point(&self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl Add for PointF {
    type Output = PointF;

    fn add(self, rhs: PointF) -> PointF {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointF {
    type Output = PointF;

    fn sub(self, rhs: PointF) -> PointF {
        PointF::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for PointF {
    type Output = PointF;

    fn mul(self, rhs: f64) -> PointF {
        PointF::new(self.x * rhs, self.y * rhs)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        PointF::new(p.x as f64, p.y as f64)
    }
}

/// A 2D point with integer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair with floating-point extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeF {
    pub width: f64,
    pub height: f64,
}

impl SizeF {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if either extent is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns the size with width and height swapped.
    #[inline]
    pub fn transposed(&self) -> SizeF {
        SizeF::new(self.height, self.width)
    }
}

impl From<Size> for SizeF {
    fn from(s: Size) -> Self {
        SizeF::new(s.width as f64, s.height as f64)
    }
}

/// A width/height pair with integer extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns true if either extent is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = PointF::new(1.0, 2.0);
        let b = PointF::new(4.0, 6.0);
        assert_eq!(b - a, PointF::new(3.0, 4.0));
        assert_eq!(a + b, PointF::new(5.0, 8.0));
        assert_eq!(a * 2.0, PointF::new(2.0, 4.0));
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(PointF::new(10.0, 20.0).is_finite());
        assert!(!PointF::new(f64::NAN, 20.0).is_finite());
        assert!(!PointF::new(10.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_size_empty() {
        assert!(SizeF::new(0.0, 5.0).is_empty());
        assert!(!SizeF::new(1.0, 5.0).is_empty());
        assert!(Size::new(3, -1).is_empty());
        assert_eq!(SizeF::new(3.0, 4.0).transposed(), SizeF::new(4.0, 3.0));
    }
}
