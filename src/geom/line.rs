//! Line segments and segment intersection.

use serde::{Deserialize, Serialize};

use super::point::PointF;

/// A finite line segment from `p1` to `p2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineF {
    pub p1: PointF,
    pub p2: PointF,
}

/// How two lines relate to each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineIntersection {
    /// The lines are parallel (or the computation is not finite).
    Parallel,
    /// The intersection point lies within both segments.
    Bounded(PointF),
    /// The infinite extensions meet, but outside at least one segment.
    Unbounded(PointF),
}

impl LineIntersection {
    /// Returns the intersection point if it lies within both segments.
    #[inline]
    pub fn bounded(self) -> Option<PointF> {
        match self {
            LineIntersection::Bounded(p) => Some(p),
            _ => None,
        }
    }
}

impl LineF {
    #[inline]
    pub const fn new(p1: PointF, p2: PointF) -> Self {
        Self { p1, p2 }
    }

    /// Creates a line from explicit coordinates.
    #[inline]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(PointF::new(x1, y1), PointF::new(x2, y2))
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    /// Returns true if the segment has zero length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p1.is_finite() && self.p2.is_finite()
    }

    /// Intersects this segment with `other`.
    ///
    /// Uses the parametric form `p1 + t * (p2 - p1)` for both lines; the
    /// result is bounded when both parameters fall within `[0, 1]`.
    pub fn intersect(&self, other: &LineF) -> LineIntersection {
        let a = self.p2 - self.p1;
        let b = other.p1 - other.p2;
        let c = self.p1 - other.p1;

        let denominator = a.y * b.x - a.x * b.y;
        if denominator == 0.0 || !denominator.is_finite() {
            return LineIntersection::Parallel;
        }

        let na = (b.y * c.x - b.x * c.y) / denominator;
        let point = self.p1 + a * na;

        if !(0.0..=1.0).contains(&na) {
            return LineIntersection::Unbounded(point);
        }

        let nb = (a.x * c.y - a.y * c.x) / denominator;
        if !(0.0..=1.0).contains(&nb) {
            return LineIntersection::Unbounded(point);
        }

        LineIntersection::Bounded(point)
    }
}
