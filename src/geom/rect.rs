//! Axis-aligned rectangles and bounding-rect aggregation.

use serde::{Deserialize, Serialize};

use super::point::{PointF, SizeF};
use super::polygon::PolygonF;

/// An axis-aligned rectangle given by its top-left corner and extents.
///
/// The default value is the null rectangle (zero width and height), which
/// acts as the identity for [`RectF::united`].
///
/// Note: negative extents are representable. Use [`RectF::normalized`] to
/// get an equivalent rectangle with non-negative width and height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a top-left position and a size.
    #[inline]
    pub fn from_pos_size(pos: PointF, size: SizeF) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Creates the rectangle spanning two opposite corners.
    pub fn from_points(a: PointF, b: PointF) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self::new(left, top, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn top_left(&self) -> PointF {
        PointF::new(self.left(), self.top())
    }

    #[inline]
    pub fn bottom_right(&self) -> PointF {
        PointF::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn center(&self) -> PointF {
        PointF::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn size(&self) -> SizeF {
        SizeF::new(self.width, self.height)
    }

    /// Returns true if both width and height are zero.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if the rectangle encloses no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns an equivalent rectangle with non-negative extents.
    pub fn normalized(&self) -> RectF {
        let mut r = *self;
        if r.width < 0.0 {
            r.x += r.width;
            r.width = -r.width;
        }
        if r.height < 0.0 {
            r.y += r.height;
            r.height = -r.height;
        }
        r
    }

    /// Returns the rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> RectF {
        RectF::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Returns the rectangle grown by `margin` on every side.
    #[inline]
    pub fn adjusted(&self, margin: f64) -> RectF {
        RectF::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Returns true if `p` lies inside or on the border of the rectangle.
    pub fn contains(&self, p: PointF) -> bool {
        let r = self.normalized();
        p.x >= r.left() && p.x <= r.right() && p.y >= r.top() && p.y <= r.bottom()
    }

    /// Returns the smallest rectangle containing both rectangles.
    ///
    /// A null rectangle contributes nothing: uniting with it returns the
    /// other operand unchanged.
    pub fn united(&self, other: &RectF) -> RectF {
        if self.is_null() {
            return *other;
        }
        if other.is_null() {
            return *self;
        }

        let a = self.normalized();
        let b = other.normalized();
        let left = a.left().min(b.left());
        let top = a.top().min(b.top());
        let right = a.right().max(b.right());
        let bottom = a.bottom().max(b.bottom());
        RectF::new(left, top, right - left, bottom - top)
    }

    /// Returns the corners in clockwise order, repeating the first corner
    /// so that every side is an edge of the polygon.
    pub fn to_polygon(&self) -> PolygonF {
        let r = self.normalized();
        PolygonF::new(vec![
            r.top_left(),
            PointF::new(r.right(), r.top()),
            r.bottom_right(),
            PointF::new(r.left(), r.bottom()),
            r.top_left(),
        ])
    }
}

/// Anything placed in scene space that has an axis-aligned extent.
pub trait SceneItem {
    /// The item's bounding rectangle after its own position is applied.
    fn scene_bounding_rect(&self) -> RectF;
}

impl SceneItem for RectF {
    fn scene_bounding_rect(&self) -> RectF {
        *self
    }
}

impl<T: SceneItem + ?Sized> SceneItem for &T {
    fn scene_bounding_rect(&self) -> RectF {
        (**self).scene_bounding_rect()
    }
}

impl<T: SceneItem + ?Sized> SceneItem for Box<T> {
    fn scene_bounding_rect(&self) -> RectF {
        (**self).scene_bounding_rect()
    }
}

/// Returns the union of the scene bounding rectangles of `items`.
///
/// An empty collection yields the null rectangle.
pub fn bounding_rect<I>(items: I) -> RectF
where
    I: IntoIterator,
    I::Item: SceneItem,
{
    items
        .into_iter()
        .fold(RectF::default(), |acc, item| {
            acc.united(&item.scene_bounding_rect())
        })
}
