//! Geometry primitives for graph scenes.
//!
//! Everything here works in scene coordinates: floating-point, y axis
//! pointing down, no implicit transforms. The helpers are pure functions
//! over immutable inputs.
//!
//! # Design Principles
//!
//! 1. **Permissive Construction**: rectangles with negative extents and
//!    non-finite points can be represented, so that scene validation can
//!    report them instead of panicking while loading.
//!
//! 2. **Explicit Misses**: intersection helpers return `Option`; only the
//!    legacy [`closest_intersection`] collapses "no hit" into the origin.
//!
//! # Example
//!
//! ```
//! use graphattr::geom::{first_bounded_intersection, LineF, PointF, PolygonF};
//!
//! let triangle = PolygonF::new(vec![
//!     PointF::new(0.0, 0.0),
//!     PointF::new(10.0, 0.0),
//!     PointF::new(5.0, 10.0),
//! ]);
//! let line = LineF::from_coords(5.0, -5.0, 5.0, 5.0);
//! assert_eq!(
//!     first_bounded_intersection(&line, &triangle),
//!     Some(PointF::new(5.0, 0.0))
//! );
//! ```

mod line;
mod ops;
mod point;
mod polygon;
mod rect;

pub use line::{LineF, LineIntersection};
pub use ops::{
    closest_intersection, extend_line, first_bounded_intersection, nearest_bounded_intersection,
};
pub use point::{Point, PointF, Size, SizeF};
pub use polygon::PolygonF;
pub use rect::{bounding_rect, RectF, SceneItem};
