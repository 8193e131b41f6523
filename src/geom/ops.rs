//! Line extension and line/polygon intersection helpers.

use super::line::LineF;
use super::point::PointF;
use super::polygon::PolygonF;

/// Moves both endpoints of `line` back along its own direction.
///
/// With `v` the unit vector from `p1` to `p2`, the result is
/// `(p1 - v * from_start, p2 - v * from_end)`. A positive `from_start`
/// therefore lengthens the segment at its start, while a positive
/// `from_end` shortens it at its end; negative values do the opposite.
///
/// Returns `None` for a zero-length or non-finite line, whose direction is
/// undefined.
pub fn extend_line(line: &LineF, from_start: f64, from_end: f64) -> Option<LineF> {
    let length = line.length();
    if length == 0.0 || !length.is_finite() {
        return None;
    }

    let v = PointF::new(line.dx() / length, line.dy() / length);
    Some(LineF::new(line.p1 - v * from_start, line.p2 - v * from_end))
}

/// Returns the first bounded intersection of `line` with the polygon's
/// edges, walking the edges in vertex order.
///
/// Polygons with fewer than two vertices have no edges and never intersect.
pub fn first_bounded_intersection(line: &LineF, polygon: &PolygonF) -> Option<PointF> {
    polygon
        .edges()
        .find_map(|edge| edge.intersect(line).bounded())
}

/// Legacy form of [`first_bounded_intersection`].
///
/// Despite the name this returns the *first* hit in vertex order, and the
/// origin when there is no hit at all. Prefer
/// [`first_bounded_intersection`] or [`nearest_bounded_intersection`],
/// which can tell "no hit" apart from a hit at `(0, 0)`.
pub fn closest_intersection(line: &LineF, polygon: &PolygonF) -> PointF {
    first_bounded_intersection(line, polygon).unwrap_or_default()
}

/// Returns the bounded intersection closest to `line.p1`.
pub fn nearest_bounded_intersection(line: &LineF, polygon: &PolygonF) -> Option<PointF> {
    polygon
        .edges()
        .filter_map(|edge| edge.intersect(line).bounded())
        .min_by(|a, b| {
            line.p1
                .distance_to(*a)
                .total_cmp(&line.p1.distance_to(*b))
        })
}
