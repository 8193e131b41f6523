//! Open vertex lists used as node outlines.

use serde::{Deserialize, Serialize};

use super::line::LineF;
use super::point::PointF;
use super::rect::{RectF, SceneItem};

/// An ordered list of vertices.
///
/// Edges connect consecutive vertices only; a polygon that should be closed
/// for edge walking repeats its first vertex at the end (see
/// [`RectF::to_polygon`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonF(Vec<PointF>);

impl PolygonF {
    #[inline]
    pub fn new(points: Vec<PointF>) -> Self {
        Self(points)
    }

    #[inline]
    pub fn points(&self) -> &[PointF] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the edges `(v[i-1], v[i])` for `i = 1..len`.
    ///
    /// A polygon with fewer than two vertices has no edges.
    pub fn edges(&self) -> impl Iterator<Item = LineF> + '_ {
        self.0.windows(2).map(|w| LineF::new(w[0], w[1]))
    }

    /// Returns the polygon moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> PolygonF {
        PolygonF(
            self.0
                .iter()
                .map(|p| PointF::new(p.x + dx, p.y + dy))
                .collect(),
        )
    }

    /// Returns the polygon with its last vertex joined back to the first.
    pub fn closed(&self) -> PolygonF {
        let mut points = self.0.clone();
        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
            if first != last {
                points.push(first);
            }
        }
        PolygonF(points)
    }
}

impl From<Vec<PointF>> for PolygonF {
    fn from(points: Vec<PointF>) -> Self {
        Self(points)
    }
}

impl SceneItem for PolygonF {
    fn scene_bounding_rect(&self) -> RectF {
        let Some(first) = self.0.first() else {
            return RectF::default();
        };
        let (mut left, mut top, mut right, mut bottom) = (first.x, first.y, first.x, first.y);
        for p in &self.0[1..] {
            left = left.min(p.x);
            top = top.min(p.y);
            right = right.max(p.x);
            bottom = bottom.max(p.y);
        }
        RectF::new(left, top, right - left, bottom - top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_follow_vertex_order() {
        let poly = PolygonF::new(vec![
            PointF::new(0.0, 0.0),
            PointF::new(10.0, 0.0),
            PointF::new(5.0, 10.0),
        ]);
        let edges: Vec<LineF> = poly.edges().collect();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], LineF::from_coords(0.0, 0.0, 10.0, 0.0));
        assert_eq!(edges[1], LineF::from_coords(10.0, 0.0, 5.0, 10.0));
    }

    #[test]
    fn test_single_vertex_has_no_edges() {
        let poly = PolygonF::new(vec![PointF::new(1.0, 1.0)]);
        assert_eq!(poly.edges().count(), 0);
        assert_eq!(PolygonF::default().edges().count(), 0);
    }

    #[test]
    fn test_closed_appends_first_vertex_once() {
        let poly = PolygonF::new(vec![PointF::new(0.0, 0.0), PointF::new(1.0, 0.0)]).closed();
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.closed().len(), 3);
    }

    #[test]
    fn test_polygon_bounding_rect() {
        let poly = PolygonF::new(vec![
            PointF::new(0.0, 0.0),
            PointF::new(10.0, 0.0),
            PointF::new(5.0, 10.0),
        ]);
        assert_eq!(poly.scene_bounding_rect(), RectF::new(0.0, 0.0, 10.0, 10.0));
    }
}
