//! The drawing surface scenes render into.

use crate::codec::{Color, FontDescriptor, PenStyle};
use crate::geom::{LineF, PointF, PolygonF, RectF};

/// Quality hints a surface may honour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderHint {
    Antialiasing,
    TextAntialiasing,
    SmoothPixmapTransform,
}

/// Stroke settings for outlines and lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    pub style: PenStyle,
}

impl Pen {
    pub fn new(color: Color, width: f64, style: PenStyle) -> Self {
        Self {
            color,
            width,
            style,
        }
    }

    /// True if the pen draws nothing.
    pub fn is_none(&self) -> bool {
        self.style == PenStyle::NoPen || !self.color.is_valid() || self.color.a == 0
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::rgb(0, 0, 0), 1.0, PenStyle::SolidLine)
    }
}

/// Fill settings for closed shapes. `None` leaves shapes unfilled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Brush(pub Option<Color>);

impl Brush {
    pub fn solid(color: Color) -> Self {
        if color.is_valid() && color.a > 0 {
            Brush(Some(color))
        } else {
            Brush(None)
        }
    }

    pub fn none() -> Self {
        Brush(None)
    }

    pub fn color(&self) -> Option<Color> {
        self.0
    }
}

/// A 2D drawing target with a transform stack.
///
/// Coordinates passed to the draw calls are in the current user space,
/// which starts out equal to the surface's device space (y down).
pub trait Painter {
    fn set_render_hint(&mut self, hint: RenderHint, on: bool);
    fn set_pen(&mut self, pen: &Pen);
    fn set_brush(&mut self, brush: &Brush);

    fn draw_line(&mut self, line: &LineF);
    fn draw_polyline(&mut self, points: &[PointF]);
    fn draw_polygon(&mut self, polygon: &PolygonF);
    fn draw_rect(&mut self, rect: &RectF);
    fn draw_ellipse(&mut self, rect: &RectF);
    /// Draws `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, origin: PointF, font: &FontDescriptor, text: &str);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, sx: f64, sy: f64);
}

/// One recorded painter call.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    RenderHint(RenderHint, bool),
    Pen(Pen),
    Brush(Brush),
    Line(LineF),
    Polyline(Vec<PointF>),
    Polygon(PolygonF),
    Rect(RectF),
    Ellipse(RectF),
    Text {
        origin: PointF,
        font: FontDescriptor,
        text: String,
    },
    Save,
    Restore,
    Translate(f64, f64),
    Scale(f64, f64),
}

/// A painter that records every call, for inspecting what a scene draws.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shape and text draw calls (state changes excluded).
    pub fn draw_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    PaintOp::Line(_)
                        | PaintOp::Polyline(_)
                        | PaintOp::Polygon(_)
                        | PaintOp::Rect(_)
                        | PaintOp::Ellipse(_)
                        | PaintOp::Text { .. }
                )
            })
            .count()
    }
}

impl Painter for RecordingPainter {
    fn set_render_hint(&mut self, hint: RenderHint, on: bool) {
        self.ops.push(PaintOp::RenderHint(hint, on));
    }

    fn set_pen(&mut self, pen: &Pen) {
        self.ops.push(PaintOp::Pen(pen.clone()));
    }

    fn set_brush(&mut self, brush: &Brush) {
        self.ops.push(PaintOp::Brush(*brush));
    }

    fn draw_line(&mut self, line: &LineF) {
        self.ops.push(PaintOp::Line(*line));
    }

    fn draw_polyline(&mut self, points: &[PointF]) {
        self.ops.push(PaintOp::Polyline(points.to_vec()));
    }

    fn draw_polygon(&mut self, polygon: &PolygonF) {
        self.ops.push(PaintOp::Polygon(polygon.clone()));
    }

    fn draw_rect(&mut self, rect: &RectF) {
        self.ops.push(PaintOp::Rect(*rect));
    }

    fn draw_ellipse(&mut self, rect: &RectF) {
        self.ops.push(PaintOp::Ellipse(*rect));
    }

    fn draw_text(&mut self, origin: PointF, font: &FontDescriptor, text: &str) {
        self.ops.push(PaintOp::Text {
            origin,
            font: font.clone(),
            text: text.to_string(),
        });
    }

    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(PaintOp::Translate(dx, dy));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(PaintOp::Scale(sx, sy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_none() {
        assert!(!Pen::default().is_none());
        assert!(Pen::new(Color::rgb(1, 2, 3), 1.0, PenStyle::NoPen).is_none());
        assert!(Pen::new(Color::invalid(), 1.0, PenStyle::SolidLine).is_none());
    }

    #[test]
    fn test_brush_drops_transparent() {
        assert_eq!(Brush::solid(Color::rgba(1, 2, 3, 0)), Brush::none());
        assert_eq!(
            Brush::solid(Color::rgb(1, 2, 3)).color(),
            Some(Color::rgb(1, 2, 3))
        );
    }

    #[test]
    fn test_recording_counts_draws_only() {
        let mut painter = RecordingPainter::new();
        painter.save();
        painter.set_pen(&Pen::default());
        painter.draw_rect(&RectF::new(0.0, 0.0, 1.0, 1.0));
        painter.draw_line(&LineF::from_coords(0.0, 0.0, 1.0, 1.0));
        painter.restore();
        assert_eq!(painter.ops.len(), 5);
        assert_eq!(painter.draw_count(), 2);
    }
}
