//! Scenes and the painters they draw into.
//!
//! A [`Scene`] is anything with items placed in scene space that can draw
//! itself through a [`Painter`]. [`GraphScene`] is the concrete node/edge
//! scene loaded from JSON, whose item attributes are stored as codec text.
//!
//! # Example
//!
//! ```
//! use graphattr::geom::RectF;
//! use graphattr::scene::{GraphDocument, GraphScene, RecordingPainter, Scene};
//!
//! let doc: GraphDocument = serde_json::from_str(
//!     r#"{ "nodes": [ { "id": "a", "pos": "0;0", "size": "20:10" } ] }"#,
//! ).unwrap();
//! let scene = GraphScene::from_document(&doc);
//! assert_eq!(scene.items_bounding_rect(), RectF::new(-10.5, -5.5, 21.0, 11.0));
//!
//! let mut painter = RecordingPainter::new();
//! scene.render(&mut painter, RectF::new(0.0, 0.0, 100.0, 100.0)).unwrap();
//! assert!(painter.draw_count() > 0);
//! ```

mod graph;
mod painter;

pub use graph::{Edge, EdgeSpec, GraphDocument, GraphScene, Node, NodeShape, NodeSpec, ARROW_SIZE};
pub use painter::{Brush, PaintOp, Painter, Pen, RecordingPainter, RenderHint};

use crate::error::GraphAttrError;
use crate::geom::{PointF, RectF};

/// A collection of items in scene space that can render itself.
///
/// `Clone` lets callers prepare a modified copy (for example a cropped one)
/// without touching the scene they were given.
pub trait Scene: Clone {
    /// Union of the bounding rects of all items.
    fn items_bounding_rect(&self) -> RectF;

    /// The region of scene space that gets rendered.
    fn scene_rect(&self) -> RectF;

    fn set_scene_rect(&mut self, rect: RectF);

    /// Shrinks the scene rect to the items bounding rect.
    fn crop(&mut self) {
        let rect = self.items_bounding_rect();
        self.set_scene_rect(rect);
    }

    /// Draws the scene rect into `target`, scaled to fit and centred.
    fn render(&self, painter: &mut dyn Painter, target: RectF) -> Result<(), GraphAttrError>;
}

/// Uniform scale and offset mapping one rectangle into another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub scale: f64,
    /// Device position of the source rect's top-left corner.
    pub offset: PointF,
}

impl Fit {
    /// Fits `source` inside `target` keeping its aspect ratio, centred on
    /// the axis with spare room. Returns `None` if either rect is empty.
    pub fn keep_aspect(source: RectF, target: RectF) -> Option<Fit> {
        let source = source.normalized();
        let target = target.normalized();
        if source.is_empty() || target.is_empty() {
            return None;
        }

        let scale = (target.width / source.width).min(target.height / source.height);
        let offset = PointF::new(
            target.x + (target.width - source.width * scale) / 2.0,
            target.y + (target.height - source.height * scale) / 2.0,
        );
        Some(Fit { scale, offset })
    }

    /// Applies the mapping for `source` to the painter's transform.
    pub fn apply(&self, painter: &mut dyn Painter, source: RectF) {
        let source = source.normalized();
        painter.translate(self.offset.x, self.offset.y);
        painter.scale(self.scale, self.scale);
        painter.translate(-source.x, -source.y);
    }

    pub fn map(&self, source: RectF, p: PointF) -> PointF {
        let source = source.normalized();
        PointF::new(
            self.offset.x + (p.x - source.x) * self.scale,
            self.offset.y + (p.y - source.y) * self.scale,
        )
    }
}
