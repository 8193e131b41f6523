//! Node/edge scenes stored as JSON with codec-encoded attributes.
//!
//! The on-disk form ([`GraphDocument`]) keeps every attribute as text, the
//! way an editor persists item attributes:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "a", "pos": "0;0", "size": "40:30", "shape": "ellipse",
//!       "color": "#ffcc00", "stroke": "black", "stroke_style": "dashed",
//!       "label": "A", "ids": "core|io" }
//!   ],
//!   "edges": [ { "source": "a", "target": "b", "points": "50 -20 " } ]
//! }
//! ```
//!
//! [`GraphScene`] is the decoded form used for rendering. Decoding is
//! lenient; use [`validate_scene`](crate::validation::validate_scene) on the
//! document to find attributes that fell back to defaults.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::painter::{Brush, Painter, Pen};
use super::{Fit, Scene};
use crate::codec::{
    decode, encode, pen_style_to_text, points_from_string, points_to_string, text_to_pen_style,
    Color, FontDescriptor, IdentifierSet, PenStyle, Value, ValueType,
};
use crate::error::GraphAttrError;
use crate::geom::{
    bounding_rect, extend_line, first_bounded_intersection, LineF, PointF, PolygonF, RectF,
    SceneItem, SizeF,
};

/// Length of edge arrow heads, in scene units.
pub const ARROW_SIZE: f64 = 8.0;

const ELLIPSE_SEGMENTS: usize = 32;

fn default_size() -> String {
    "40:30".to_string()
}

fn default_shape() -> String {
    NodeShape::Rect.as_str().to_string()
}

fn default_fill() -> String {
    "white".to_string()
}

fn default_stroke() -> String {
    "black".to_string()
}

fn default_stroke_style() -> String {
    pen_style_to_text(PenStyle::SolidLine).to_string()
}

fn default_stroke_width() -> String {
    "1".to_string()
}

/// A node as stored in the JSON document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default = "default_size")]
    pub size: String,
    #[serde(default = "default_shape")]
    pub shape: String,
    #[serde(default = "default_fill")]
    pub color: String,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_style")]
    pub stroke_style: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub font: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ids: String,
}

/// An edge as stored in the JSON document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_style")]
    pub stroke_style: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: String,
    /// Intermediate control points, as a point sequence.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub points: String,
}

/// The serialized scene: item attributes as codec text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Explicit scene rect; the items bounding rect when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_rect: Option<RectF>,
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Reads a scene document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, GraphAttrError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| GraphAttrError::SceneJsonParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the document as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), GraphAttrError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| GraphAttrError::Io(std::io::Error::from(e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Outline shape of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeShape {
    #[default]
    Rect,
    Ellipse,
    Diamond,
    Triangle,
}

impl NodeShape {
    pub const ALL: [NodeShape; 4] = [
        NodeShape::Rect,
        NodeShape::Ellipse,
        NodeShape::Diamond,
        NodeShape::Triangle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeShape::Rect => "rect",
            NodeShape::Ellipse => "ellipse",
            NodeShape::Diamond => "diamond",
            NodeShape::Triangle => "triangle",
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeShape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| format!("unknown node shape '{s}' (supported: rect, ellipse, diamond, triangle)"))
    }
}

/// A decoded node. `pos` is the centre of the node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub pos: PointF,
    pub size: SizeF,
    pub shape: NodeShape,
    pub fill: Color,
    pub pen: Pen,
    pub label: String,
    pub font: FontDescriptor,
    pub ids: IdentifierSet,
}

impl Node {
    /// The node's shape rect in scene coordinates.
    pub fn rect(&self) -> RectF {
        RectF::new(
            self.pos.x - self.size.width / 2.0,
            self.pos.y - self.size.height / 2.0,
            self.size.width,
            self.size.height,
        )
    }

    /// The node's outline with the first vertex repeated at the end, so
    /// every side is an edge for intersection tests.
    pub fn outline(&self) -> PolygonF {
        let r = self.rect().normalized();
        let c = r.center();
        match self.shape {
            NodeShape::Rect => r.to_polygon(),
            NodeShape::Diamond => PolygonF::new(vec![
                PointF::new(c.x, r.top()),
                PointF::new(r.right(), c.y),
                PointF::new(c.x, r.bottom()),
                PointF::new(r.left(), c.y),
                PointF::new(c.x, r.top()),
            ]),
            NodeShape::Triangle => PolygonF::new(vec![
                PointF::new(c.x, r.top()),
                r.bottom_right(),
                PointF::new(r.left(), r.bottom()),
                PointF::new(c.x, r.top()),
            ]),
            NodeShape::Ellipse => {
                let (rx, ry) = (r.width / 2.0, r.height / 2.0);
                let points = (0..=ELLIPSE_SEGMENTS)
                    .map(|i| {
                        let angle = 2.0 * PI * (i % ELLIPSE_SEGMENTS) as f64 / ELLIPSE_SEGMENTS as f64;
                        PointF::new(c.x + rx * angle.cos(), c.y + ry * angle.sin())
                    })
                    .collect();
                PolygonF::new(points)
            }
        }
    }

    fn paint(&self, painter: &mut dyn Painter) {
        painter.set_pen(&self.pen);
        painter.set_brush(&Brush::solid(self.fill));
        match self.shape {
            NodeShape::Rect => painter.draw_rect(&self.rect()),
            NodeShape::Ellipse => painter.draw_ellipse(&self.rect()),
            NodeShape::Diamond | NodeShape::Triangle => painter.draw_polygon(&self.outline()),
        }

        if !self.label.is_empty() {
            // Rough Helvetica advance; good enough for centring.
            let width = self.label.chars().count() as f64 * self.font.point_size * 0.5;
            let origin = PointF::new(
                self.pos.x - width / 2.0,
                self.pos.y + self.font.point_size * 0.35,
            );
            painter.set_pen(&Pen::new(self.pen.color, 1.0, PenStyle::SolidLine));
            painter.draw_text(origin, &self.font, &self.label);
        }
    }
}

impl SceneItem for Node {
    fn scene_bounding_rect(&self) -> RectF {
        let r = self.rect().normalized();
        if self.pen.is_none() {
            r
        } else {
            r.adjusted(self.pen.width / 2.0)
        }
    }
}

/// A decoded edge between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub pen: Pen,
    pub points: Vec<PointF>,
}

/// Edge geometry after clipping against the end nodes.
#[derive(Clone, Debug, PartialEq)]
struct EdgePath {
    /// Polyline from the source outline to the base of the arrow head.
    line: Vec<PointF>,
    /// Closed arrow-head triangle, tip first.
    arrow: PolygonF,
}

/// A scene of nodes and directed edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphScene {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
    scene_rect: Option<RectF>,
}

impl GraphScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and decodes a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self, GraphAttrError> {
        let doc = GraphDocument::load(path)?;
        Ok(Self::from_document(&doc))
    }

    /// Decodes every attribute leniently; malformed text falls back to the
    /// attribute's zero value or default.
    pub fn from_document(doc: &GraphDocument) -> Self {
        let mut scene = GraphScene {
            scene_rect: doc.scene_rect,
            ..Self::default()
        };
        for raw in &doc.nodes {
            scene.add_node(decode_node(raw));
        }
        for raw in &doc.edges {
            scene.add_edge(decode_edge(raw));
        }
        debug!(
            nodes = scene.nodes.len(),
            edges = scene.edges.len(),
            "scene decoded"
        );
        scene
    }

    /// Encodes the scene back into its text-attribute form.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            scene_rect: self.scene_rect,
            nodes: self.nodes.iter().map(encode_node).collect(),
            edges: self.edges.iter().map(encode_edge).collect(),
        }
    }

    /// Adds a node. A node whose id is already taken is kept for drawing,
    /// but edges keep resolving to the first node with that id.
    pub fn add_node(&mut self, node: Node) {
        self.index
            .entry(node.id.clone())
            .or_insert(self.nodes.len());
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Polyline through the edge's end-node centres and control points,
    /// or `None` if an end node is missing.
    fn edge_polyline(&self, edge: &Edge) -> Option<(Vec<PointF>, &Node, &Node)> {
        let source = self.node(&edge.source)?;
        let target = self.node(&edge.target)?;
        let mut points = Vec::with_capacity(edge.points.len() + 2);
        points.push(source.pos);
        points.extend_from_slice(&edge.points);
        points.push(target.pos);
        Some((points, source, target))
    }

    /// Clips the edge at both node outlines and makes room for the arrow.
    ///
    /// Returns `None` for edges with a missing end node or a zero-length
    /// last segment, which have no direction to draw an arrow along.
    fn edge_path(&self, edge: &Edge) -> Option<EdgePath> {
        let (mut points, source, target) = self.edge_polyline(edge)?;
        let n = points.len();

        let first = LineF::new(points[0], points[1]);
        if let Some(hit) = first_bounded_intersection(&first, &source.outline()) {
            points[0] = hit;
        }

        let last = LineF::new(points[n - 2], points[n - 1]);
        let tip = first_bounded_intersection(&last, &target.outline()).unwrap_or(last.p2);
        let shaft = extend_line(&LineF::new(last.p1, tip), 0.0, ARROW_SIZE)?;

        let base = shaft.p2;
        let length = LineF::new(base, tip).length();
        let half = ARROW_SIZE / 2.0;
        let (nx, ny) = if length > 0.0 {
            ((base.y - tip.y) / length * half, (tip.x - base.x) / length * half)
        } else {
            (0.0, 0.0)
        };
        let arrow = PolygonF::new(vec![
            tip,
            PointF::new(base.x + nx, base.y + ny),
            PointF::new(base.x - nx, base.y - ny),
            tip,
        ]);

        points[n - 1] = base;
        Some(EdgePath {
            line: points,
            arrow,
        })
    }

    fn edge_rect(&self, edge: &Edge) -> RectF {
        let Some((points, _, _)) = self.edge_polyline(edge) else {
            return RectF::default();
        };
        let (min_x, max_x) = minmax(points.iter().map(|p| p.x));
        let (min_y, max_y) = minmax(points.iter().map(|p| p.y));
        RectF::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    fn paint_edge(&self, painter: &mut dyn Painter, edge: &Edge) {
        let Some(path) = self.edge_path(edge) else {
            debug!(
                source = %edge.source,
                target = %edge.target,
                "skipping edge without drawable geometry"
            );
            return;
        };
        painter.set_pen(&edge.pen);
        painter.set_brush(&Brush::none());
        painter.draw_polyline(&path.line);

        let mut head_pen = edge.pen.clone();
        head_pen.style = PenStyle::SolidLine;
        painter.set_pen(&head_pen);
        painter.set_brush(&Brush::solid(edge.pen.color));
        painter.draw_polygon(&path.arrow);
    }
}

impl Scene for GraphScene {
    fn items_bounding_rect(&self) -> RectF {
        let nodes = bounding_rect(&self.nodes);
        self.edges
            .iter()
            .fold(nodes, |acc, edge| acc.united(&self.edge_rect(edge)))
    }

    fn scene_rect(&self) -> RectF {
        self.scene_rect
            .unwrap_or_else(|| self.items_bounding_rect())
    }

    fn set_scene_rect(&mut self, rect: RectF) {
        self.scene_rect = Some(rect);
    }

    fn render(&self, painter: &mut dyn Painter, target: RectF) -> Result<(), GraphAttrError> {
        let source = self.scene_rect();
        if !source.is_finite() {
            return Err(GraphAttrError::DegenerateScene(format!(
                "scene rect {source:?} is not finite"
            )));
        }
        let Some(fit) = Fit::keep_aspect(source, target) else {
            debug!(?source, ?target, "empty scene or target, nothing to render");
            return Ok(());
        };

        painter.save();
        fit.apply(painter, source);
        for edge in &self.edges {
            if self.node(&edge.source).is_none() || self.node(&edge.target).is_none() {
                warn!(
                    source = %edge.source,
                    target = %edge.target,
                    "edge references a missing node"
                );
                continue;
            }
            self.paint_edge(painter, edge);
        }
        for node in &self.nodes {
            node.paint(painter);
        }
        painter.restore();
        Ok(())
    }
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn decode_pen(color: &str, style: &str, width: &str) -> Pen {
    Pen::new(
        decode(color, ValueType::Color).to_color(),
        decode(width, ValueType::Double).to_f64(),
        text_to_pen_style(style, PenStyle::SolidLine),
    )
}

fn decode_node(raw: &NodeSpec) -> Node {
    let shape = raw.shape.parse().unwrap_or_else(|err: String| {
        debug!(id = %raw.id, "{err}, drawing as rect");
        NodeShape::Rect
    });
    let font = if raw.font.is_empty() {
        FontDescriptor::default()
    } else {
        decode(&raw.font, ValueType::Font).to_font()
    };
    Node {
        id: raw.id.clone(),
        pos: decode(&raw.pos, ValueType::PointF).to_point_f(),
        size: decode(&raw.size, ValueType::SizeF).to_size_f(),
        shape,
        fill: decode(&raw.color, ValueType::Color).to_color(),
        pen: decode_pen(&raw.stroke, &raw.stroke_style, &raw.stroke_width),
        label: raw.label.clone(),
        font,
        ids: if raw.ids.is_empty() {
            IdentifierSet::new()
        } else {
            decode(&raw.ids, ValueType::IdentifierSet).to_identifier_set()
        },
    }
}

fn decode_edge(raw: &EdgeSpec) -> Edge {
    Edge {
        source: raw.source.clone(),
        target: raw.target.clone(),
        pen: decode_pen(&raw.stroke, &raw.stroke_style, &raw.stroke_width),
        points: points_from_string(&raw.points),
    }
}

fn encode_node(node: &Node) -> NodeSpec {
    NodeSpec {
        id: node.id.clone(),
        pos: encode(&Value::PointF(node.pos), None),
        size: encode(&Value::SizeF(node.size), None),
        shape: node.shape.as_str().to_string(),
        color: encode(&Value::Color(node.fill), None),
        stroke: encode(&Value::Color(node.pen.color), None),
        stroke_style: pen_style_to_text(node.pen.style).to_string(),
        stroke_width: encode(&Value::Double(node.pen.width), None),
        label: node.label.clone(),
        font: if node.font == FontDescriptor::default() {
            String::new()
        } else {
            encode(&Value::Font(node.font.clone()), None)
        },
        ids: if node.ids.is_empty() {
            String::new()
        } else {
            encode(&Value::IdentifierSet(node.ids.clone()), None)
        },
    }
}

fn encode_edge(edge: &Edge) -> EdgeSpec {
    EdgeSpec {
        source: edge.source.clone(),
        target: edge.target.clone(),
        stroke: encode(&Value::Color(edge.pen.color), None),
        stroke_style: pen_style_to_text(edge.pen.style).to_string(),
        stroke_width: encode(&Value::Double(edge.pen.width), None),
        points: points_to_string(&edge.points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PaintOp, RecordingPainter};

    fn two_node_doc() -> GraphDocument {
        serde_json::from_str(
            r#"{
                "nodes": [
                    { "id": "a", "pos": "0;0", "size": "20:20" },
                    { "id": "b", "pos": "100;0", "size": "20:20", "shape": "diamond" }
                ],
                "edges": [ { "source": "a", "target": "b" } ]
            }"#,
        )
        .expect("valid scene json")
    }

    #[test]
    fn test_defaults_applied() {
        let scene = GraphScene::from_document(&two_node_doc());
        let a = scene.node("a").expect("node a");
        assert_eq!(a.shape, NodeShape::Rect);
        assert_eq!(a.fill, Color::rgb(255, 255, 255));
        assert_eq!(a.pen, Pen::default());
        assert_eq!(scene.node("b").map(|n| n.shape), Some(NodeShape::Diamond));
    }

    #[test]
    fn test_items_bounding_rect() {
        let scene = GraphScene::from_document(&two_node_doc());
        assert_eq!(
            scene.items_bounding_rect(),
            RectF::new(-10.5, -10.5, 121.0, 21.0)
        );
    }

    #[test]
    fn test_crop_sets_scene_rect() {
        let mut doc = two_node_doc();
        doc.scene_rect = Some(RectF::new(-500.0, -500.0, 1000.0, 1000.0));
        let mut scene = GraphScene::from_document(&doc);
        assert_eq!(scene.scene_rect().width, 1000.0);
        scene.crop();
        assert_eq!(scene.scene_rect(), scene.items_bounding_rect());
    }

    #[test]
    fn test_edge_clipped_at_outlines() {
        let scene = GraphScene::from_document(&two_node_doc());
        let path = scene.edge_path(&scene.edges()[0]).expect("edge path");
        // Leaves the rect at its right side and stops an arrow short of
        // the diamond's left corner.
        assert_eq!(path.line[0], PointF::new(10.0, 0.0));
        assert_eq!(path.line[1], PointF::new(90.0 - ARROW_SIZE, 0.0));
        assert_eq!(path.arrow.points()[0], PointF::new(90.0, 0.0));
    }

    #[test]
    fn test_edge_to_same_position_is_skipped() {
        let doc: GraphDocument = serde_json::from_str(
            r#"{
                "nodes": [ { "id": "a", "pos": "0;0" }, { "id": "b", "pos": "0;0" } ],
                "edges": [ { "source": "a", "target": "b" } ]
            }"#,
        )
        .expect("valid scene json");
        let scene = GraphScene::from_document(&doc);
        assert!(scene.edge_path(&scene.edges()[0]).is_none());

        let mut painter = RecordingPainter::new();
        scene
            .render(&mut painter, RectF::new(0.0, 0.0, 100.0, 100.0))
            .expect("render");
        assert!(!painter
            .ops
            .iter()
            .any(|op| matches!(op, PaintOp::Polyline(_))));
    }

    #[test]
    fn test_render_draws_edges_then_nodes() {
        let scene = GraphScene::from_document(&two_node_doc());
        let mut painter = RecordingPainter::new();
        scene
            .render(&mut painter, RectF::new(0.0, 0.0, 242.0, 42.0))
            .expect("render");

        assert_eq!(painter.ops.first(), Some(&PaintOp::Save));
        assert_eq!(painter.ops.last(), Some(&PaintOp::Restore));
        assert!(painter.ops.contains(&PaintOp::Scale(2.0, 2.0)));

        let draws: Vec<&PaintOp> = painter
            .ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    PaintOp::Polyline(_) | PaintOp::Polygon(_) | PaintOp::Rect(_)
                )
            })
            .collect();
        assert!(matches!(draws[0], PaintOp::Polyline(_)));
        assert!(matches!(draws[1], PaintOp::Polygon(_)));
        assert!(matches!(draws[2], PaintOp::Rect(_)));
        assert!(matches!(draws[3], PaintOp::Polygon(_)));
    }

    #[test]
    fn test_missing_node_edge_is_skipped() {
        let mut doc = two_node_doc();
        doc.edges[0].target = "zzz".to_string();
        let scene = GraphScene::from_document(&doc);
        let mut painter = RecordingPainter::new();
        scene
            .render(&mut painter, RectF::new(0.0, 0.0, 100.0, 100.0))
            .expect("render");
        assert_eq!(painter.draw_count(), 2);
    }

    #[test]
    fn test_non_finite_scene_rect_is_rejected() {
        let mut scene = GraphScene::from_document(&two_node_doc());
        scene.set_scene_rect(RectF::new(f64::NAN, 0.0, 1.0, 1.0));
        let mut painter = RecordingPainter::new();
        let err = scene
            .render(&mut painter, RectF::new(0.0, 0.0, 1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, GraphAttrError::DegenerateScene(_)));
    }

    #[test]
    fn test_document_roundtrip_through_codec() {
        let doc: GraphDocument = serde_json::from_str(
            r##"{
                "nodes": [
                    { "id": "a", "pos": "1.5;-2", "size": "30:10", "shape": "triangle",
                      "color": "#80ff0000", "stroke": "#00ff00", "stroke_style": "dotted",
                      "stroke_width": "2", "label": "A", "ids": "x|y" }
                ],
                "edges": [ { "source": "a", "target": "a", "points": "5 6 " } ]
            }"##,
        )
        .expect("valid scene json");
        let scene = GraphScene::from_document(&doc);
        let encoded = scene.to_document();
        assert_eq!(encoded.nodes[0].pos, "1.5;-2");
        assert_eq!(encoded.nodes[0].color, "#80ff0000");
        assert_eq!(encoded.nodes[0].stroke_style, "dotted");
        assert_eq!(encoded.nodes[0].ids, "x|y");
        assert_eq!(encoded.edges[0].points, "5 6 ");
        assert_eq!(GraphScene::from_document(&encoded), scene);
    }

    #[test]
    fn test_unknown_shape_falls_back_to_rect() {
        let mut doc = two_node_doc();
        doc.nodes[0].shape = "hexagon".to_string();
        let scene = GraphScene::from_document(&doc);
        assert_eq!(scene.nodes()[0].shape, NodeShape::Rect);
    }
}
