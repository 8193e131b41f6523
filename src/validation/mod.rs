//! Scene validation for graphattr.
//!
//! Scene attributes decode leniently, so a typo in a color or a size
//! silently becomes a default when the scene is drawn. This module checks
//! the text form of a scene document with the strict decoders, looking for:
//! - Structural integrity (unique node ids, valid edge references)
//! - Geometric validity (positions, sizes, control points, edge direction)
//! - Appearance attributes (shapes, pen styles, colors, fonts, identifiers)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use std::collections::HashMap;

use crate::codec::{
    decode, decode_strict, pen_style_to_text, points_from_string_strict, vis_from_string, PenStyle,
    ValueType, ID_SEPARATOR, PEN_STYLES,
};
use crate::geom::{PointF, SizeF};
use crate::scene::{EdgeSpec, GraphDocument, NodeShape, NodeSpec};

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a scene document and returns a report of all issues found.
///
/// This function performs comprehensive validation including:
/// - Checking for empty and duplicate node ids
/// - Verifying that edges reference existing nodes
/// - Validating node positions and sizes, and edge control points
/// - Flagging edges whose last segment has no direction
/// - Checking shape names, pen style names, colors, widths and fonts
///
/// With `strict` set, every warning is reported as an error.
pub fn validate_scene(doc: &GraphDocument, opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Some(rect) = doc.scene_rect {
        if !rect.is_finite() || rect.is_empty() {
            report.add(ValidationIssue::error(
                IssueCode::InvalidSceneRect,
                format!("Scene rect {:?} must be finite with positive extents", rect),
                IssueContext::Scene,
            ));
        }
    }

    let positions = validate_nodes(doc, &mut report);
    validate_edges(doc, &positions, &mut report);

    if opts.strict {
        for issue in &mut report.issues {
            issue.severity = Severity::Error;
        }
    }

    report
}

/// Validates all nodes and returns the decoded centre of each first-seen id.
fn validate_nodes<'a>(
    doc: &'a GraphDocument,
    report: &mut ValidationReport,
) -> HashMap<&'a str, PointF> {
    let mut positions: HashMap<&str, PointF> = HashMap::new();
    let mut first_index: HashMap<&str, usize> = HashMap::new();

    for (index, node) in doc.nodes.iter().enumerate() {
        let context = || IssueContext::Node {
            index,
            id: node.id.clone(),
        };

        // Check identity. An empty id still names a node that edges can
        // reference, matching how the scene resolves it.
        if node.id.is_empty() {
            report.add(ValidationIssue::error(
                IssueCode::EmptyNodeId,
                "Empty node id",
                context(),
            ));
        }
        if let Some(first) = first_index.get(node.id.as_str()) {
            report.add(ValidationIssue::error(
                IssueCode::DuplicateNodeId,
                format!(
                    "Duplicate node id '{}' (first seen at index {})",
                    node.id, first
                ),
                context(),
            ));
        } else {
            first_index.insert(node.id.as_str(), index);
            positions.insert(node.id.as_str(), decode(&node.pos, ValueType::PointF).to_point_f());
        }

        if node.id.as_bytes().contains(&ID_SEPARATOR) {
            report.add(ValidationIssue::warning(
                IssueCode::IdContainsSeparator,
                format!(
                    "Node id '{}' contains '|' and cannot be stored in an identifier set",
                    node.id
                ),
                context(),
            ));
        }

        check_node_geometry(node, report, &context);
        check_node_appearance(node, report, &context);
    }

    positions
}

fn check_node_geometry(
    node: &NodeSpec,
    report: &mut ValidationReport,
    context: &dyn Fn() -> IssueContext,
) {
    // An empty position means the origin.
    if !node.pos.is_empty() {
        match decode_strict(&node.pos, ValueType::PointF) {
            Ok(value) if value.to_point_f().is_finite() => {}
            Ok(_) => report.add(ValidationIssue::error(
                IssueCode::InvalidNodePosition,
                format!("Non-finite position '{}'", node.pos),
                context(),
            )),
            Err(err) => report.add(ValidationIssue::error(
                IssueCode::InvalidNodePosition,
                err.to_string(),
                context(),
            )),
        }
    }

    match decode_strict(&node.size, ValueType::SizeF) {
        Ok(value) => {
            let SizeF { width, height } = value.to_size_f();
            if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
                report.add(ValidationIssue::error(
                    IssueCode::InvalidNodeSize,
                    format!(
                        "Invalid size {}x{} (must be finite and positive)",
                        width, height
                    ),
                    context(),
                ));
            }
        }
        Err(err) => report.add(ValidationIssue::error(
            IssueCode::InvalidNodeSize,
            err.to_string(),
            context(),
        )),
    }
}

fn check_node_appearance(
    node: &NodeSpec,
    report: &mut ValidationReport,
    context: &dyn Fn() -> IssueContext,
) {
    if let Err(message) = node.shape.parse::<NodeShape>() {
        report.add(ValidationIssue::warning(
            IssueCode::UnknownShape,
            format!("{message}; drawn as rect"),
            context(),
        ));
    }

    check_color(&node.color, "Fill", report, context);
    check_pen(&node.stroke, &node.stroke_style, &node.stroke_width, report, context);

    if !node.font.is_empty() {
        if let Err(err) = decode_strict(&node.font, ValueType::Font) {
            report.add(ValidationIssue::warning(
                IssueCode::InvalidFont,
                err.to_string(),
                context(),
            ));
        }
    }

    if !node.ids.is_empty() && vis_from_string(&node.ids).contains(b"") {
        report.add(ValidationIssue::warning(
            IssueCode::EmptyIdentifier,
            format!("Identifier set '{}' contains an empty identifier", node.ids),
            context(),
        ));
    }
}

fn check_color(
    text: &str,
    what: &str,
    report: &mut ValidationReport,
    context: &dyn Fn() -> IssueContext,
) {
    if decode_strict(text, ValueType::Color).is_err() {
        report.add(ValidationIssue::warning(
            IssueCode::InvalidColor,
            format!("{} color '{}' is not a recognized color", what, text),
            context(),
        ));
    }
}

fn check_pen(
    color: &str,
    style: &str,
    width: &str,
    report: &mut ValidationReport,
    context: &dyn Fn() -> IssueContext,
) {
    check_color(color, "Stroke", report, context);

    if !PEN_STYLES.iter().any(|(name, _)| *name == style) {
        let names: Vec<&str> = PEN_STYLES.iter().map(|(name, _)| *name).collect();
        report.add(ValidationIssue::warning(
            IssueCode::UnknownPenStyle,
            format!(
                "Unknown pen style '{}' (supported: {}); drawn as {}",
                style,
                names.join(", "),
                pen_style_to_text(PenStyle::SolidLine)
            ),
            context(),
        ));
    }

    match decode_strict(width, ValueType::Double) {
        Ok(value) if value.to_f64().is_finite() && value.to_f64() >= 0.0 => {}
        Ok(value) => report.add(ValidationIssue::warning(
            IssueCode::InvalidStrokeWidth,
            format!("Stroke width {} must be finite and non-negative", value.to_f64()),
            context(),
        )),
        Err(err) => report.add(ValidationIssue::warning(
            IssueCode::InvalidStrokeWidth,
            err.to_string(),
            context(),
        )),
    }
}

/// Validates all edges against the node positions.
fn validate_edges(
    doc: &GraphDocument,
    positions: &HashMap<&str, PointF>,
    report: &mut ValidationReport,
) {
    for (index, edge) in doc.edges.iter().enumerate() {
        let context = || IssueContext::Edge {
            index,
            source: edge.source.clone(),
            target: edge.target.clone(),
        };

        // Check node references
        let mut resolved = true;
        for (role, id) in [("source", &edge.source), ("target", &edge.target)] {
            if !positions.contains_key(id.as_str()) {
                resolved = false;
                report.add(ValidationIssue::error(
                    IssueCode::MissingNodeRef,
                    format!("References non-existent {} node '{}'", role, id),
                    context(),
                ));
            }
        }

        check_pen(&edge.stroke, &edge.stroke_style, &edge.stroke_width, report, &context);

        let points = match points_from_string_strict(&edge.points) {
            Ok(points) => points,
            Err(err) => {
                report.add(ValidationIssue::error(
                    IssueCode::InvalidPointList,
                    err.to_string(),
                    context(),
                ));
                continue; // Skip the direction check if the control points are invalid
            }
        };

        if resolved {
            check_edge_direction(edge, &points, positions, report, &context);
        }
    }
}

fn check_edge_direction(
    edge: &EdgeSpec,
    points: &[PointF],
    positions: &HashMap<&str, PointF>,
    report: &mut ValidationReport,
    context: &dyn Fn() -> IssueContext,
) {
    let (Some(source), Some(target)) = (
        positions.get(edge.source.as_str()),
        positions.get(edge.target.as_str()),
    ) else {
        return;
    };

    let from = points.last().copied().unwrap_or(*source);
    if from == *target {
        report.add(ValidationIssue::warning(
            IssueCode::ZeroLengthEdge,
            format!(
                "Last segment ends where it starts ({};{}); the edge is not drawn",
                target.x, target.y
            ),
            context(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_doc() -> GraphDocument {
        serde_json::from_str(
            r##"{
                "nodes": [
                    { "id": "a", "pos": "0;0", "size": "40:30", "color": "#ffcc00" },
                    { "id": "b", "pos": "100;0", "size": "40:30", "shape": "ellipse",
                      "stroke_style": "dashed", "ids": "x|y" }
                ],
                "edges": [ { "source": "a", "target": "b", "points": "50 20 " } ]
            }"##,
        )
        .expect("valid scene json")
    }

    fn validate(doc: &GraphDocument) -> ValidationReport {
        validate_scene(doc, &ValidateOptions::default())
    }

    #[test]
    fn test_valid_scene() {
        let report = validate(&valid_doc());
        assert!(
            report.is_clean(),
            "Expected no issues, got: {:?}",
            report.issues
        );
    }

    #[test]
    fn test_duplicate_node_id() {
        let mut doc = valid_doc();
        doc.nodes.push(doc.nodes[0].clone());

        let report = validate(&doc);
        assert_eq!(report.error_count(), 1);
        assert!(report.has(IssueCode::DuplicateNodeId));
    }

    #[test]
    fn test_missing_node_ref() {
        let mut doc = valid_doc();
        doc.edges[0].target = "nope".to_string();

        let report = validate(&doc);
        assert_eq!(report.error_count(), 1);
        assert!(report.has(IssueCode::MissingNodeRef));
    }

    #[test]
    fn test_edge_to_empty_id_resolves_like_scene() {
        use crate::scene::GraphScene;

        let mut doc = valid_doc();
        doc.nodes[1].id = String::new();
        doc.edges[0].target = String::new();

        let report = validate(&doc);
        assert!(report.has(IssueCode::EmptyNodeId));
        assert!(!report.has(IssueCode::MissingNodeRef));
        assert_eq!(report.error_count(), 1);
        assert!(GraphScene::from_document(&doc).node("").is_some());
    }

    #[test]
    fn test_invalid_node_size() {
        let mut doc = valid_doc();
        doc.nodes[0].size = "0:30".to_string();
        doc.nodes[1].size = "wide".to_string();

        let report = validate(&doc);
        assert_eq!(report.error_count(), 2);
        assert!(report.has(IssueCode::InvalidNodeSize));
    }

    #[test]
    fn test_non_finite_position() {
        let mut doc = valid_doc();
        doc.nodes[0].pos = "NaN;0".to_string();

        let report = validate(&doc);
        assert!(report.has(IssueCode::InvalidNodePosition));
    }

    #[test]
    fn test_appearance_warnings() {
        let mut doc = valid_doc();
        doc.nodes[0].color = "#12345".to_string();
        doc.nodes[0].stroke_style = "Dashed".to_string();
        doc.nodes[0].shape = "hexagon".to_string();
        doc.nodes[1].stroke_width = "-1".to_string();
        doc.nodes[1].font = "Arial".to_string();

        let report = validate(&doc);
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 5);
        for code in [
            IssueCode::InvalidColor,
            IssueCode::UnknownPenStyle,
            IssueCode::UnknownShape,
            IssueCode::InvalidStrokeWidth,
            IssueCode::InvalidFont,
        ] {
            assert!(report.has(code), "missing {:?}", code);
        }
    }

    #[test]
    fn test_identifier_checks() {
        let mut doc = valid_doc();
        doc.nodes[0].id = "a|b".to_string();
        doc.nodes[1].ids = "x||y".to_string();
        doc.edges.clear();

        let report = validate(&doc);
        assert!(report.has(IssueCode::IdContainsSeparator));
        assert!(report.has(IssueCode::EmptyIdentifier));
    }

    #[test]
    fn test_invalid_point_list() {
        let mut doc = valid_doc();
        doc.edges[0].points = "1 2 3".to_string();

        let report = validate(&doc);
        assert_eq!(report.error_count(), 1);
        assert!(report.has(IssueCode::InvalidPointList));
    }

    #[test]
    fn test_zero_length_edge() {
        let mut doc = valid_doc();
        doc.edges[0].points = "100 0".to_string();

        let report = validate(&doc);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has(IssueCode::ZeroLengthEdge));
    }

    #[test]
    fn test_strict_promotes_warnings() {
        let mut doc = valid_doc();
        doc.nodes[0].color = "not-a-color".to_string();

        let lenient = validate(&doc);
        assert!(lenient.is_ok());

        let strict = validate_scene(&doc, &ValidateOptions { strict: true });
        assert_eq!(strict.error_count(), 1);
        assert!(!strict.is_ok());
    }

    #[test]
    fn test_invalid_scene_rect() {
        let mut doc = valid_doc();
        doc.scene_rect = Some(crate::geom::RectF::new(0.0, 0.0, 0.0, 10.0));

        let report = validate(&doc);
        assert!(report.has(IssueCode::InvalidSceneRect));
    }
}
