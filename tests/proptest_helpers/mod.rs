#![allow(dead_code)]

use graphattr::codec::Color;
use graphattr::geom::{PointF, RectF};
use graphattr::scene::{EdgeSpec, GraphDocument, NodeSpec};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Tolerance for coordinates that went through a single float computation.
pub const EPS_GEOM: f64 = 1e-6;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn approx_point(a: PointF, b: PointF, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Finite coordinates in a range editors actually place items in.
pub fn arb_coord() -> BoxedStrategy<f64> {
    (-10_000.0f64..10_000.0).boxed()
}

pub fn arb_point() -> BoxedStrategy<PointF> {
    (arb_coord(), arb_coord())
        .prop_map(|(x, y)| PointF::new(x, y))
        .boxed()
}

/// Rectangles with strictly positive extents.
pub fn arb_rect() -> BoxedStrategy<RectF> {
    (arb_coord(), arb_coord(), 1.0f64..2_000.0, 1.0f64..2_000.0)
        .prop_map(|(x, y, w, h)| RectF::new(x, y, w, h))
        .boxed()
}

pub fn arb_color() -> BoxedStrategy<Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
        .boxed()
}

/// Attribute text: mostly printable, sometimes close to a real grammar.
pub fn arb_attribute_text() -> BoxedStrategy<String> {
    prop_oneof![
        "\\PC{0,24}",
        "-?[0-9]{1,4}(\\.[0-9]{1,6})?[;:]-?[0-9]{1,4}(\\.[0-9]{1,6})?",
        "#[0-9a-fA-F]{3,9}",
        "[a-z]{1,6}(\\|[a-z]{0,6}){0,4}",
    ]
    .boxed()
}

fn node_id_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}")
        .expect("valid node id regex")
        .boxed()
}

/// Well-formed documents: unique ids, positive sizes, edges between
/// existing nodes.
pub fn arb_document(max_nodes: usize, max_edges: usize) -> BoxedStrategy<GraphDocument> {
    assert!(max_nodes > 0, "max_nodes must be > 0");

    proptest::collection::btree_set(node_id_strategy(), 1..=max_nodes)
        .prop_flat_map(move |ids| {
            let ids: Vec<String> = ids.into_iter().collect();
            let count = ids.len();
            (
                Just(ids),
                proptest::collection::vec(
                    (arb_point(), 1u32..400, 1u32..400, 0usize..4),
                    count..=count,
                ),
                proptest::collection::vec((any::<usize>(), any::<usize>()), 0..=max_edges),
            )
        })
        .prop_map(|(ids, geometry, edge_seeds)| build_document(ids, geometry, edge_seeds))
        .boxed()
}

fn build_document(
    ids: Vec<String>,
    geometry: Vec<(PointF, u32, u32, usize)>,
    edge_seeds: Vec<(usize, usize)>,
) -> GraphDocument {
    const SHAPES: [&str; 4] = ["rect", "ellipse", "diamond", "triangle"];

    let nodes: Vec<NodeSpec> = ids
        .iter()
        .zip(geometry)
        .map(|(id, (pos, w, h, shape))| {
            let mut node: NodeSpec =
                serde_json::from_str(&format!(r#"{{ "id": "{id}" }}"#)).expect("minimal node");
            node.pos = format!("{};{}", pos.x.round(), pos.y.round());
            node.size = format!("{w}:{h}");
            node.shape = SHAPES[shape].to_string();
            node
        })
        .collect();

    let edges = edge_seeds
        .into_iter()
        .map(|(s, t)| EdgeSpec {
            source: ids[s % ids.len()].clone(),
            target: ids[t % ids.len()].clone(),
            stroke: "black".to_string(),
            stroke_style: "solid".to_string(),
            stroke_width: "1".to_string(),
            points: String::new(),
        })
        .collect();

    GraphDocument {
        scene_rect: None,
        nodes,
        edges,
    }
}
