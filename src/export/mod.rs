//! Single-page PDF export of scenes.
//!
//! [`PdfExporter`] owns the page setup (paper size, margins, orientation),
//! persists it in the `PDFExport` settings group, and renders a cropped
//! copy of a scene into the printable area of one PDF page.
//!
//! # Example
//!
//! ```
//! use graphattr::export::{Orientation, PdfExporter};
//! use graphattr::scene::{GraphDocument, GraphScene};
//!
//! let doc: GraphDocument = serde_json::from_str(
//!     r#"{ "nodes": [ { "id": "a", "pos": "0;0", "size": "80:20" } ] }"#,
//! ).unwrap();
//! let scene = GraphScene::from_document(&doc);
//!
//! let mut exporter = PdfExporter::new();
//! assert_eq!(exporter.choose_orientation(&scene), Orientation::Landscape);
//! let pdf = exporter.export_to_bytes(&scene).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod page;
mod pdf;

pub use page::{Margins, Orientation, PageSetup, PageSize, STANDARD_PAGE_SIZES};
pub use pdf::PdfSurface;

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::codec::{Value, ValueType};
use crate::error::GraphAttrError;
use crate::geom::Size;
use crate::scene::{Painter, RenderHint, Scene};
use crate::settings::Settings;

/// Settings group holding the page setup.
pub const SETTINGS_GROUP: &str = "PDFExport";

const KEY_PAPER_SIZE: &str = "PaperSize";
const KEY_PAPER_NAME: &str = "PaperName";
const KEY_MARGIN_LEFT: &str = "MarginLeft";
const KEY_MARGIN_RIGHT: &str = "MarginRight";
const KEY_MARGIN_TOP: &str = "MarginTop";
const KEY_MARGIN_BOTTOM: &str = "MarginBottom";

/// Exports scenes to PDF files using its own page setup.
#[derive(Clone, Debug, Default)]
pub struct PdfExporter {
    setup: PageSetup,
}

impl PdfExporter {
    /// A4 portrait with zero margins.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setup(setup: PageSetup) -> Self {
        Self { setup }
    }

    pub fn page_setup(&self) -> &PageSetup {
        &self.setup
    }

    pub fn page_setup_mut(&mut self) -> &mut PageSetup {
        &mut self.setup
    }

    /// Loads the page setup from the `PDFExport` group.
    ///
    /// A missing or unusable `PaperSize` keeps the current paper. Missing
    /// margins read as zero; negative or non-finite margins are ignored
    /// and also read as zero.
    pub fn read_settings(&mut self, settings: &Settings) {
        let size = settings
            .typed_value(SETTINGS_GROUP, KEY_PAPER_SIZE, ValueType::Size)
            .map(|v| v.to_size_f());
        let name = settings
            .value(SETTINGS_GROUP, KEY_PAPER_NAME)
            .unwrap_or_default();

        match size.and_then(|s| PageSize::new(s, name)) {
            Some(page_size) => self.setup.page_size = page_size,
            None => debug!(
                paper = %self.setup.page_size,
                "no usable paper size in settings, keeping current"
            ),
        }

        let margin = |key: &str| {
            let value = settings
                .typed_value(SETTINGS_GROUP, key, ValueType::Double)
                .map(|v| v.to_f64())
                .unwrap_or(0.0);
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                warn!(key, value, "ignoring invalid margin");
                0.0
            }
        };
        self.setup.margins = Margins::new(
            margin(KEY_MARGIN_LEFT),
            margin(KEY_MARGIN_RIGHT),
            margin(KEY_MARGIN_TOP),
            margin(KEY_MARGIN_BOTTOM),
        );
    }

    /// Stores the page setup in the `PDFExport` group.
    ///
    /// The paper size is written in portrait points, independent of the
    /// current orientation.
    pub fn write_settings(&self, settings: &mut Settings) {
        let page = &self.setup.page_size;
        let size = Size::new(page.width_pt.round() as i32, page.height_pt.round() as i32);
        settings.set_typed_value(SETTINGS_GROUP, KEY_PAPER_SIZE, &Value::Size(size));
        settings.set_value(SETTINGS_GROUP, KEY_PAPER_NAME, page.name.clone());

        let m = self.setup.margins;
        for (key, value) in [
            (KEY_MARGIN_LEFT, m.left),
            (KEY_MARGIN_RIGHT, m.right),
            (KEY_MARGIN_TOP, m.top),
            (KEY_MARGIN_BOTTOM, m.bottom),
        ] {
            settings.set_typed_value(SETTINGS_GROUP, key, &Value::Double(value));
        }
    }

    /// Picks landscape for scenes wider than tall, portrait otherwise.
    pub fn choose_orientation<S: Scene>(&mut self, scene: &S) -> Orientation {
        let bbox = scene.items_bounding_rect();
        self.setup.orientation = if bbox.width > bbox.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        self.setup.orientation
    }

    /// Renders the scene into a PDF file at `path`.
    ///
    /// The scene itself is left untouched; a cropped copy is rendered.
    pub fn export_document<S: Scene>(&self, path: &Path, scene: &S) -> Result<(), GraphAttrError> {
        let bytes = self.export_to_bytes(scene)?;
        fs::write(path, &bytes)?;
        info!(
            path = %path.display(),
            bytes = bytes.len(),
            paper = %self.setup.page_size,
            orientation = %self.setup.orientation,
            "exported PDF"
        );
        Ok(())
    }

    /// Renders the scene into an in-memory PDF.
    pub fn export_to_bytes<S: Scene>(&self, scene: &S) -> Result<Vec<u8>, GraphAttrError> {
        let mut cropped = scene.clone();
        cropped.crop();

        let page = self.setup.page_rect();
        let target = self.setup.paint_rect();
        if target.is_empty() {
            return Err(GraphAttrError::DegenerateScene(format!(
                "margins leave no printable area on a {}x{} pt page",
                page.width, page.height
            )));
        }

        let mut surface = PdfSurface::new(page.width, page.height);
        surface.set_render_hint(RenderHint::Antialiasing, true);
        surface.set_render_hint(RenderHint::TextAntialiasing, true);
        cropped.render(&mut surface, target)?;
        surface.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::RectF;
    use crate::scene::{GraphDocument, GraphScene};

    fn scene(nodes: &str) -> GraphScene {
        let doc: GraphDocument =
            serde_json::from_str(&format!(r#"{{ "nodes": {nodes} }}"#)).expect("valid scene json");
        GraphScene::from_document(&doc)
    }

    #[test]
    fn test_defaults() {
        let exporter = PdfExporter::new();
        assert_eq!(exporter.page_setup().page_size, PageSize::a4());
        assert_eq!(exporter.page_setup().margins, Margins::default());
        assert_eq!(exporter.page_setup().orientation, Orientation::Portrait);
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut exporter = PdfExporter::new();
        exporter.page_setup_mut().page_size = PageSize::standard("Letter").expect("letter");
        exporter.page_setup_mut().margins = Margins::new(10.0, 12.5, 0.0, 7.25);

        let mut settings = Settings::new();
        exporter.write_settings(&mut settings);
        assert_eq!(settings.value(SETTINGS_GROUP, "PaperSize"), Some("612:792"));
        assert_eq!(settings.value(SETTINGS_GROUP, "PaperName"), Some("Letter"));
        assert_eq!(settings.value(SETTINGS_GROUP, "MarginRight"), Some("12.5000"));

        let mut restored = PdfExporter::new();
        restored.read_settings(&settings);
        assert_eq!(restored.page_setup(), exporter.page_setup());
    }

    #[test]
    fn test_read_settings_keeps_paper_without_size() {
        let mut settings = Settings::new();
        settings.set_value(SETTINGS_GROUP, "PaperName", "A3");
        settings.set_value(SETTINGS_GROUP, "MarginTop", "-5");

        let mut exporter = PdfExporter::new();
        exporter.read_settings(&settings);
        assert_eq!(exporter.page_setup().page_size, PageSize::a4());
        assert_eq!(exporter.page_setup().margins.top, 0.0);
    }

    #[test]
    fn test_choose_orientation() {
        let mut exporter = PdfExporter::new();
        let wide = scene(r#"[ { "id": "a", "pos": "0;0", "size": "100:10" } ]"#);
        let tall = scene(r#"[ { "id": "a", "pos": "0;0", "size": "10:100" } ]"#);
        let square = scene(r#"[ { "id": "a", "pos": "0;0", "size": "10:10" } ]"#);
        assert_eq!(exporter.choose_orientation(&wide), Orientation::Landscape);
        assert_eq!(exporter.choose_orientation(&tall), Orientation::Portrait);
        assert_eq!(exporter.choose_orientation(&square), Orientation::Portrait);
        assert_eq!(exporter.page_setup().orientation, Orientation::Portrait);
    }

    #[test]
    fn test_export_leaves_scene_uncropped() {
        let mut original = scene(r#"[ { "id": "a", "pos": "0;0", "size": "10:10" } ]"#);
        let wide = RectF::new(-1000.0, -1000.0, 2000.0, 2000.0);
        original.set_scene_rect(wide);

        let bytes = PdfExporter::new().export_to_bytes(&original).expect("export");
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(original.scene_rect(), wide);
    }

    #[test]
    fn test_export_rejects_oversized_margins() {
        let mut exporter = PdfExporter::new();
        exporter.page_setup_mut().margins = Margins::uniform(400.0);
        let err = exporter
            .export_to_bytes(&scene("[]"))
            .unwrap_err();
        assert!(matches!(err, GraphAttrError::DegenerateScene(_)));
    }

    #[test]
    fn test_export_empty_scene_gives_blank_page() {
        let bytes = PdfExporter::new()
            .export_to_bytes(&scene("[]"))
            .expect("export");
        let doc = lopdf::Document::load_mem(&bytes).expect("load");
        assert_eq!(doc.get_pages().len(), 1);
    }
}
