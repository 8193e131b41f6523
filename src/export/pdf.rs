//! A single-page PDF painter built on `lopdf` content operations.

use std::collections::{BTreeMap, HashSet};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use tracing::{debug, warn};

use crate::codec::{Color, FontDescriptor, FontStyle};
use crate::error::GraphAttrError;
use crate::geom::{LineF, PointF, PolygonF, RectF};
use crate::scene::{Brush, Painter, Pen, RenderHint};

/// Control-point distance for approximating a quarter ellipse with a cubic.
const KAPPA: f64 = 0.552_284_749_8;

fn real(v: f64) -> Object {
    Object::from(v as f32)
}

/// A [`Painter`] that records PDF content operations for one page.
///
/// Device space has its origin at the top-left corner of the page with y
/// pointing down, like scene space; the flip into PDF user space is the
/// first operation of the content stream.
pub struct PdfSurface {
    width: f64,
    height: f64,
    operations: Vec<Operation>,
    hints: HashSet<RenderHint>,
    pen: Pen,
    brush: Brush,
    state_stack: Vec<(Pen, Brush)>,
    /// Base-14 font name to resource name.
    fonts: BTreeMap<&'static str, String>,
}

impl PdfSurface {
    /// Starts an empty page of the given size in points.
    pub fn new(width: f64, height: f64) -> Self {
        let mut surface = Self {
            width,
            height,
            operations: Vec::new(),
            hints: HashSet::new(),
            pen: Pen::default(),
            brush: Brush::none(),
            state_stack: Vec::new(),
            fonts: BTreeMap::new(),
        };
        surface.op("cm", vec![1.into(), 0.into(), 0.into(), (-1).into(), 0.into(), real(height)]);
        surface.apply_pen();
        surface
    }

    pub fn page_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn has_render_hint(&self, hint: RenderHint) -> bool {
        self.hints.contains(&hint)
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn move_to(&mut self, p: PointF) {
        self.op("m", vec![real(p.x), real(p.y)]);
    }

    fn line_to(&mut self, p: PointF) {
        self.op("l", vec![real(p.x), real(p.y)]);
    }

    fn apply_pen(&mut self) {
        let (r, g, b) = self.pen.color.to_unit_rgb();
        self.op("RG", vec![r.into(), g.into(), b.into()]);
        self.op("w", vec![real(self.pen.width)]);

        let width = if self.pen.width > 0.0 { self.pen.width } else { 1.0 };
        let dashes: Vec<Object> = self
            .pen
            .style
            .dash_pattern()
            .unwrap_or(&[])
            .iter()
            .map(|d| real(d * width))
            .collect();
        self.op("d", vec![Object::Array(dashes), 0.into()]);
    }

    /// Ends the current path with the operator matching pen and brush.
    fn paint_path(&mut self, closed: bool) {
        let stroke = !self.pen.is_none();
        let fill = closed && self.brush.color().is_some();
        let operator = match (stroke, fill) {
            (true, true) => "B",
            (true, false) => "S",
            (false, true) => "f",
            (false, false) => "n",
        };
        self.op(operator, vec![]);
    }

    fn font_resource(&mut self, font: &FontDescriptor) -> String {
        let base = base14_font(font);
        let next = format!("F{}", self.fonts.len() + 1);
        self.fonts.entry(base).or_insert(next).clone()
    }

    /// Builds the PDF document and serializes it.
    pub fn finish(self) -> Result<Vec<u8>, GraphAttrError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for (base, resource) in &self.fonts {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *base,
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(resource.as_str(), font_id);
        }

        let mut resources = dictionary! {
            "Font" => font_dict,
        };
        let mut operations = self.operations;
        if self.hints.contains(&RenderHint::Antialiasing) {
            // Stroke adjustment stands in for antialiasing.
            resources.set(
                "ExtGState",
                dictionary! { "GS0" => dictionary! { "Type" => "ExtGState", "SA" => true } },
            );
            operations.insert(0, Operation::new("gs", vec![Object::Name(b"GS0".to_vec())]));
        }
        let resources_id = document.add_object(resources);

        let content = Content { operations };
        let content_id = document.add_object(Stream::new(Dictionary::new(), content.encode()?));

        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), real(self.width), real(self.height)],
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
            }),
        );
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        debug!(
            bytes = bytes.len(),
            fonts = self.fonts.len(),
            "PDF page serialized"
        );
        Ok(bytes)
    }
}

impl Painter for PdfSurface {
    fn set_render_hint(&mut self, hint: RenderHint, on: bool) {
        if on {
            self.hints.insert(hint);
        } else {
            self.hints.remove(&hint);
        }
    }

    fn set_pen(&mut self, pen: &Pen) {
        self.pen = pen.clone();
        self.apply_pen();
    }

    fn set_brush(&mut self, brush: &Brush) {
        self.brush = *brush;
        if let Some(color) = brush.color() {
            let (r, g, b) = color.to_unit_rgb();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
        }
    }

    fn draw_line(&mut self, line: &LineF) {
        self.move_to(line.p1);
        self.line_to(line.p2);
        self.paint_path(false);
    }

    fn draw_polyline(&mut self, points: &[PointF]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
        self.paint_path(false);
    }

    fn draw_polygon(&mut self, polygon: &PolygonF) {
        let Some((first, rest)) = polygon.points().split_first() else {
            return;
        };
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
        self.op("h", vec![]);
        self.paint_path(true);
    }

    fn draw_rect(&mut self, rect: &RectF) {
        self.op(
            "re",
            vec![real(rect.x), real(rect.y), real(rect.width), real(rect.height)],
        );
        self.paint_path(true);
    }

    fn draw_ellipse(&mut self, rect: &RectF) {
        let r = rect.normalized();
        let c = r.center();
        let (rx, ry) = (r.width / 2.0, r.height / 2.0);
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        self.move_to(PointF::new(c.x + rx, c.y));
        let quarters = [
            [(c.x + rx, c.y + ky), (c.x + kx, c.y + ry), (c.x, c.y + ry)],
            [(c.x - kx, c.y + ry), (c.x - rx, c.y + ky), (c.x - rx, c.y)],
            [(c.x - rx, c.y - ky), (c.x - kx, c.y - ry), (c.x, c.y - ry)],
            [(c.x + kx, c.y - ry), (c.x + rx, c.y - ky), (c.x + rx, c.y)],
        ];
        for quarter in quarters {
            let operands = quarter
                .iter()
                .flat_map(|(x, y)| [real(*x), real(*y)])
                .collect();
            self.op("c", operands);
        }
        self.op("h", vec![]);
        self.paint_path(true);
    }

    fn draw_text(&mut self, origin: PointF, font: &FontDescriptor, text: &str) {
        if text.is_empty() || self.pen.is_none() {
            return;
        }
        let resource = self.font_resource(font);
        let color: Color = self.pen.color;
        let (r, g, b) = color.to_unit_rgb();

        self.op("q", vec![]);
        self.op("rg", vec![r.into(), g.into(), b.into()]);
        self.op("BT", vec![]);
        self.op(
            "Tf",
            vec![Object::Name(resource.into_bytes()), real(font.point_size)],
        );
        // Flip glyphs back upright inside the y-down device space.
        self.op(
            "Tm",
            vec![1.into(), 0.into(), 0.into(), (-1).into(), real(origin.x), real(origin.y)],
        );
        self.op("Tj", vec![Object::string_literal(win_ansi_bytes(text))]);
        self.op("ET", vec![]);
        self.op("Q", vec![]);
    }

    fn save(&mut self) {
        self.state_stack.push((self.pen.clone(), self.brush));
        self.op("q", vec![]);
    }

    fn restore(&mut self) {
        if let Some((pen, brush)) = self.state_stack.pop() {
            self.pen = pen;
            self.brush = brush;
            self.op("Q", vec![]);
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.op("cm", vec![1.into(), 0.into(), 0.into(), 1.into(), real(dx), real(dy)]);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.op("cm", vec![real(sx), 0.into(), 0.into(), real(sy), 0.into(), 0.into()]);
    }
}

/// Characters in 0x80..=0x9F of WinAnsiEncoding; the rest of the upper
/// half matches Latin-1.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];

/// Transcodes label text for the standard fonts, which use WinAnsiEncoding.
///
/// Characters outside the encoding are drawn as `?`.
fn win_ansi_bytes(text: &str) -> Vec<u8> {
    let mut unmapped = 0usize;
    let bytes = text
        .chars()
        .map(|c| match c {
            ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
            _ => WIN_ANSI_HIGH
                .iter()
                .find(|(ch, _)| *ch == c)
                .map(|(_, byte)| *byte)
                .unwrap_or_else(|| {
                    unmapped += 1;
                    b'?'
                }),
        })
        .collect();
    if unmapped > 0 {
        warn!(text, unmapped, "label has characters the standard fonts cannot draw");
    }
    bytes
}

/// Maps a font descriptor onto one of the standard PDF fonts.
fn base14_font(font: &FontDescriptor) -> &'static str {
    let family = font.family.to_lowercase();
    let slanted = font.style != FontStyle::Normal;
    let bold = font.is_bold();

    if font.fixed_pitch || family.contains("courier") || family.contains("mono") {
        match (bold, slanted) {
            (false, false) => "Courier",
            (true, false) => "Courier-Bold",
            (false, true) => "Courier-Oblique",
            (true, true) => "Courier-BoldOblique",
        }
    } else if family.contains("times") || (family.contains("serif") && !family.contains("sans")) {
        match (bold, slanted) {
            (false, false) => "Times-Roman",
            (true, false) => "Times-Bold",
            (false, true) => "Times-Italic",
            (true, true) => "Times-BoldItalic",
        }
    } else {
        match (bold, slanted) {
            (false, false) => "Helvetica",
            (true, false) => "Helvetica-Bold",
            (false, true) => "Helvetica-Oblique",
            (true, true) => "Helvetica-BoldOblique",
        }
    }
}
