//! Paper sizes, margins and orientation.

use std::fmt;

use crate::geom::{RectF, SizeF};

/// Tolerance, in points, when matching a size against the standard table.
const SIZE_MATCH_TOLERANCE: f64 = 3.0;

/// Standard paper sizes in portrait orientation, in PostScript points.
pub const STANDARD_PAGE_SIZES: [(&str, f64, f64); 8] = [
    ("A3", 842.0, 1191.0),
    ("A4", 595.0, 842.0),
    ("A5", 420.0, 595.0),
    ("B5", 499.0, 709.0),
    ("Letter", 612.0, 792.0),
    ("Legal", 612.0, 1008.0),
    ("Tabloid", 792.0, 1224.0),
    ("Ledger", 1224.0, 792.0),
];

/// A named paper size in points, always stored in portrait form as given.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSize {
    pub name: String,
    pub width_pt: f64,
    pub height_pt: f64,
}

impl PageSize {
    /// Resolves a size and name into a page size.
    ///
    /// A size within a few points of a standard size snaps to it. A
    /// non-empty `name` is kept as given; an empty one takes the standard
    /// name or a generated custom name. Returns `None` for an empty or
    /// non-finite size.
    pub fn new(size: SizeF, name: &str) -> Option<PageSize> {
        if size.is_empty() || !size.width.is_finite() || !size.height.is_finite() {
            return None;
        }

        let standard = STANDARD_PAGE_SIZES.iter().find(|(_, w, h)| {
            (size.width - w).abs() <= SIZE_MATCH_TOLERANCE
                && (size.height - h).abs() <= SIZE_MATCH_TOLERANCE
        });

        let (width_pt, height_pt) = match standard {
            Some((_, w, h)) => (*w, *h),
            None => (size.width, size.height),
        };
        let name = match (name.trim(), standard) {
            ("", Some((std_name, _, _))) => std_name.to_string(),
            ("", None) => format!("Custom ({width_pt}pt x {height_pt}pt)"),
            (given, _) => given.to_string(),
        };

        Some(PageSize {
            name,
            width_pt,
            height_pt,
        })
    }

    /// Looks up a standard size by name, ignoring case.
    pub fn standard(name: &str) -> Option<PageSize> {
        STANDARD_PAGE_SIZES
            .iter()
            .find(|(n, _, _)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(n, w, h)| PageSize {
                name: n.to_string(),
                width_pt: *w,
                height_pt: *h,
            })
    }

    pub fn a4() -> PageSize {
        PageSize {
            name: "A4".to_string(),
            width_pt: 595.0,
            height_pt: 842.0,
        }
    }

    pub fn size(&self) -> SizeF {
        SizeF::new(self.width_pt, self.height_pt)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::a4()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{} pt)", self.name, self.width_pt, self.height_pt)
    }
}

/// Page margins in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Everything that determines the output page geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageSetup {
    pub page_size: PageSize,
    pub margins: Margins,
    pub orientation: Orientation,
}

impl PageSetup {
    /// The full page in device space, after orientation is applied.
    pub fn page_rect(&self) -> RectF {
        let size = match self.orientation {
            Orientation::Portrait => self.page_size.size(),
            Orientation::Landscape => self.page_size.size().transposed(),
        };
        RectF::new(0.0, 0.0, size.width, size.height)
    }

    /// The printable area: the page rect minus the margins.
    pub fn paint_rect(&self) -> RectF {
        let page = self.page_rect();
        let m = self.margins;
        RectF::new(
            m.left,
            m.top,
            page.width - m.left - m.right,
            page.height - m.top - m.bottom,
        )
    }
}
