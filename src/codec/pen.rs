//! Line styles and their fixed names.

use serde::{Deserialize, Serialize};

/// Stroke pattern of a line.
///
/// The discriminants are the raw style codes stored by older documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PenStyle {
    NoPen = 0,
    #[default]
    SolidLine = 1,
    DashLine = 2,
    DotLine = 3,
    DashDotLine = 4,
    DashDotDotLine = 5,
    CustomDashLine = 6,
}

impl PenStyle {
    /// Maps a raw style code to a style.
    pub fn from_raw(code: i32) -> Option<PenStyle> {
        match code {
            0 => Some(PenStyle::NoPen),
            1 => Some(PenStyle::SolidLine),
            2 => Some(PenStyle::DashLine),
            3 => Some(PenStyle::DotLine),
            4 => Some(PenStyle::DashDotLine),
            5 => Some(PenStyle::DashDotDotLine),
            6 => Some(PenStyle::CustomDashLine),
            _ => None,
        }
    }

    #[inline]
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Dash pattern in units of the pen width, `None` for a plain stroke.
    pub fn dash_pattern(self) -> Option<&'static [f64]> {
        match self {
            PenStyle::DashLine => Some(&[4.0, 2.0]),
            PenStyle::DotLine => Some(&[1.0, 2.0]),
            PenStyle::DashDotLine => Some(&[4.0, 2.0, 1.0, 2.0]),
            PenStyle::DashDotDotLine => Some(&[4.0, 2.0, 1.0, 2.0, 1.0, 2.0]),
            PenStyle::NoPen | PenStyle::SolidLine | PenStyle::CustomDashLine => None,
        }
    }
}

/// The canonical style names. Matching is exact and case-sensitive.
pub const PEN_STYLES: [(&str, PenStyle); 6] = [
    ("none", PenStyle::NoPen),
    ("solid", PenStyle::SolidLine),
    ("dashed", PenStyle::DashLine),
    ("dotted", PenStyle::DotLine),
    ("dashdot", PenStyle::DashDotLine),
    ("dashdotdot", PenStyle::DashDotDotLine),
];

/// Looks up a style by name, falling back to `default` for unknown names.
pub fn text_to_pen_style(text: &str, default: PenStyle) -> PenStyle {
    PEN_STYLES
        .iter()
        .find(|(name, _)| *name == text)
        .map(|(_, style)| *style)
        .unwrap_or(default)
}

/// Returns the canonical name of `style`; styles without one map to `"none"`.
pub fn pen_style_to_text(style: PenStyle) -> &'static str {
    PEN_STYLES
        .iter()
        .find(|(_, s)| *s == style)
        .map(|(name, _)| *name)
        .unwrap_or("none")
}

/// Like [`pen_style_to_text`], for raw style codes.
pub fn pen_style_code_to_text(code: i32) -> &'static str {
    PenStyle::from_raw(code)
        .map(pen_style_to_text)
        .unwrap_or("none")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for (name, _) in PEN_STYLES {
            assert_eq!(pen_style_to_text(text_to_pen_style(name, PenStyle::SolidLine)), name);
        }
    }

    #[test]
    fn test_unknown_name_returns_default() {
        assert_eq!(text_to_pen_style("garbage", PenStyle::DotLine), PenStyle::DotLine);
        assert_eq!(text_to_pen_style("Solid", PenStyle::NoPen), PenStyle::NoPen);
        assert_eq!(text_to_pen_style("", PenStyle::DashLine), PenStyle::DashLine);
    }

    #[test]
    fn test_unnamed_style_prints_none() {
        assert_eq!(pen_style_to_text(PenStyle::CustomDashLine), "none");
        assert_eq!(pen_style_code_to_text(42), "none");
        assert_eq!(pen_style_code_to_text(-1), "none");
        assert_eq!(pen_style_code_to_text(2), "dashed");
    }

    #[test]
    fn test_raw_codes() {
        for code in 0..=6 {
            assert_eq!(PenStyle::from_raw(code).map(PenStyle::raw), Some(code));
        }
        assert_eq!(PenStyle::from_raw(7), None);
    }
}
