//! Text codecs for editor attributes.
//!
//! Attribute values (sizes, points, colors, fonts, flags, lists) are stored
//! as short human-readable strings. This module converts between those
//! strings and typed [`Value`]s.
//!
//! # Design Principles
//!
//! 1. **Lenient by Default**: [`decode`] never fails; malformed text
//!    degrades to the tag's zero value, because attribute text comes from
//!    hand-edited files and older writers.
//!
//! 2. **Opt-in Strictness**: [`decode_strict`] and
//!    [`points_from_string_strict`] accept the same grammar but return a
//!    [`GraphAttrError`](crate::GraphAttrError) describing the first problem.
//!
//! 3. **Stable Output**: [`encode`] output always decodes back to the same
//!    value under the same tag. Points, sizes and font sizes keep every
//!    digit they need; doubles and floats are written with four decimals,
//!    so only their encoded text is stable.
//!
//! # Example
//!
//! ```
//! use graphattr::codec::{decode, encode, Value, ValueType};
//!
//! let value = decode("0.333333", ValueType::Double);
//! assert_eq!(encode(&value, None), "0.3333");
//! assert_eq!(decode("TRUE", ValueType::Bool), Value::Bool(true));
//! ```

mod color;
mod font;
mod ids;
mod number;
mod pen;
mod points;
mod text;
mod value;

pub use color::Color;
pub use font::{FontDescriptor, FontStyle};
pub use ids::{
    byte_array_set_to_string_list, vis_from_string, vis_to_string, IdentifierSet, ID_SEPARATOR,
};
pub use number::{format_fixed4, format_g, format_natural, format_shortest};
pub use pen::{pen_style_code_to_text, pen_style_to_text, text_to_pen_style, PenStyle, PEN_STYLES};
pub use points::{points_from_string, points_from_string_strict, points_to_string};
pub use text::{decode, decode_strict, encode};
pub use value::{Value, ValueType};

/// Removes the last `.`-suffix from a file name.
///
/// Names without a `.` are returned unchanged; only the text after the
/// last `.` is removed (`"archive.tar.gz"` becomes `"archive.tar"`).
pub fn cut_last_suffix(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// Runs the lenient decoders on arbitrary text.
#[cfg(feature = "fuzzing")]
pub fn fuzz_decode_all(text: &str) {
    for tag in ValueType::ALL {
        let value = decode(text, tag);
        let _ = encode(&value, None);
    }
    let _ = points_from_string(text);
    let _ = points_from_string_strict(text);
    let _ = text_to_pen_style(text, PenStyle::SolidLine);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_last_suffix() {
        assert_eq!(cut_last_suffix("archive.tar.gz"), "archive.tar");
        assert_eq!(cut_last_suffix("noext"), "noext");
        assert_eq!(cut_last_suffix(".hidden"), "");
        assert_eq!(cut_last_suffix("trailing."), "trailing");
        assert_eq!(cut_last_suffix("dir.d/file"), "dir");
    }
}
