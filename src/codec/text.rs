//! Conversion between [`Value`]s and their canonical text.
//!
//! | Tag | Text grammar |
//! |---|---|
//! | point / pointf | `x;y` |
//! | size / sizef | `w:h` |
//! | bool | `true` / `false` |
//! | double / float | fixed 4 decimals |
//! | string-list | `\|`-joined |
//! | color | `#rrggbb` / `#aarrggbb` / color keyword |
//! | font | comma-separated descriptor |
//! | id-set | `\|`-joined identifiers |

use tracing::debug;

use super::color::Color;
use super::font::FontDescriptor;
use super::ids::{vis_from_string, vis_to_string};
use super::number::{format_fixed4, format_shortest};
use super::value::{Value, ValueType};
use crate::error::GraphAttrError;
use crate::geom::{Point, PointF, Size, SizeF};

/// Decodes `text` as a value of type `tag`, never failing.
///
/// Malformed input degrades to the tag's zero value (see [`Value::zero`]):
/// `0` for numbers, `false` for booleans, the invalid color, the default
/// font. Booleans are true only for a case-insensitive `"true"`.
pub fn decode(text: &str, tag: ValueType) -> Value {
    decode_strict(text, tag).unwrap_or_else(|err| {
        debug!(%err, "lenient decode fell back to the zero value");
        Value::zero(tag)
    })
}

/// Decodes `text` as a value of type `tag`, reporting malformed input.
pub fn decode_strict(text: &str, tag: ValueType) -> Result<Value, GraphAttrError> {
    let invalid = |message: String| GraphAttrError::ValueParse {
        tag,
        text: text.to_string(),
        message,
    };

    match tag {
        ValueType::StringList => Ok(Value::StringList(
            text.split('|')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        )),

        ValueType::Int => text
            .trim()
            .parse::<i32>()
            .map(Value::Int)
            .map_err(|_| invalid("expected a base-10 integer".to_string())),

        ValueType::Double => text
            .trim()
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| invalid("expected a floating-point number".to_string())),

        ValueType::Float => text
            .trim()
            .parse::<f32>()
            .map(Value::Float)
            .map_err(|_| invalid("expected a floating-point number".to_string())),

        ValueType::Bool => match text.to_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(invalid("expected 'true' or 'false'".to_string())),
        },

        ValueType::Color => Color::parse(text)
            .map(Value::Color)
            .ok_or_else(|| invalid("expected #RGB, #RRGGBB, #AARRGGBB or a color name".to_string())),

        ValueType::Font => FontDescriptor::parse(text).map(Value::Font).map_err(invalid),

        ValueType::Point => {
            let (x, y) = split_pair(text, ';').map_err(&invalid)?;
            Ok(Value::Point(Point::new(
                parse_component(x, "x").map_err(&invalid)?,
                parse_component(y, "y").map_err(&invalid)?,
            )))
        }

        ValueType::PointF => {
            let (x, y) = split_pair(text, ';').map_err(&invalid)?;
            Ok(Value::PointF(PointF::new(
                parse_component(x, "x").map_err(&invalid)?,
                parse_component(y, "y").map_err(&invalid)?,
            )))
        }

        ValueType::Size => {
            let (w, h) = split_pair(text, ':').map_err(&invalid)?;
            Ok(Value::Size(Size::new(
                parse_component(w, "width").map_err(&invalid)?,
                parse_component(h, "height").map_err(&invalid)?,
            )))
        }

        ValueType::SizeF => {
            let (w, h) = split_pair(text, ':').map_err(&invalid)?;
            Ok(Value::SizeF(SizeF::new(
                parse_component(w, "width").map_err(&invalid)?,
                parse_component(h, "height").map_err(&invalid)?,
            )))
        }

        ValueType::IdentifierSet => Ok(Value::IdentifierSet(vis_from_string(text))),

        ValueType::String => Ok(Value::String(text.to_string())),
    }
}

/// Encodes `value` as text.
///
/// The grammar is chosen by `tag`, or by the value's own type when `tag` is
/// `None`. An explicit tag converts the value first, so
/// `encode(&Value::Int(2), Some(ValueType::Double))` gives `"2.0000"`.
pub fn encode(value: &Value, tag: Option<ValueType>) -> String {
    let tag = tag.unwrap_or_else(|| value.value_type());

    match tag {
        ValueType::Point => {
            let p = value.to_point();
            format!("{};{}", p.x, p.y)
        }
        ValueType::PointF => {
            let p = value.to_point_f();
            format!("{};{}", format_shortest(p.x), format_shortest(p.y))
        }
        ValueType::Size => {
            let s = value.to_size();
            format!("{}:{}", s.width, s.height)
        }
        ValueType::SizeF => {
            let s = value.to_size_f();
            format!("{}:{}", format_shortest(s.width), format_shortest(s.height))
        }
        ValueType::Bool => {
            if value.to_bool() {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        ValueType::Double => format_fixed4(value.to_f64()),
        ValueType::Float => format!("{:.4}", value.to_f64() as f32),
        ValueType::StringList => value.to_string_list().join("|"),
        ValueType::Color => value.to_color().name(),
        ValueType::Font => value.to_font().to_string(),
        ValueType::IdentifierSet => vis_to_string(&value.to_identifier_set()),
        ValueType::Int => value.to_i32().to_string(),
        ValueType::String => value.to_text(),
    }
}

fn split_pair(text: &str, separator: char) -> Result<(&str, &str), String> {
    text.split_once(separator)
        .ok_or_else(|| format!("expected two components separated by '{separator}'"))
}

fn parse_component<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("invalid {name} component '{}'", raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::IdentifierSet;

    #[test]
    fn test_decode_string_list_drops_empty_fragments() {
        assert_eq!(
            decode("a||b|", ValueType::StringList),
            Value::StringList(vec!["a".into(), "b".into()])
        );
        assert_eq!(decode("", ValueType::StringList), Value::StringList(vec![]));
        assert_eq!(
            decode("b|a|b", ValueType::StringList),
            Value::StringList(vec!["b".into(), "a".into(), "b".into()])
        );
    }

    #[test]
    fn test_decode_numbers_fall_back_to_zero() {
        assert_eq!(decode("42", ValueType::Int), Value::Int(42));
        assert_eq!(decode(" -7 ", ValueType::Int), Value::Int(-7));
        assert_eq!(decode("4x", ValueType::Int), Value::Int(0));
        assert_eq!(decode("99999999999", ValueType::Int), Value::Int(0));
        assert_eq!(decode("2.5", ValueType::Double), Value::Double(2.5));
        assert_eq!(decode("abc", ValueType::Double), Value::Double(0.0));
        assert_eq!(decode("1.25", ValueType::Float), Value::Float(1.25));
        assert_eq!(decode("", ValueType::Float), Value::Float(0.0));
    }

    #[test]
    fn test_decode_bool() {
        assert_eq!(decode("true", ValueType::Bool), Value::Bool(true));
        assert_eq!(decode("TrUe", ValueType::Bool), Value::Bool(true));
        assert_eq!(decode("false", ValueType::Bool), Value::Bool(false));
        assert_eq!(decode("1", ValueType::Bool), Value::Bool(false));
        assert_eq!(decode("garbage", ValueType::Bool), Value::Bool(false));
    }

    #[test]
    fn test_decode_color() {
        assert_eq!(
            decode("#ff8000", ValueType::Color),
            Value::Color(Color::rgb(255, 128, 0))
        );
        assert_eq!(decode("nope", ValueType::Color), Value::Color(Color::invalid()));
    }

    #[test]
    fn test_decode_font() {
        let Value::Font(font) = decode("Arial,14", ValueType::Font) else {
            panic!("expected a font");
        };
        assert_eq!(font.family, "Arial");
        assert_eq!(font.point_size, 14.0);
        assert_eq!(decode("", ValueType::Font), Value::Font(FontDescriptor::default()));
    }

    #[test]
    fn test_decode_string_passthrough() {
        assert_eq!(
            decode("  keep me  ", ValueType::String),
            Value::String("  keep me  ".into())
        );
    }

    #[test]
    fn test_decode_point_and_size() {
        assert_eq!(
            decode("1.5;-2", ValueType::PointF),
            Value::PointF(PointF::new(1.5, -2.0))
        );
        assert_eq!(decode("3;4", ValueType::Point), Value::Point(Point::new(3, 4)));
        assert_eq!(decode("10:20", ValueType::Size), Value::Size(Size::new(10, 20)));
        assert_eq!(
            decode("nonsense", ValueType::SizeF),
            Value::SizeF(SizeF::default())
        );
    }

    #[test]
    fn test_decode_strict_reports_tag_and_text() {
        let err = decode_strict("4x", ValueType::Int).unwrap_err();
        match err {
            GraphAttrError::ValueParse { tag, text, .. } => {
                assert_eq!(tag, ValueType::Int);
                assert_eq!(text, "4x");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(decode_strict("maybe", ValueType::Bool).is_err());
        assert!(decode_strict("#12", ValueType::Color).is_err());
        assert!(decode_strict("1;", ValueType::PointF).is_err());
    }

    #[test]
    fn test_encode_by_runtime_type() {
        assert_eq!(encode(&Value::PointF(PointF::new(1.5, 2.0)), None), "1.5;2");
        assert_eq!(encode(&Value::Point(Point::new(-3, 4)), None), "-3;4");
        assert_eq!(encode(&Value::SizeF(SizeF::new(10.0, 0.25)), None), "10:0.25");
        assert_eq!(encode(&Value::Size(Size::new(640, 480)), None), "640:480");
        assert_eq!(encode(&Value::Bool(true), None), "true");
        assert_eq!(encode(&Value::Bool(false), None), "false");
        assert_eq!(encode(&Value::Double(3.14159), None), "3.1416");
        assert_eq!(encode(&Value::Float(0.5), None), "0.5000");
        assert_eq!(
            encode(&Value::StringList(vec!["a".into(), "b".into()]), None),
            "a|b"
        );
        assert_eq!(encode(&Value::Int(-12), None), "-12");
        assert_eq!(encode(&Value::Color(Color::rgb(0, 0, 255)), None), "#0000ff");
    }

    #[test]
    fn test_encode_with_explicit_tag() {
        assert_eq!(encode(&Value::Int(2), Some(ValueType::Double)), "2.0000");
        assert_eq!(encode(&Value::Int(0), Some(ValueType::Bool)), "false");
        assert_eq!(encode(&Value::from("x"), Some(ValueType::StringList)), "x");
        assert_eq!(
            encode(&Value::Point(Point::new(1, 2)), Some(ValueType::PointF)),
            "1;2"
        );
        assert_eq!(encode(&Value::Double(7.0), Some(ValueType::String)), "7");
    }

    #[test]
    fn test_encode_identifier_set() {
        let ids: IdentifierSet = ["b", "a"].into_iter().collect();
        assert_eq!(encode(&Value::IdentifierSet(ids), None), "a|b");
    }

    #[test]
    fn test_roundtrip_of_encoder_output() {
        let values = vec![
            Value::Int(17),
            Value::Double(-0.125),
            Value::Float(3.5),
            Value::Bool(true),
            Value::String("hello".into()),
            Value::StringList(vec!["x".into(), "y".into()]),
            Value::Point(Point::new(5, -6)),
            Value::PointF(PointF::new(0.5, 1e-3)),
            Value::Size(Size::new(1, 2)),
            Value::SizeF(SizeF::new(2.5, 8.0)),
            Value::Color(Color::rgba(1, 2, 3, 4)),
            Value::Font(FontDescriptor::new("Mono", 9.5)),
            Value::IdentifierSet(["n1", "n2"].into_iter().collect()),
            Value::PointF(PointF::new(0.1234567, 1234567.0)),
            Value::SizeF(SizeF::new(12.3456789, 1e-7)),
            Value::Font(FontDescriptor::new("Arial", 10.1234567)),
            Value::Color(Color::invalid()),
        ];

        for value in values {
            let text = encode(&value, None);
            assert_eq!(decode(&text, value.value_type()), value, "text: {text}");
        }
    }
}
