//! The typed attribute value and its type tag.

use std::fmt;
use std::str::FromStr;

use super::color::Color;
use super::font::FontDescriptor;
use super::ids::{byte_array_set_to_string_list, vis_from_string, vis_to_string, IdentifierSet};
use crate::geom::{Point, PointF, Size, SizeF};

/// The tag selecting which text grammar applies to a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Double,
    Float,
    Bool,
    String,
    StringList,
    Point,
    PointF,
    Size,
    SizeF,
    Color,
    Font,
    IdentifierSet,
}

impl ValueType {
    /// All tags, in declaration order.
    pub const ALL: [ValueType; 13] = [
        ValueType::Int,
        ValueType::Double,
        ValueType::Float,
        ValueType::Bool,
        ValueType::String,
        ValueType::StringList,
        ValueType::Point,
        ValueType::PointF,
        ValueType::Size,
        ValueType::SizeF,
        ValueType::Color,
        ValueType::Font,
        ValueType::IdentifierSet,
    ];

    /// The tag's short name, as accepted by [`ValueType::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::Double => "double",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
            ValueType::String => "string",
            ValueType::StringList => "string-list",
            ValueType::Point => "point",
            ValueType::PointF => "pointf",
            ValueType::Size => "size",
            ValueType::SizeF => "sizef",
            ValueType::Color => "color",
            ValueType::Font => "font",
            ValueType::IdentifierSet => "id-set",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ValueType::ALL.iter().map(|t| t.as_str()).collect();
                format!("unknown value type '{s}' (supported: {})", names.join(", "))
            })
    }
}

/// A typed attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Double(f64),
    Float(f32),
    Bool(bool),
    String(String),
    StringList(Vec<String>),
    Point(Point),
    PointF(PointF),
    Size(Size),
    SizeF(SizeF),
    Color(Color),
    Font(FontDescriptor),
    IdentifierSet(IdentifierSet),
}

impl Value {
    /// The runtime tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Double(_) => ValueType::Double,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
            Value::String(_) => ValueType::String,
            Value::StringList(_) => ValueType::StringList,
            Value::Point(_) => ValueType::Point,
            Value::PointF(_) => ValueType::PointF,
            Value::Size(_) => ValueType::Size,
            Value::SizeF(_) => ValueType::SizeF,
            Value::Color(_) => ValueType::Color,
            Value::Font(_) => ValueType::Font,
            Value::IdentifierSet(_) => ValueType::IdentifierSet,
        }
    }

    /// The value lenient decoding falls back to for `tag`.
    pub fn zero(tag: ValueType) -> Value {
        match tag {
            ValueType::Int => Value::Int(0),
            ValueType::Double => Value::Double(0.0),
            ValueType::Float => Value::Float(0.0),
            ValueType::Bool => Value::Bool(false),
            ValueType::String => Value::String(String::new()),
            ValueType::StringList => Value::StringList(Vec::new()),
            ValueType::Point => Value::Point(Point::default()),
            ValueType::PointF => Value::PointF(PointF::default()),
            ValueType::Size => Value::Size(Size::default()),
            ValueType::SizeF => Value::SizeF(SizeF::default()),
            ValueType::Color => Value::Color(Color::invalid()),
            ValueType::Font => Value::Font(FontDescriptor::default()),
            ValueType::IdentifierSet => Value::IdentifierSet(IdentifierSet::new()),
        }
    }

    // Coercions used when a value is encoded under a different tag. They
    // never fail; values that have no sensible conversion become zero.

    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Int(v) => *v as f64,
            Value::Double(v) => *v,
            Value::Float(v) => *v as f64,
            Value::Bool(v) => f64::from(u8::from(*v)),
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    pub fn to_i32(&self) -> i32 {
        match self {
            Value::Int(v) => *v,
            Value::Double(_) | Value::Float(_) => self.to_f64().round() as i32,
            Value::Bool(v) => i32::from(*v),
            Value::String(s) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn to_bool(&self) -> bool {
        match self {
            Value::Bool(v) => *v,
            Value::Int(v) => *v != 0,
            Value::Double(_) | Value::Float(_) => self.to_f64() != 0.0,
            Value::String(s) => {
                let lower = s.to_lowercase();
                !(lower.is_empty() || lower == "0" || lower == "false")
            }
            _ => false,
        }
    }

    pub fn to_point_f(&self) -> PointF {
        match self {
            Value::PointF(p) => *p,
            Value::Point(p) => PointF::from(*p),
            _ => PointF::default(),
        }
    }

    pub fn to_point(&self) -> Point {
        match self {
            Value::Point(p) => *p,
            Value::PointF(p) => p.to_point(),
            _ => Point::default(),
        }
    }

    pub fn to_size_f(&self) -> SizeF {
        match self {
            Value::SizeF(s) => *s,
            Value::Size(s) => SizeF::from(*s),
            _ => SizeF::default(),
        }
    }

    pub fn to_size(&self) -> Size {
        match self {
            Value::Size(s) => *s,
            Value::SizeF(s) => Size::new(s.width.round() as i32, s.height.round() as i32),
            _ => Size::default(),
        }
    }

    pub fn to_string_list(&self) -> Vec<String> {
        match self {
            Value::StringList(list) => list.clone(),
            Value::String(s) => vec![s.clone()],
            Value::IdentifierSet(ids) => byte_array_set_to_string_list(ids),
            _ => Vec::new(),
        }
    }

    pub fn to_color(&self) -> Color {
        match self {
            Value::Color(c) => *c,
            Value::String(s) => Color::parse(s).unwrap_or_else(Color::invalid),
            _ => Color::invalid(),
        }
    }

    pub fn to_font(&self) -> FontDescriptor {
        match self {
            Value::Font(f) => f.clone(),
            Value::String(s) => FontDescriptor::parse(s).unwrap_or_default(),
            _ => FontDescriptor::default(),
        }
    }

    pub fn to_identifier_set(&self) -> IdentifierSet {
        match self {
            Value::IdentifierSet(ids) => ids.clone(),
            Value::StringList(list) => list.iter().map(String::as_str).collect(),
            Value::String(s) => vis_from_string(s),
            _ => IdentifierSet::new(),
        }
    }

    /// Generic stringification, used for tags without a dedicated grammar.
    pub fn to_text(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Double(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Bool(v) => v.to_string(),
            Value::String(s) => s.clone(),
            Value::StringList(list) => list.join("|"),
            Value::Point(p) => format!("{};{}", p.x, p.y),
            Value::PointF(p) => format!("{};{}", p.x, p.y),
            Value::Size(s) => format!("{}:{}", s.width, s.height),
            Value::SizeF(s) => format!("{}:{}", s.width, s.height),
            Value::Color(c) => c.name(),
            Value::Font(f) => f.to_string(),
            Value::IdentifierSet(ids) => vis_to_string(ids),
        }
    }
}

/// Formats the canonical text form (same as [`encode`](super::encode) with
/// the value's own tag).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::text::encode(self, None))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::StringList(v)
    }
}

impl From<PointF> for Value {
    fn from(v: PointF) -> Self {
        Value::PointF(v)
    }
}

impl From<SizeF> for Value {
    fn from(v: SizeF) -> Self {
        Value::SizeF(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Value::Color(v)
    }
}
