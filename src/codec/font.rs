//! Font descriptors and their comma-separated text form.
//!
//! The grammar is
//! `family,pointSize[,pixelSize[,styleHint[,weight[,style[,underline[,strikeOut[,fixedPitch[,rawMode]]]]]]]]`.
//! Fields after the point size are optional; newer writers may append
//! further fields, which are ignored. Flags are written as `0`/`1`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::number::format_shortest;

/// Slant of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(FontStyle::Normal),
            1 => Some(FontStyle::Italic),
            2 => Some(FontStyle::Oblique),
            _ => None,
        }
    }

    fn code(self) -> i32 {
        match self {
            FontStyle::Normal => 0,
            FontStyle::Italic => 1,
            FontStyle::Oblique => 2,
        }
    }
}

/// A platform-neutral font description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    /// Size in points; `-1` when only a pixel size is set.
    pub point_size: f64,
    /// Size in pixels; `-1` when only a point size is set.
    pub pixel_size: i32,
    pub style_hint: i32,
    /// CSS-like weight, 400 is normal and 700 is bold.
    pub weight: i32,
    pub style: FontStyle,
    pub underline: bool,
    pub strike_out: bool,
    pub fixed_pitch: bool,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_string(),
            point_size: 12.0,
            pixel_size: -1,
            style_hint: 5,
            weight: 400,
            style: FontStyle::Normal,
            underline: false,
            strike_out: false,
            fixed_pitch: false,
        }
    }
}

impl FontDescriptor {
    /// Creates a descriptor for `family` at `point_size` with default style.
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            point_size,
            ..Default::default()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }

    /// Parses the comma-separated text form.
    ///
    /// Missing optional fields keep their defaults; the error carries a
    /// description of the first malformed field.
    pub fn parse(text: &str) -> Result<FontDescriptor, String> {
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() < 2 {
            return Err(format!(
                "expected at least 2 comma-separated fields, found {}",
                fields.len()
            ));
        }

        let family = fields[0].trim();
        if family.is_empty() {
            return Err("empty font family".to_string());
        }

        let mut font = FontDescriptor {
            family: family.to_string(),
            ..Default::default()
        };

        font.point_size = parse_field(fields[1], "point size")?;

        if let Some(raw) = fields.get(2) {
            font.pixel_size = parse_field(raw, "pixel size")?;
        }
        if let Some(raw) = fields.get(3) {
            font.style_hint = parse_field(raw, "style hint")?;
        }
        if let Some(raw) = fields.get(4) {
            font.weight = parse_field(raw, "weight")?;
        }
        if let Some(raw) = fields.get(5) {
            let code: i32 = parse_field(raw, "style")?;
            font.style = FontStyle::from_code(code)
                .ok_or_else(|| format!("invalid style '{}'; expected 0, 1 or 2", raw.trim()))?;
        }
        if let Some(raw) = fields.get(6) {
            font.underline = parse_flag(raw, "underline")?;
        }
        if let Some(raw) = fields.get(7) {
            font.strike_out = parse_flag(raw, "strike-out")?;
        }
        if let Some(raw) = fields.get(8) {
            font.fixed_pitch = parse_flag(raw, "fixed pitch")?;
        }

        Ok(font)
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},0",
            self.family,
            format_shortest(self.point_size),
            self.pixel_size,
            self.style_hint,
            self.weight,
            self.style.code(),
            self.underline as i32,
            self.strike_out as i32,
            self.fixed_pitch as i32,
        )
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("invalid {name} '{}'", raw.trim()))
}

fn parse_flag(raw: &str, name: &str) -> Result<bool, String> {
    match raw.trim() {
        "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        other => Err(format!("invalid {name} flag '{other}'; expected 0 or 1")),
    }
}
