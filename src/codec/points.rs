//! Point sequences (polyline/path geometry) as whitespace-separated text.
//!
//! Each point is written as `"x y "` with single-precision values in natural
//! `%g` form, so the text always ends with a space when non-empty.

use tracing::debug;

use super::number::format_natural;
use crate::error::GraphAttrError;
use crate::geom::PointF;

/// Formats the points as `"x y "` pairs.
pub fn points_to_string(points: &[PointF]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    for p in points {
        out.push_str(&format_natural(p.x as f32 as f64));
        out.push(' ');
        out.push_str(&format_natural(p.y as f32 as f64));
        out.push(' ');
    }
    out
}

/// Reads `"x y"` pairs leniently.
///
/// Unparsable tokens read as 0, and an odd trailing token yields a point
/// with `y = 0`. Empty or whitespace-only text gives an empty list.
pub fn points_from_string(text: &str) -> Vec<PointF> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        debug!(
            tokens = tokens.len(),
            "odd token count in point list, last point gets y = 0"
        );
    }

    tokens
        .chunks(2)
        .map(|pair| {
            let x = lenient_f32(pair[0]);
            let y = pair.get(1).map(|t| lenient_f32(t)).unwrap_or(0.0);
            PointF::new(x as f64, y as f64)
        })
        .collect()
}

/// Reads `"x y"` pairs, rejecting malformed tokens and incomplete pairs.
pub fn points_from_string_strict(text: &str) -> Result<Vec<PointF>, GraphAttrError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let mut values = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        let value = token
            .parse::<f32>()
            .map_err(|_| GraphAttrError::PointListParse {
                index,
                message: format!("invalid coordinate '{token}'; expected floating-point number"),
            })?;
        values.push(value as f64);
    }

    if values.len() % 2 != 0 {
        return Err(GraphAttrError::PointListParse {
            index: values.len() - 1,
            message: "incomplete pair; expected an even number of coordinates".to_string(),
        });
    }

    Ok(values
        .chunks(2)
        .map(|pair| PointF::new(pair[0], pair[1]))
        .collect())
}

fn lenient_f32(token: &str) -> f32 {
    token.parse::<f32>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_string_has_trailing_space() {
        let pts = vec![PointF::new(1.0, 2.5), PointF::new(-3.0, 0.125)];
        assert_eq!(points_to_string(&pts), "1 2.5 -3 0.125 ");
        assert_eq!(points_to_string(&[]), "");
    }

    #[test]
    fn test_points_from_string_roundtrip() {
        let pts = vec![PointF::new(10.0, 20.0), PointF::new(0.5, -7.25)];
        assert_eq!(points_from_string(&points_to_string(&pts)), pts);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(points_from_string("").is_empty());
        assert!(points_from_string("  \n\t ").is_empty());
    }

    #[test]
    fn test_lenient_odd_and_garbage_tokens() {
        assert_eq!(
            points_from_string("1 2 3"),
            vec![PointF::new(1.0, 2.0), PointF::new(3.0, 0.0)]
        );
        assert_eq!(
            points_from_string("x 2"),
            vec![PointF::new(0.0, 2.0)]
        );
    }

    #[test]
    fn test_strict_rejects_odd_count() {
        let err = points_from_string_strict("1 2 3").unwrap_err();
        assert!(matches!(err, GraphAttrError::PointListParse { index: 2, .. }));
    }

    #[test]
    fn test_strict_rejects_garbage() {
        let err = points_from_string_strict("1 two").unwrap_err();
        assert!(matches!(err, GraphAttrError::PointListParse { index: 1, .. }));
    }

    #[test]
    fn test_strict_accepts_valid() {
        assert_eq!(
            points_from_string_strict(" 1 2 3 4 ").expect("parse"),
            vec![PointF::new(1.0, 2.0), PointF::new(3.0, 4.0)]
        );
    }
}
