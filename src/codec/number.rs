//! Number formatting shared by the text codecs.

/// Significant digits used for "natural" number formatting.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats `value` like printf's `%g` with `precision` significant digits.
///
/// Trailing zeros (and a trailing decimal point) are removed. Scientific
/// notation is used when the decimal exponent is below -4 or at least
/// `precision`, with a sign and at least two exponent digits (`1e+06`).
pub fn format_g(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    // Rounding to `precision` digits can bump the exponent (9.9999995 -> 10),
    // so take the exponent from the rounded scientific form.
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Formats with the default `%g` precision.
#[inline]
pub fn format_natural(value: f64) -> String {
    format_g(value, DEFAULT_PRECISION)
}

/// Formats with exactly four decimal places.
#[inline]
pub fn format_fixed4(value: f64) -> String {
    format!("{:.4}", value)
}

/// Formats with the fewest digits that parse back to exactly `value`.
///
/// Short values print the same as [`format_natural`]; long ones keep every
/// digit they need instead of rounding to six. Negative zero prints as `0`.
pub fn format_shortest(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_g_integers_and_fractions() {
        assert_eq!(format_natural(10.0), "10");
        assert_eq!(format_natural(-3.5), "-3.5");
        assert_eq!(format_natural(0.1), "0.1");
        assert_eq!(format_natural(1.0 / 3.0), "0.333333");
        assert_eq!(format_natural(123456.0), "123456");
        assert_eq!(format_natural(0.0), "0");
    }

    #[test]
    fn test_format_shortest_keeps_every_digit() {
        assert_eq!(format_shortest(2.0), "2");
        assert_eq!(format_shortest(-0.0), "0");
        assert_eq!(format_shortest(0.25), "0.25");
        assert_eq!(format_shortest(1234567.0), "1234567");
        assert_eq!(format_shortest(0.1234567), "0.1234567");
        for value in [1e-300, 1e300, 12.3456789, -7536.1812345678] {
            assert_eq!(format_shortest(value).parse::<f64>(), Ok(value));
        }
    }

    #[test]
    fn test_format_g_switches_to_scientific() {
        assert_eq!(format_natural(1234567.0), "1.23457e+06");
        assert_eq!(format_natural(1000000.0), "1e+06");
        assert_eq!(format_natural(0.00001), "1e-05");
        assert_eq!(format_natural(0.0001), "0.0001");
    }

    #[test]
    fn test_format_g_rounding_bumps_exponent() {
        assert_eq!(format_natural(9.9999995), "10");
        assert_eq!(format_natural(999999.6), "1e+06");
    }

    #[test]
    fn test_format_g_non_finite() {
        assert_eq!(format_natural(f64::NAN), "nan");
        assert_eq!(format_natural(f64::INFINITY), "inf");
        assert_eq!(format_natural(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_fixed4() {
        assert_eq!(format_fixed4(3.14159), "3.1416");
        assert_eq!(format_fixed4(2.0), "2.0000");
        assert_eq!(format_fixed4(-0.5), "-0.5000");
    }
}
