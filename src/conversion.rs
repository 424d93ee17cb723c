//! Number to text and text to number conversions.

use crate::tour::{TourError, Transcript};

/// The number of significant digits a stream prints when no precision was set.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats `value` the way `%g` does: `precision` significant digits, no trailing zeros, and
/// scientific notation only when the exponent is below -4 or at least `precision`.
pub fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    // Rounding to the requested digits first can carry into the next power of ten.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_zeros(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

pub fn double_to_string(value: f64) -> String {
    format_general(value, DEFAULT_PRECISION)
}

/// Parses the whole of `text` as a number, giving 0 when it isn't one or has anything after it.
pub fn string_to_double(text: &str) -> f64 {
    text.trim_start().parse().unwrap_or(0.0)
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    out.token(double_to_string(273.1458))?;
    out.token(format_general(string_to_double("273.1458"), DEFAULT_PRECISION))?;
    out.token(format_general(string_to_double("273.1458"), 7))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_format() {
        assert_eq!(format_general(273.1458, 6), "273.146");
        assert_eq!(format_general(273.1458, 4), "273.1");
        assert_eq!(format_general(2.5, 6), "2.5");
        assert_eq!(format_general(100.0, 6), "100");
        assert_eq!(format_general(-0.5, 6), "-0.5");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(0.00001234, 6), "1.234e-05");
        assert_eq!(format_general(999999.5, 6), "1e+06", "Rounding should carry into the exponent!");
        assert_eq!(format_general(0.0, 6), "0");
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(string_to_double("273.1458"), 273.1458);
        assert_eq!(string_to_double("  1e3"), 1000.0);
        assert_eq!(string_to_double("12abc"), 0.0, "Trailing garbage should fail the parse!");
        assert_eq!(string_to_double(""), 0.0);
    }

    #[test]
    fn test_conversion_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(out.as_str(), "273.146 273.146 273.1458 ");
    }
}
