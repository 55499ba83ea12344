//! Number formatting and enumerated sections shared by the text reports.
//!
//! The downstream optimal-control tool expects floats in one fixed textual
//! form (`1.0`, `0.64`, `1e-07`); [`format_float`] produces exactly that.

use std::fmt::Display;
use std::io::{self, Write};

/// Formats `value` in the report float notation.
///
/// Shortest round-trip digits; positional notation with at least one
/// fractional digit for decimal exponents in `-4..16`, scientific notation
/// with a signed two-digit exponent otherwise.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let negative = mantissa.starts_with('-');
        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        let body = positional(&digits, exponent);
        if negative { format!("-{body}") } else { body }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Places the decimal point in `digits` (first digit at 10^`exponent`).
fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let padding = "0".repeat(int_len - digits.len());
        format!("{digits}{padding}.0")
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

/// Writes `header:` followed by one `index: value` line per item and a
/// blank line.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_section<W, I, T>(out: &mut W, header: &str, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (usize, T)>,
    T: Display,
{
    writeln!(out, "{header}:")?;
    for (index, item) in items {
        writeln!(out, "{index}: {item}")?;
    }
    writeln!(out)
}

/// [`write_section`] for floats, numbered from `offset`.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_float_section<W: Write>(
    out: &mut W,
    header: &str,
    offset: usize,
    values: &[f64],
) -> io::Result<()> {
    write_section(
        out,
        header,
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (offset + i, format_float(*v))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_a_fraction() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-1000.0), "-1000.0");
        assert_eq!(format_float(1.0e15), "1000000000000000.0");
    }

    #[test]
    fn ordinary_fractions() {
        assert_eq!(format_float(0.64), "0.64");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(123.456), "123.456");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00012), "0.00012");
    }

    #[test]
    fn scientific_outside_positional_range() {
        assert_eq!(format_float(1.0e-7), "1e-07");
        assert_eq!(format_float(-1.5e-5), "-1.5e-05");
        assert_eq!(format_float(1.0e16), "1e+16");
        assert_eq!(format_float(1.2345e120), "1.2345e+120");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn section_layout() {
        let mut out = Vec::new();
        write_float_section(&mut out, "h", 0, &[0.3, 0.1]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "h:\n0: 0.3\n1: 0.1\n\n");
    }

    #[test]
    fn section_offset() {
        let mut out = Vec::new();
        write_section(&mut out, "names", [(4, "a"), (5, "b")]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "names:\n4: a\n5: b\n\n");
    }
}
