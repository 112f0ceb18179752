//! Integer coercion for numeric form fields.
//!
//! Mirrors a truthiness-guarded base-10 integer parse: falsy input is passed
//! through untouched, truthy input is parsed from its leading digits, and
//! input with no leading digits becomes [`Coerced::NotANumber`].

use bbz_model::{Coerced, Field, FormScalar};
use tracing::debug;

/// Parse the leading base-10 integer of `text`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit (`"12px"` is `12`). Returns `None` when no digit is found
/// or the value overflows.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading integer of a float's decimal text.
///
/// Magnitudes of at least `1e21` or below `1e-6` are written in exponent
/// form, so only the leading mantissa digit is read (`1.5e21` is `1`).
/// Otherwise the value is truncated; `None` when that does not fit in `i64`.
fn float_prefix(number: f64) -> Option<i64> {
    if !number.is_finite() {
        return None;
    }
    let magnitude = number.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        return parse_int_prefix(&format!("{number:e}"));
    }
    let truncated = number.trunc();
    let lower = i64::MIN as f64;
    if truncated >= lower && truncated < -lower {
        Some(truncated as i64)
    } else {
        None
    }
}

/// Coerce one scalar that is known to be truthy.
fn coerce_truthy(value: &FormScalar) -> Coerced {
    let parsed = match value {
        FormScalar::Integer(number) => Some(*number),
        FormScalar::Float(number) => float_prefix(*number),
        FormScalar::Text(text) => parse_int_prefix(text),
    };
    match parsed {
        Some(number) => Coerced::Integer(number),
        None => {
            let raw = match value {
                FormScalar::Text(text) => text.clone(),
                FormScalar::Integer(number) => number.to_string(),
                FormScalar::Float(number) => number.to_string(),
            };
            debug!(raw = %raw, "numeric field is not a number");
            Coerced::NotANumber(raw)
        }
    }
}

/// Coerce a numeric form field for submission.
///
/// `Absent` and `Null` are preserved, falsy values pass through as
/// [`Coerced::Falsy`], anything else is parsed.
///
/// Parsed values are 64-bit. Text whose leading digits overflow `i64`
/// (`"99999999999999999999"`) and floats whose integer part does not fit
/// become [`Coerced::NotANumber`] holding the raw input; nothing saturates.
pub fn coerce_integer(field: &Field<FormScalar>) -> Field<Coerced> {
    match field {
        Field::Absent => Field::Absent,
        Field::Null => Field::Null,
        Field::Value(value) if !value.is_truthy() => Field::Value(Coerced::Falsy(value.clone())),
        Field::Value(value) => Field::Value(coerce_truthy(value)),
    }
}
