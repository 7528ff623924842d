use serde_json::Value;
use crate::models::{Coordinate, CoordinateFields, ListingRecord};

/// Read the longest leading decimal number of `input`
///
/// Leading whitespace is skipped and anything after the number is
/// ignored, so `"5000m"` reads as 5000 and `"1.3521 N"` as 1.3521.
/// A signed or unsigned `Infinity` is recognised; `inf` and `NaN` are not.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        // A bare `e` is trailing garbage, not an exponent
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Interpret a single JSON field as a degree value
///
/// Numbers are taken as-is, strings are read with [`parse_float_prefix`].
/// Anything else, a string without a leading number, or a non-finite
/// result yields `None`.
pub fn parse_degrees(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    };

    parsed.filter(|v| v.is_finite())
}

/// Pull a coordinate out of a record using the given field names
///
/// Returns `None` when either component is missing or unparseable.
pub fn extract_coordinate(record: &ListingRecord, fields: &CoordinateFields) -> Option<Coordinate> {
    let latitude = record.get(&fields.latitude).and_then(parse_degrees)?;
    let longitude = record.get(&fields.longitude).and_then(parse_degrees)?;
    Some(Coordinate::new(latitude, longitude))
}
