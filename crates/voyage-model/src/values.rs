//! Polars AnyValue utility functions.
//!
//! Conversions used when cells and chart data are pulled out of the dataset.

use polars::prelude::AnyValue;

/// Converts an AnyValue to its display string, or None for nulls.
///
/// Booleans render as `True`/`False` and floats drop trailing zeros.
pub fn display_value(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    };
    Some(text)
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        return format!("{v:.0}");
    }
    format!("{v}")
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
///
/// Booleans count as 0/1 and numeric strings are parsed.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
    .filter(|v| !v.is_nan())
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(AnyValue::Null), None);
        assert_eq!(display_value(AnyValue::Boolean(true)).as_deref(), Some("True"));
        assert_eq!(display_value(AnyValue::Int64(1)).as_deref(), Some("1"));
        assert_eq!(display_value(AnyValue::Float64(39.0)).as_deref(), Some("39"));
        assert_eq!(display_value(AnyValue::Float64(0.5)).as_deref(), Some("0.5"));
        assert_eq!(display_value(AnyValue::String("Earth")).as_deref(), Some("Earth"));
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Int64(20)), Some(20.0));
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(any_to_f64(AnyValue::String(" 12.5 ")), Some(12.5));
        assert_eq!(any_to_f64(AnyValue::String("Earth")), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
    }
}
