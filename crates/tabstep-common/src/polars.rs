//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string rendering and null-aware keys for row comparison.

use polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null` and formats floats without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use tabstep_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("hello")), "hello");
/// assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
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
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// Negative zero renders as `0`.
///
/// # Examples
///
/// ```
/// use tabstep_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// assert_eq!(format_numeric(f64::NAN), "NaN");
/// ```
pub fn format_numeric(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Key for a single cell: `None` for null, the rendered text otherwise.
///
/// Keeps null distinct from the empty string, which [`any_to_string`] does not.
pub fn value_key(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Builds the key of row `idx` over the given columns.
///
/// Fails if any column is missing or `idx` is out of bounds.
pub fn row_key<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
    idx: usize,
) -> PolarsResult<Vec<Option<String>>> {
    let mut key = Vec::with_capacity(columns.len());
    for name in columns {
        let value = df.column(name.as_ref())?.get(idx)?;
        key.push(value_key(value));
    }
    Ok(key)
}
