//! Shared utilities for tabstep crates.
//!
//! This crate provides Polars `AnyValue` helpers used by the transformation
//! steps, mainly for rendering cell values as text and building row keys.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_string, format_numeric, row_key, value_key};
