//! Error types for transformation steps.

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::options::FillAxis;

/// Boxed error returned by caller-supplied element functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building or running a step.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Failed DataFrame operation (missing column, failed cast, ...).
    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),

    /// Pattern could not be compiled as a regular expression.
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Column pairs and output names must line up one to one.
    #[error("{pairs} column pairs but {names} new column names")]
    LengthMismatch { pairs: usize, names: usize },

    /// Pad side text was neither `left` nor `right`.
    #[error("invalid pad side '{0}', expected 'left' or 'right'")]
    InvalidPadSide(String),

    /// Fill method text was not a known method name.
    #[error("invalid fill method '{0}', expected 'forward' or 'backward'")]
    InvalidFillMethod(String),

    /// Fill axis cannot be applied to a single column.
    #[error("fill axis '{0}' is not supported when filling a single column")]
    UnsupportedAxis(FillAxis),

    /// Caller-supplied element function failed.
    #[error("function failed on column '{column}' at row {row}: {source}")]
    Function {
        column: String,
        row: usize,
        #[source]
        source: BoxError,
    },
}

/// Result type for transformation steps.
pub type Result<T> = std::result::Result<T, TransformError>;
