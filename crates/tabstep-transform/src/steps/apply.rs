//! Element-wise function application.

use std::fmt;
use std::sync::Arc;

use polars::prelude::*;

use crate::error::{BoxError, Result, TransformError};
use crate::selection::ColumnSelection;
use crate::transformer::FrameTransformer;

/// Function applied to each cell by [`FunctionApplyer`].
pub type ValueFn =
    dyn for<'a> Fn(AnyValue<'a>) -> std::result::Result<AnyValue<'static>, BoxError> + Send + Sync;

/// Applies a unary function to every value of the selected columns.
///
/// The column is rebuilt from the returned values, so the function may change
/// its dtype. Nulls are passed to the function like any other value. The first
/// failing call aborts the transform.
///
/// # Example
///
/// ```ignore
/// use polars::prelude::AnyValue;
/// use tabstep_transform::FunctionApplyer;
///
/// let double = FunctionApplyer::infallible(
///     |v| match v {
///         AnyValue::Int64(n) => AnyValue::Int64(n * 2),
///         other => other.into_static(),
///     },
///     "DOSE",
/// );
/// ```
#[derive(Clone)]
pub struct FunctionApplyer {
    func: Arc<ValueFn>,
    columns: ColumnSelection,
}

impl FunctionApplyer {
    pub fn new<F>(func: F, columns: impl Into<ColumnSelection>) -> Self
    where
        F: for<'a> Fn(AnyValue<'a>) -> std::result::Result<AnyValue<'static>, BoxError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            func: Arc::new(func),
            columns: columns.into(),
        }
    }

    /// Wrap a function that cannot fail.
    pub fn infallible<F>(func: F, columns: impl Into<ColumnSelection>) -> Self
    where
        F: for<'a> Fn(AnyValue<'a>) -> AnyValue<'static> + Send + Sync + 'static,
    {
        Self::new(move |value| Ok(func(value)), columns)
    }

    fn apply_column(&self, column: &Column) -> Result<Series> {
        let mut values = Vec::with_capacity(column.len());
        for row in 0..column.len() {
            let value = column.get(row)?;
            let mapped = (self.func)(value).map_err(|source| TransformError::Function {
                column: column.name().to_string(),
                row,
                source,
            })?;
            values.push(mapped);
        }
        Ok(Series::from_any_values(column.name().clone(), &values, false)?)
    }
}

impl fmt::Debug for FunctionApplyer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionApplyer")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl FrameTransformer for FunctionApplyer {
    fn name(&self) -> &'static str {
        "function_applyer"
    }

    fn transform(&self, mut frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        tracing::debug!(step = self.name(), columns = %self.columns, "Applying function");

        for name in &self.columns {
            let column = frame.column(name)?;
            // Nothing to infer a dtype from; keep the column as is.
            if column.is_empty() {
                continue;
            }
            let mapped = self.apply_column(column)?;
            frame.with_column(mapped)?;
        }

        Ok(frame)
    }
}
