//! Numeric downcasting.

use polars::prelude::*;

use crate::error::Result;
use crate::selection::ColumnSelection;
use crate::transformer::FrameTransformer;

/// Narrows column storage to `Int16` and `Float32`.
///
/// Casts are strict: text that does not parse as a number, or an integer
/// outside the `Int16` range, fails the transform instead of producing nulls.
#[derive(Debug, Clone, Default)]
pub struct NumericDTypeOptimizer {
    int_columns: ColumnSelection,
    float_columns: ColumnSelection,
}

impl NumericDTypeOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns to store as `Int16`.
    pub fn with_int16_columns(mut self, columns: impl Into<ColumnSelection>) -> Self {
        self.int_columns = columns.into();
        self
    }

    /// Columns to store as `Float32`.
    pub fn with_float32_columns(mut self, columns: impl Into<ColumnSelection>) -> Self {
        self.float_columns = columns.into();
        self
    }
}

fn downcast(frame: &mut DataFrame, columns: &ColumnSelection, dtype: &DataType) -> Result<()> {
    for name in columns {
        let cast = frame.column(name)?.strict_cast(dtype)?;
        tracing::trace!(column = name, dtype = %dtype, "Downcast column");
        frame.with_column(cast)?;
    }
    Ok(())
}

impl FrameTransformer for NumericDTypeOptimizer {
    fn name(&self) -> &'static str {
        "numeric_dtype_optimizer"
    }

    fn transform(&self, mut frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        tracing::debug!(
            step = self.name(),
            int16 = %self.int_columns,
            float32 = %self.float_columns,
            "Downcasting columns"
        );

        downcast(&mut frame, &self.int_columns, &DataType::Int16)?;
        downcast(&mut frame, &self.float_columns, &DataType::Float32)?;
        Ok(frame)
    }
}
