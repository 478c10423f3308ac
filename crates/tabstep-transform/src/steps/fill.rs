//! Missing-value filling.

use polars::prelude::*;

use crate::error::{Result, TransformError};
use crate::options::{FillAxis, FillMethod, FillValue};
use crate::selection::ColumnSelection;
use crate::transformer::FrameTransformer;

/// Fills missing values in the selected columns.
///
/// Nulls are missing, and so is NaN in float columns. A fill method takes
/// precedence over a fill value when both are set. With neither set the step
/// leaves the frame untouched.
///
/// # Example
///
/// ```ignore
/// use tabstep_transform::{FillMethod, NaNFiller};
///
/// let by_value = NaNFiller::new(["AGE", "WEIGHT"]).with_value(0);
/// let by_method = NaNFiller::new("VISIT").with_method(FillMethod::Forward).with_limit(1);
/// ```
#[derive(Debug, Clone)]
pub struct NaNFiller {
    columns: ColumnSelection,
    value: Option<FillValue>,
    method: Option<FillMethod>,
    axis: FillAxis,
    limit: Option<usize>,
}

enum Fill<'a> {
    Method(FillMethod),
    Value(&'a FillValue),
}

impl NaNFiller {
    pub fn new(columns: impl Into<ColumnSelection>) -> Self {
        Self {
            columns: columns.into(),
            value: None,
            method: None,
            axis: FillAxis::default(),
            limit: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<FillValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_method(mut self, method: FillMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_axis(mut self, axis: FillAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Cap the number of filled values.
    ///
    /// With a method the cap applies to each gap of consecutive missing values;
    /// with a value it applies to the column as a whole.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn fill(&self) -> Option<Fill<'_>> {
        match (self.method, &self.value) {
            (Some(method), _) => Some(Fill::Method(method)),
            (None, Some(value)) => Some(Fill::Value(value)),
            (None, None) => None,
        }
    }
}

impl FrameTransformer for NaNFiller {
    fn name(&self) -> &'static str {
        "nan_filler"
    }

    fn transform(&self, mut frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        let Some(fill) = self.fill() else {
            tracing::warn!(
                step = self.name(),
                columns = %self.columns,
                "No fill value or method configured, leaving frame unchanged"
            );
            return Ok(frame);
        };
        if self.axis == FillAxis::Columns {
            return Err(TransformError::UnsupportedAxis(self.axis));
        }

        tracing::debug!(step = self.name(), columns = %self.columns, limit = ?self.limit, "Filling nulls");

        for name in &self.columns {
            let column = nan_as_null(frame.column(name)?)?;
            let nulls = column.null_count();
            let filled = match &fill {
                Fill::Method(method) => column.fill_null(method.strategy(self.limit))?,
                Fill::Value(value) => fill_with_value(&column, value, self.limit)?,
            };
            tracing::trace!(column = name, nulls, "Filled column");
            frame.with_column(filled)?;
        }

        Ok(frame)
    }
}

/// Turn NaN into null so float gaps fill like any other.
fn nan_as_null(column: &Column) -> Result<Column> {
    if !column.dtype().is_float() {
        return Ok(column.clone());
    }
    let name = column.name().clone();
    let cleaned = DataFrame::new(vec![column.clone()])?
        .lazy()
        .select([col(name.clone()).fill_nan(lit(NULL))])
        .collect()?;
    Ok(cleaned.column(name.as_str())?.clone())
}

/// Replace nulls in `column` with `value`, at most `limit` of them in total.
fn fill_with_value(column: &Column, value: &FillValue, limit: Option<usize>) -> Result<Column> {
    let name = column.name().clone();
    let filled = DataFrame::new(vec![column.clone()])?
        .lazy()
        .select([col(name.clone()).fill_null(value.to_expr())])
        .collect()?;
    let filled = filled.column(name.as_str())?.clone();

    let Some(limit) = limit else {
        return Ok(filled);
    };

    let keep = keep_original_mask(column, limit);
    let original = column.cast(filled.dtype())?;
    let merged = original
        .as_materialized_series()
        .zip_with(&keep, filled.as_materialized_series())?;
    Ok(merged.into_column())
}

/// True where the original value stays: non-nulls, and every null after the first `limit`.
fn keep_original_mask(column: &Column, limit: usize) -> BooleanChunked {
    let nulls = column.is_null();
    let mut seen = 0usize;
    let keep: Vec<bool> = nulls
        .into_iter()
        .map(|is_null| {
            if is_null.unwrap_or(false) {
                seen += 1;
                seen > limit
            } else {
                true
            }
        })
        .collect();
    BooleanChunked::from_slice("keep".into(), &keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_mask_counts_nulls_across_gaps() {
        let column = Column::new("x".into(), vec![None, Some(1i64), None, None, None]);
        let keep = keep_original_mask(&column, 2);
        let keep: Vec<Option<bool>> = keep.into_iter().collect();
        assert_eq!(
            keep,
            vec![Some(false), Some(true), Some(false), Some(true), Some(true)]
        );
    }

    #[test]
    fn nan_becomes_null_in_float_columns() {
        let column = Column::new("x".into(), vec![Some(1.0f64), Some(f64::NAN), None]);
        assert_eq!(nan_as_null(&column).unwrap().null_count(), 2);

        let ints = Column::new("y".into(), vec![Some(1i64), None]);
        assert_eq!(nan_as_null(&ints).unwrap().null_count(), 1);
    }

    #[test]
    fn method_takes_precedence_over_value() {
        let filler = NaNFiller::new("x")
            .with_value(0)
            .with_method(FillMethod::Forward);
        assert!(matches!(filler.fill(), Some(Fill::Method(FillMethod::Forward))));
    }
}
