//! Duplicate-row removal on a column subset.

use std::collections::HashSet;

use polars::prelude::*;
use tabstep_common::row_key;

use crate::error::Result;
use crate::selection::ColumnSelection;
use crate::transformer::FrameTransformer;

/// Drops rows whose values on the key columns repeat an earlier row.
///
/// The first occurrence of each key survives and row order is preserved.
/// Nulls compare equal to each other and unequal to every value.
#[derive(Debug, Clone)]
pub struct SubsetDuplicateRemover {
    subset: ColumnSelection,
}

impl SubsetDuplicateRemover {
    pub fn new(subset: impl Into<ColumnSelection>) -> Self {
        Self {
            subset: subset.into(),
        }
    }
}

impl FrameTransformer for SubsetDuplicateRemover {
    fn name(&self) -> &'static str {
        "subset_duplicate_remover"
    }

    fn transform(&self, frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        for name in &self.subset {
            frame.column(name)?;
        }

        let row_count = frame.height();
        let keys = self.subset.as_slice();
        let mut seen = HashSet::with_capacity(row_count);
        let mut keep = Vec::with_capacity(row_count);
        for idx in 0..row_count {
            keep.push(seen.insert(row_key(&frame, keys, idx)?));
        }

        let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
        let frame = frame.filter(&mask)?;

        tracing::debug!(
            step = self.name(),
            subset = %self.subset,
            rows_before = row_count,
            rows_after = frame.height(),
            "Removed duplicate rows"
        );
        Ok(frame)
    }
}
