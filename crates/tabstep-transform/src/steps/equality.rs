//! Pairwise column equality flags.

use polars::prelude::*;

use crate::error::{Result, TransformError};
use crate::transformer::FrameTransformer;

/// Adds one boolean column per column pair, true where the pair is equal.
///
/// A null on either side compares as `false`, and so does every row of a pair
/// whose dtypes cannot be compared (text against numbers, for instance). With
/// `drop_originals` every
/// column named in any pair is removed once all flags are added.
#[derive(Debug, Clone)]
pub struct EqualityChecker {
    pairs: Vec<(String, String)>,
    new_col_names: Vec<String>,
    drop_originals: bool,
}

impl EqualityChecker {
    /// Fails with [`TransformError::LengthMismatch`] unless there is exactly
    /// one new column name per pair.
    pub fn new<P, A, B, N, S>(pairs: P, new_col_names: N) -> Result<Self>
    where
        P: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(left, right)| (left.into(), right.into()))
            .collect();
        let new_col_names: Vec<String> = new_col_names.into_iter().map(Into::into).collect();

        if pairs.len() != new_col_names.len() {
            return Err(TransformError::LengthMismatch {
                pairs: pairs.len(),
                names: new_col_names.len(),
            });
        }

        Ok(Self {
            pairs,
            new_col_names,
            drop_originals: false,
        })
    }

    pub fn with_drop_originals(mut self, drop_originals: bool) -> Self {
        self.drop_originals = drop_originals;
        self
    }

    /// Columns named in any pair, first-seen order, without repeats.
    fn source_columns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (left, right) in &self.pairs {
            for name in [left.as_str(), right.as_str()] {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

impl FrameTransformer for EqualityChecker {
    fn name(&self) -> &'static str {
        "equality_checker"
    }

    fn transform(&self, mut frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        tracing::debug!(
            step = self.name(),
            pairs = self.pairs.len(),
            drop_originals = self.drop_originals,
            "Comparing column pairs"
        );

        for ((left, right), new_name) in self.pairs.iter().zip(&self.new_col_names) {
            let flags = pair_flags(frame.column(left)?, frame.column(right)?)?;
            frame.with_column(Column::new(new_name.as_str().into(), flags))?;
        }

        if self.drop_originals {
            for name in self.source_columns() {
                frame.drop_in_place(name)?;
            }
        }

        Ok(frame)
    }
}

fn pair_flags(left: &Column, right: &Column) -> Result<Vec<bool>> {
    if !comparable(left.dtype(), right.dtype()) {
        tracing::debug!(
            left = %left.name(),
            right = %right.name(),
            left_dtype = %left.dtype(),
            right_dtype = %right.dtype(),
            "Dtypes not comparable, flagging every row unequal"
        );
        return Ok(vec![false; left.len()]);
    }
    let equal = left.equal(right)?;
    Ok(equal.into_iter().map(|v| v.unwrap_or(false)).collect())
}

fn comparable(left: &DataType, right: &DataType) -> bool {
    left == right
        || (left.is_primitive_numeric() && right.is_primitive_numeric())
        || matches!(left, DataType::Null)
        || matches!(right, DataType::Null)
}
