//! Conditional row filtering.

use std::borrow::Cow;

use polars::prelude::*;
use regex::Regex;

use crate::error::Result;
use crate::options::RowCondition;
use crate::selection::ColumnSelection;
use crate::transformer::FrameTransformer;

/// Drops rows matching a condition on the selected columns.
///
/// By default rows that match are dropped. With `inverted` only matching rows
/// are kept. Each column filters the rows left by the previous one, so with
/// several columns the conditions combine conjunctively.
///
/// In equality mode the target columns must hold text; their values are
/// stripped of surrounding whitespace before comparing, and the stripped values
/// replace the originals in the output. Containment mode casts to text and does
/// not strip. Null values never match either condition.
#[derive(Debug, Clone)]
pub struct RowDropper {
    columns: ColumnSelection,
    condition: Option<RowCondition>,
    matcher: Option<Regex>,
    inverted: bool,
}

impl RowDropper {
    /// A dropper without a condition; it leaves frames unchanged until one is set.
    pub fn new(columns: impl Into<ColumnSelection>) -> Self {
        Self {
            columns: columns.into(),
            condition: None,
            matcher: None,
            inverted: false,
        }
    }

    pub fn with_condition_equals(mut self, value: impl Into<String>) -> Self {
        self.condition = Some(RowCondition::Equals(value.into()));
        self.matcher = None;
        self
    }

    pub fn with_condition_contains(mut self, pattern: impl Into<String>) -> Self {
        self.condition = Some(RowCondition::Contains {
            pattern: pattern.into(),
            regex: false,
        });
        self.matcher = None;
        self
    }

    /// Containment test using a regular expression.
    pub fn with_regex_contains(mut self, pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        self.matcher = Some(Regex::new(&pattern)?);
        self.condition = Some(RowCondition::Contains {
            pattern,
            regex: true,
        });
        Ok(self)
    }

    /// Build from a condition value, compiling the pattern when it is a regex.
    pub fn with_condition(self, condition: RowCondition) -> Result<Self> {
        match condition {
            RowCondition::Equals(value) => Ok(self.with_condition_equals(value)),
            RowCondition::Contains {
                pattern,
                regex: false,
            } => Ok(self.with_condition_contains(pattern)),
            RowCondition::Contains {
                pattern,
                regex: true,
            } => self.with_regex_contains(pattern),
        }
    }

    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    fn filter_equals(&self, mut frame: DataFrame, name: &str, expected: &str) -> Result<DataFrame> {
        let stripped: StringChunked = frame
            .column(name)?
            .str()?
            .apply_values(|s| Cow::Borrowed(s.trim()));
        let keep: Vec<bool> = stripped
            .into_iter()
            .map(|value| (value == Some(expected)) == self.inverted)
            .collect();

        frame.with_column(stripped.into_column())?;
        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        Ok(frame.filter(&mask)?)
    }

    fn filter_contains(&self, frame: &DataFrame, name: &str, pattern: &str) -> Result<DataFrame> {
        let text = frame.column(name)?.cast(&DataType::String)?;
        let keep: Vec<bool> = text
            .str()?
            .into_iter()
            .map(|value| value.is_some_and(|s| self.contains(s, pattern)) == self.inverted)
            .collect();

        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        Ok(frame.filter(&mask)?)
    }

    fn contains(&self, value: &str, pattern: &str) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(value),
            None => value.contains(pattern),
        }
    }
}

impl FrameTransformer for RowDropper {
    fn name(&self) -> &'static str {
        "row_dropper"
    }

    fn transform(&self, mut frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        let Some(condition) = &self.condition else {
            return Ok(frame);
        };

        let rows_before = frame.height();
        for name in &self.columns {
            frame = match condition {
                RowCondition::Equals(expected) => self.filter_equals(frame, name, expected)?,
                RowCondition::Contains { pattern, .. } => {
                    self.filter_contains(&frame, name, pattern)?
                }
            };
            tracing::trace!(column = name, rows = frame.height(), "Filtered column");
        }

        tracing::debug!(
            step = self.name(),
            columns = %self.columns,
            condition = ?condition,
            inverted = self.inverted,
            rows_before,
            rows_after = frame.height(),
            "Dropped rows"
        );
        Ok(frame)
    }
}
