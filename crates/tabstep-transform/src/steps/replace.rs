//! Substring replacement in text columns.

use std::borrow::Cow;

use polars::prelude::*;
use regex::Regex;

use crate::error::Result;
use crate::selection::ColumnSelection;
use crate::transformer::FrameTransformer;

/// Replaces every occurrence of a substring in the selected columns.
///
/// Columns are cast to text first, so numeric columns come out as strings.
/// Matching is literal unless the step is built with [`SubstringReplacer::regex`].
#[derive(Debug, Clone)]
pub struct SubstringReplacer {
    columns: ColumnSelection,
    pattern: String,
    replacement: String,
    matcher: Option<Regex>,
}

impl SubstringReplacer {
    /// Literal replacement of `to_replace` with `replacement`.
    pub fn new(
        columns: impl Into<ColumnSelection>,
        to_replace: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            columns: columns.into(),
            pattern: to_replace.into(),
            replacement: replacement.into(),
            matcher: None,
        }
    }

    /// Regex replacement. `replacement` may refer to groups as `$1` or `${name}`.
    pub fn regex(
        columns: impl Into<ColumnSelection>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let matcher = Regex::new(&pattern)?;
        Ok(Self {
            columns: columns.into(),
            pattern,
            replacement: replacement.into(),
            matcher: Some(matcher),
        })
    }

    fn replace<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match &self.matcher {
            Some(matcher) => matcher.replace_all(value, self.replacement.as_str()),
            None if value.contains(self.pattern.as_str()) => {
                Cow::Owned(value.replace(self.pattern.as_str(), &self.replacement))
            }
            None => Cow::Borrowed(value),
        }
    }
}

impl FrameTransformer for SubstringReplacer {
    fn name(&self) -> &'static str {
        "substring_replacer"
    }

    fn transform(&self, mut frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        tracing::debug!(
            step = self.name(),
            columns = %self.columns,
            pattern = %self.pattern,
            regex = self.matcher.is_some(),
            "Replacing substrings"
        );

        for name in &self.columns {
            let text = frame.column(name)?.cast(&DataType::String)?;
            let replaced: StringChunked = text.str()?.apply_values(|s| self.replace(s));
            frame.with_column(replaced.into_column())?;
        }

        Ok(frame)
    }
}
