//! Column renaming.

use std::collections::BTreeMap;

use polars::prelude::*;

use crate::error::Result;
use crate::transformer::FrameTransformer;

/// Renames columns through an old-name to new-name mapping.
///
/// All renames happen at once, so a mapping may swap two names. Mapping keys
/// missing from the frame are skipped and unmapped columns keep their names.
#[derive(Debug, Clone)]
pub struct ColumnRenamer {
    mapping: BTreeMap<String, String>,
}

impl ColumnRenamer {
    pub fn new<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            mapping: mapping
                .into_iter()
                .map(|(old, new)| (old.into(), new.into()))
                .collect(),
        }
    }
}

impl FrameTransformer for ColumnRenamer {
    fn name(&self) -> &'static str {
        "column_renamer"
    }

    fn transform(&self, mut frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        let current = frame.get_column_names_owned();

        let unknown: Vec<&str> = self
            .mapping
            .keys()
            .filter(|old| !current.iter().any(|name| name.as_str() == old.as_str()))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            tracing::warn!(
                step = self.name(),
                columns = ?unknown,
                "Rename mapping refers to columns not in the frame"
            );
        }

        let renamed: Vec<PlSmallStr> = current
            .iter()
            .map(|name| match self.mapping.get(name.as_str()) {
                Some(new) => PlSmallStr::from(new.as_str()),
                None => name.clone(),
            })
            .collect();

        tracing::debug!(
            step = self.name(),
            renamed = self.mapping.len() - unknown.len(),
            "Renaming columns"
        );
        frame.set_column_names(renamed)?;

        Ok(frame)
    }
}
