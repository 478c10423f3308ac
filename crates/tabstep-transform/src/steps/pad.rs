//! Fixed-width string padding.

use std::borrow::Cow;

use polars::prelude::*;

use crate::error::Result;
use crate::options::PadSide;
use crate::selection::ColumnSelection;
use crate::transformer::FrameTransformer;

/// Pads text values to at least `width` characters.
#[derive(Debug, Clone)]
pub struct CharPadder {
    columns: ColumnSelection,
    width: usize,
    side: PadSide,
    fill_char: char,
}

impl CharPadder {
    /// Pads with `'0'` unless [`with_fill_char`](Self::with_fill_char) says otherwise.
    pub fn new(columns: impl Into<ColumnSelection>, width: usize, side: PadSide) -> Self {
        Self {
            columns: columns.into(),
            width,
            side,
            fill_char: '0',
        }
    }

    pub fn with_fill_char(mut self, fill_char: char) -> Self {
        self.fill_char = fill_char;
        self
    }
}

/// Pad `value` on `side` with `fill_char` until it is `width` characters long.
///
/// Width is counted in Unicode scalar values. Values already at or beyond
/// `width` are returned unchanged.
///
/// # Examples
///
/// ```
/// use tabstep_transform::PadSide;
/// use tabstep_transform::steps::pad_value;
///
/// assert_eq!(pad_value("42", 5, PadSide::Left, '0'), "00042");
/// assert_eq!(pad_value("42", 4, PadSide::Right, '*'), "42**");
/// assert_eq!(pad_value("12345", 3, PadSide::Left, '0'), "12345");
/// ```
pub fn pad_value(value: &str, width: usize, side: PadSide, fill_char: char) -> Cow<'_, str> {
    let len = value.chars().count();
    if len >= width {
        return Cow::Borrowed(value);
    }
    let padding: String = std::iter::repeat_n(fill_char, width - len).collect();
    match side {
        PadSide::Left => Cow::Owned(format!("{padding}{value}")),
        PadSide::Right => Cow::Owned(format!("{value}{padding}")),
    }
}

impl FrameTransformer for CharPadder {
    fn name(&self) -> &'static str {
        "char_padder"
    }

    fn transform(&self, mut frame: DataFrame, _labels: Option<&Column>) -> Result<DataFrame> {
        tracing::debug!(
            step = self.name(),
            columns = %self.columns,
            width = self.width,
            side = ?self.side,
            "Padding values"
        );

        let (width, side, fill_char) = (self.width, self.side, self.fill_char);
        for name in &self.columns {
            let text = frame.column(name)?.cast(&DataType::String)?;
            let padded: StringChunked = text
                .str()?
                .apply_values(|s| pad_value(s, width, side, fill_char));
            frame.with_column(padded.into_column())?;
        }

        Ok(frame)
    }
}
