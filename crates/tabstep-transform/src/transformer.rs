//! The fit/transform contract shared by every step.

use std::fmt::Debug;

use polars::prelude::{Column, DataFrame};

use crate::error::Result;

/// A configured, reusable operation over a [`DataFrame`].
///
/// Steps hold no data. `fit` exists so that an external pipeline runner can
/// drive every step through the same two-phase protocol; it never changes the
/// step. `transform` takes ownership of the frame and returns the result, so a
/// failed call never leaves a half-edited frame visible to the caller.
///
/// The `labels` argument is accepted for protocol compatibility and ignored by
/// all steps in this crate.
///
/// # Example
///
/// ```ignore
/// use tabstep_transform::{CharPadder, FrameTransformer, PadSide};
///
/// let padder = CharPadder::new("ZIP", 5, PadSide::Left);
/// let out = padder.fit(&df, None).transform(df, None)?;
/// ```
pub trait FrameTransformer: Debug + Send + Sync {
    /// Short step name used in log events.
    fn name(&self) -> &'static str;

    /// No-op fit; returns the step unchanged.
    fn fit(&self, _frame: &DataFrame, _labels: Option<&Column>) -> &Self
    where
        Self: Sized,
    {
        self
    }

    /// Apply the step to `frame`.
    fn transform(&self, frame: DataFrame, labels: Option<&Column>) -> Result<DataFrame>;

    /// Fit then transform. Since fitting is a no-op this is `transform`.
    fn fit_transform(&self, frame: DataFrame, labels: Option<&Column>) -> Result<DataFrame> {
        self.transform(frame, labels)
    }
}
