//! Reusable DataFrame transformation steps.
//!
//! Each step wraps a single column-oriented operation on a Polars
//! [`DataFrame`](polars::prelude::DataFrame) behind the [`FrameTransformer`]
//! fit/transform contract, so an external pipeline runner can chain them.
//!
//! # Overview
//!
//! - **NaNFiller**: fill nulls by value or by forward/backward propagation
//! - **SubstringReplacer**: literal or regex substring replacement
//! - **CharPadder**: left/right padding to a fixed width
//! - **FunctionApplyer**: apply a caller-supplied function to each value
//! - **ColumnRenamer**: rename columns through a mapping
//! - **SubsetDuplicateRemover**: drop repeated rows on a key subset
//! - **RowDropper**: drop or keep rows by equality or containment
//! - **NumericDTypeOptimizer**: downcast to `Int16` / `Float32`
//! - **EqualityChecker**: add boolean flags comparing column pairs
//!
//! # Example
//!
//! ```ignore
//! use tabstep_transform::{FrameTransformer, NaNFiller, RowDropper};
//!
//! let steps: Vec<Box<dyn FrameTransformer>> = vec![
//!     Box::new(NaNFiller::new("SEX").with_value("U")),
//!     Box::new(RowDropper::new("SEX").with_condition_equals("U")),
//! ];
//!
//! let mut df = source_df;
//! for step in &steps {
//!     df = step.fit_transform(df, None)?;
//! }
//! ```
//!
//! # Design Principles
//!
//! - **Stateless steps**: configuration only, no data held between calls
//! - **Owned frames**: `transform` consumes its input and returns the result
//! - **Propagated errors**: Polars failures surface unchanged as [`TransformError::Polars`]

mod error;
mod selection;
mod transformer;

pub mod options;
pub mod steps;

// Core types
pub use selection::ColumnSelection;
pub use transformer::FrameTransformer;

// Error type
pub use error::{BoxError, Result, TransformError};

// Options
pub use options::{FillAxis, FillMethod, FillValue, PadSide, RowCondition};

// Steps
pub use steps::{
    CharPadder, ColumnRenamer, EqualityChecker, FunctionApplyer, NaNFiller,
    NumericDTypeOptimizer, RowDropper, SubsetDuplicateRemover, SubstringReplacer,
};
