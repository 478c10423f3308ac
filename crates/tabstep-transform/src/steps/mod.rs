//! Transformation steps.
//!
//! Each step wraps one column-oriented operation and implements
//! [`FrameTransformer`](crate::FrameTransformer).

mod apply;
mod dedupe;
mod drop_rows;
mod dtype;
mod equality;
mod fill;
mod pad;
mod rename;
mod replace;

pub use apply::{FunctionApplyer, ValueFn};
pub use dedupe::SubsetDuplicateRemover;
pub use drop_rows::RowDropper;
pub use dtype::NumericDTypeOptimizer;
pub use equality::EqualityChecker;
pub use fill::NaNFiller;
pub use pad::{CharPadder, pad_value};
pub use rename::ColumnRenamer;
pub use replace::SubstringReplacer;
