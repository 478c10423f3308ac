//! Configuration options for transformation steps.
//!
//! These are the knobs passed to step constructors. They derive serde so a
//! host application can read them from its own configuration files.

use std::fmt;
use std::str::FromStr;

use polars::prelude::{Expr, FillNullStrategy, IdxSize, lit};
use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Scalar used to replace missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FillValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl FillValue {
    pub(crate) fn to_expr(&self) -> Expr {
        match self {
            Self::Bool(v) => lit(*v),
            Self::Int(v) => lit(*v),
            Self::Float(v) => lit(*v),
            Self::Str(v) => lit(v.as_str()),
        }
    }
}

impl From<bool> for FillValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FillValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for FillValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FillValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FillValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FillValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Propagation method for filling missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMethod {
    /// Carry the last non-null value forward.
    #[serde(alias = "ffill", alias = "pad")]
    Forward,
    /// Carry the next non-null value backward.
    #[serde(alias = "bfill", alias = "backfill")]
    Backward,
}

impl FillMethod {
    /// Polars strategy for this method, filling at most `limit` consecutive nulls.
    pub(crate) fn strategy(self, limit: Option<usize>) -> FillNullStrategy {
        let limit = limit.map(|l| IdxSize::try_from(l).unwrap_or(IdxSize::MAX));
        match self {
            Self::Forward => FillNullStrategy::Forward(limit),
            Self::Backward => FillNullStrategy::Backward(limit),
        }
    }
}

impl FromStr for FillMethod {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "ffill" | "pad" => Ok(Self::Forward),
            "backward" | "bfill" | "backfill" => Ok(Self::Backward),
            _ => Err(TransformError::InvalidFillMethod(s.to_string())),
        }
    }
}

/// Direction along which missing values are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillAxis {
    /// Fill down each column.
    #[default]
    #[serde(alias = "index")]
    Rows,
    /// Fill across columns within a row.
    Columns,
}

impl fmt::Display for FillAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => f.write_str("rows"),
            Self::Columns => f.write_str("columns"),
        }
    }
}

/// Side on which padding characters are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadSide {
    Left,
    Right,
}

impl FromStr for PadSide {
    type Err = TransformError;

    /// Parses `left` or `right`, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstep_transform::PadSide;
    ///
    /// assert_eq!("LEFT".parse::<PadSide>().unwrap(), PadSide::Left);
    /// assert_eq!(" Right ".parse::<PadSide>().unwrap(), PadSide::Right);
    /// assert!("both".parse::<PadSide>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if trimmed.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else {
            Err(TransformError::InvalidPadSide(s.to_string()))
        }
    }
}

/// Row predicate used by [`RowDropper`](crate::RowDropper).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowCondition {
    /// Exact match against the whitespace-stripped value.
    Equals(String),
    /// Substring match, or regex match when `regex` is set.
    Contains {
        pattern: String,
        #[serde(default)]
        regex: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_method_parse() {
        assert_eq!("ffill".parse::<FillMethod>().unwrap(), FillMethod::Forward);
        assert_eq!("Backward".parse::<FillMethod>().unwrap(), FillMethod::Backward);
        assert!(matches!(
            "sideways".parse::<FillMethod>(),
            Err(TransformError::InvalidFillMethod(_))
        ));
    }

    #[test]
    fn test_fill_method_strategy_carries_limit() {
        assert!(matches!(
            FillMethod::Forward.strategy(Some(2)),
            FillNullStrategy::Forward(Some(2))
        ));
        assert!(matches!(
            FillMethod::Backward.strategy(None),
            FillNullStrategy::Backward(None)
        ));
    }

    #[test]
    fn test_pad_side_rejects_unknown() {
        let err = "middle".parse::<PadSide>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid pad side 'middle', expected 'left' or 'right'"
        );
    }

    #[test]
    fn test_options_deserialize() {
        let method: FillMethod = serde_json::from_str("\"bfill\"").unwrap();
        assert_eq!(method, FillMethod::Backward);

        let value: FillValue = serde_json::from_str("0").unwrap();
        assert_eq!(value, FillValue::Int(0));
        let value: FillValue = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(value, FillValue::Str("n/a".to_string()));

        let condition: RowCondition =
            serde_json::from_str(r#"{"contains": {"pattern": "^A"}}"#).unwrap();
        assert_eq!(
            condition,
            RowCondition::Contains {
                pattern: "^A".to_string(),
                regex: false
            }
        );
    }
}
