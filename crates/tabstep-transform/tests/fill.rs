//! Tests for NaNFiller.

use polars::prelude::*;
use tabstep_transform::{FillAxis, FillMethod, FrameTransformer, NaNFiller, TransformError};

fn ints(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name).unwrap().i64().unwrap().into_iter().collect()
}

fn frame(x: Vec<Option<i64>>, y: Vec<Option<i64>>) -> DataFrame {
    DataFrame::new(vec![
        Column::new("x".into(), x),
        Column::new("y".into(), y),
    ])
    .unwrap()
}

#[test]
fn fills_with_value_and_leaves_other_columns() {
    let df = frame(vec![Some(1), None, Some(3)], vec![None, Some(2), None]);

    let out = NaNFiller::new("x").with_value(0).transform(df, None).unwrap();

    assert_eq!(ints(&out, "x"), vec![Some(1), Some(0), Some(3)]);
    assert_eq!(ints(&out, "y"), vec![None, Some(2), None]);
}

#[test]
fn fills_string_columns() {
    let df = DataFrame::new(vec![Column::new("s".into(), vec![Some("a"), None])]).unwrap();

    let out = NaNFiller::new("s").with_value("missing").transform(df, None).unwrap();

    let values: Vec<Option<&str>> = out.column("s").unwrap().str().unwrap().into_iter().collect();
    assert_eq!(values, vec![Some("a"), Some("missing")]);
}

#[test]
fn fills_every_listed_column() {
    let df = frame(vec![None, Some(1)], vec![Some(2), None]);

    let out = NaNFiller::new(["x", "y"]).with_value(9).transform(df, None).unwrap();

    assert_eq!(ints(&out, "x"), vec![Some(9), Some(1)]);
    assert_eq!(ints(&out, "y"), vec![Some(2), Some(9)]);
}

#[test]
fn forward_fill_respects_limit() {
    let df = frame(vec![Some(1), None, None, Some(4)], vec![None; 4]);

    let out = NaNFiller::new("x")
        .with_method(FillMethod::Forward)
        .with_limit(1)
        .transform(df, None)
        .unwrap();

    assert_eq!(ints(&out, "x"), vec![Some(1), Some(1), None, Some(4)]);
}

#[test]
fn backward_fill() {
    let df = frame(vec![None, Some(2), None], vec![None; 3]);

    let out = NaNFiller::new("x")
        .with_method(FillMethod::Backward)
        .transform(df, None)
        .unwrap();

    assert_eq!(ints(&out, "x"), vec![Some(2), Some(2), None]);
}

#[test]
fn value_fill_limit_counts_across_the_column() {
    let df = frame(vec![None, None, Some(3), None], vec![None; 4]);

    let out = NaNFiller::new("x")
        .with_value(0)
        .with_limit(1)
        .transform(df, None)
        .unwrap();

    assert_eq!(ints(&out, "x"), vec![Some(0), None, Some(3), None]);
}

#[test]
fn value_fill_limit_spans_gaps() {
    let df = frame(vec![None, Some(2), None, None, None], vec![None; 5]);

    let out = NaNFiller::new("x")
        .with_value(0)
        .with_limit(3)
        .transform(df, None)
        .unwrap();

    assert_eq!(
        ints(&out, "x"),
        vec![Some(0), Some(2), Some(0), Some(0), None]
    );
}

#[test]
fn fills_nan_in_float_columns() {
    let df = DataFrame::new(vec![Column::new("x".into(), vec![1.0f64, f64::NAN])]).unwrap();

    let out = NaNFiller::new("x").with_value(0.0).transform(df, None).unwrap();

    let values: Vec<Option<f64>> = out.column("x").unwrap().f64().unwrap().into_iter().collect();
    assert_eq!(values, vec![Some(1.0), Some(0.0)]);
}

#[test]
fn forward_fill_treats_nan_as_missing() {
    let df = DataFrame::new(vec![Column::new(
        "x".into(),
        vec![Some(1.5f64), Some(f64::NAN), None],
    )])
    .unwrap();

    let out = NaNFiller::new("x")
        .with_method(FillMethod::Forward)
        .transform(df, None)
        .unwrap();

    let values: Vec<Option<f64>> = out.column("x").unwrap().f64().unwrap().into_iter().collect();
    assert_eq!(values, vec![Some(1.5), Some(1.5), Some(1.5)]);
}

#[test]
fn method_wins_over_value() {
    let df = frame(vec![Some(1), None], vec![None; 2]);

    let out = NaNFiller::new("x")
        .with_value(0)
        .with_method(FillMethod::Forward)
        .transform(df, None)
        .unwrap();

    assert_eq!(ints(&out, "x"), vec![Some(1), Some(1)]);
}

#[test]
fn unconfigured_filler_is_noop() {
    let df = frame(vec![None, Some(1)], vec![Some(2), None]);

    let out = NaNFiller::new("x").transform(df.clone(), None).unwrap();

    assert!(out.equals_missing(&df));
}

#[test]
fn column_axis_is_rejected() {
    let df = frame(vec![None], vec![Some(1)]);

    let err = NaNFiller::new("x")
        .with_value(0)
        .with_axis(FillAxis::Columns)
        .transform(df, None)
        .unwrap_err();

    assert!(matches!(err, TransformError::UnsupportedAxis(FillAxis::Columns)));
}

#[test]
fn missing_column_fails() {
    let df = frame(vec![None], vec![None]);

    let err = NaNFiller::new("nope").with_value(0).transform(df, None).unwrap_err();

    assert!(matches!(err, TransformError::Polars(_)));
}
