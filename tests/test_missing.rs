//! Tests for missing value description

use eda_report::pipeline::describe_na_values;
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_no_missing_values_all_ones() {
    let df = common::create_na_dataframe(false);

    let matrix = describe_na_values(&df).unwrap();

    assert_eq!(matrix.index, vec!["col_1", "col_2", "col_3"]);
    assert_eq!(matrix.values, vec![vec![1, 1], vec![1, 1], vec![1, 1]]);
}

#[test]
fn test_nan_counts_as_missing() {
    let df = common::create_na_dataframe(true);

    let matrix = describe_na_values(&df).unwrap();

    assert_eq!(matrix.row("col_1"), Some(&[1u8, 1][..]));
    assert_eq!(matrix.row("col_2"), Some(&[0u8, 1][..]), "NaN should be missing");
    assert_eq!(matrix.row("col_3"), Some(&[1u8, 1][..]));
}

#[test]
fn test_missing_categorical_value() {
    let df = df! {
        "col_1" => [0i64, 2],
        "col_2" => [0.5f64, 0.1],
        "col_3" => [None, Some("b")],
    }
    .unwrap();

    let matrix = describe_na_values(&df).unwrap();

    assert_eq!(matrix.values, vec![vec![1, 1], vec![1, 1], vec![0, 1]]);
}

#[test]
fn test_shape_matches_columns_by_rows() {
    let df = common::create_mixed_dataframe();

    let matrix = describe_na_values(&df).unwrap();

    assert_eq!(matrix.shape(), (df.width(), df.height()));
    for row in &matrix.values {
        assert!(row.iter().all(|v| *v == 0 || *v == 1));
    }
}

#[test]
fn test_zero_iff_cell_missing() {
    let df = common::create_mixed_dataframe();

    let matrix = describe_na_values(&df).unwrap();

    assert_eq!(matrix.row("color"), Some(&[1u8, 1, 1, 0, 1][..]));
    assert_eq!(matrix.row("width"), Some(&[1u8, 1, 0, 1, 1][..]));
    assert_eq!(
        matrix.missing_counts(),
        vec![
            ("type".to_string(), 0),
            ("color".to_string(), 1),
            ("height".to_string(), 0),
            ("width".to_string(), 1),
        ]
    );
}

#[test]
fn test_integer_nulls() {
    let df = df! {
        "int_col" => [Some(1i32), None, Some(3), Some(4), None],
    }
    .unwrap();

    let matrix = describe_na_values(&df).unwrap();

    assert_eq!(matrix.values, vec![vec![1, 0, 1, 1, 0]]);
}

#[test]
fn test_empty_dataframe() {
    let df = DataFrame::empty();
    let matrix = describe_na_values(&df).unwrap();
    assert_eq!(matrix.shape(), (0, 0));
}

#[test]
fn test_idempotent() {
    let df = common::create_mixed_dataframe();
    assert_eq!(
        describe_na_values(&df).unwrap(),
        describe_na_values(&df).unwrap()
    );
}
