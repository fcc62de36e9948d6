//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

/// The three-column frame from the missing value examples, optionally with
/// a NaN in `col_2`.
pub fn create_na_dataframe(with_nan: bool) -> DataFrame {
    let col_2 = if with_nan {
        vec![f64::NAN, 0.1]
    } else {
        vec![0.5, 0.1]
    };
    df! {
        "col_1" => [0i64, 2],
        "col_2" => col_2,
        "col_3" => ["a", "b"],
    }
    .unwrap()
}

/// Small mixed frame with known statistics
///
/// - `type`: categorical (Car x3, Bus x2)
/// - `color`: categorical with one missing value (row 4)
/// - `height`: 10, 20, 30, 40, 50
/// - `width`: 1, 2, 3, 4 plus a missing value (row 2)
pub fn create_mixed_dataframe() -> DataFrame {
    df! {
        "type" => ["Car", "Bus", "Car", "Car", "Bus"],
        "color" => [Some("red"), Some("blue"), Some("red"), None, Some("red")],
        "height" => [10.0f64, 20.0, 30.0, 40.0, 50.0],
        "width" => [Some(1.0f64), Some(2.0), None, Some(3.0), Some(4.0)],
    }
    .unwrap()
}

/// 200 rows of seeded random data
///
/// - `N1`, `N2`, `N3`: numeric, `N2` loosely follows `N1`
/// - `C1`, `C2`: categorical
pub fn create_random_dataframe(seed: u64) -> DataFrame {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let rows = 200;

    let n1: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>() * 100.0).collect();
    let n2: Vec<f64> = n1
        .iter()
        .map(|v| v * 0.5 + rng.gen::<f64>() * 50.0)
        .collect();
    let n3: Vec<i64> = (0..rows).map(|_| rng.gen_range(-50..50)).collect();
    let c1: Vec<&str> = (0..rows)
        .map(|_| ["alpha", "beta", "gamma"][rng.gen_range(0..3)])
        .collect();
    let c2: Vec<&str> = (0..rows)
        .map(|_| if rng.gen::<bool>() { "yes" } else { "no" })
        .collect();

    df! {
        "N1" => n1,
        "N2" => n2,
        "N3" => n3,
        "C1" => c1,
        "C2" => c2,
    }
    .unwrap()
}

/// Frame with known correlation patterns
pub fn create_correlation_test_dataframe() -> DataFrame {
    df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "b" => [2.0f64, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0], // b = 2*a
        "c" => [10.0f64, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0], // reversed a
        "d" => [5.0f64, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0],
        "label" => ["x", "y", "x", "y", "x", "y", "x", "y", "x", "y"],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}
