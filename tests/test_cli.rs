//! Tests for CLI argument parsing, config merging and the binary

use assert_cmd::Command;
use clap::Parser;
use eda_report::cli::{Cli, ReportConfig};
use eda_report::EdaError;
use predicates::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["eda-report", "-i", "data.csv"]);

    assert_eq!(cli.input, PathBuf::from("data.csv"));
    assert!(cli.cat_vars.is_empty());
    assert!(cli.num_vars.is_empty());
    assert_eq!(cli.n_cols, None);
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
    assert_eq!(cli.log_level, "warn");
    assert!(cli.chart_dir.is_none());
    assert!(cli.export.is_none());

    let config = cli.resolve(None);
    assert_eq!(config.n_cols, 3, "Default grid width should be 3");
}

#[test]
fn test_cli_comma_separated_columns() {
    let cli = Cli::parse_from([
        "eda-report",
        "-i",
        "data.csv",
        "-c",
        "type,color",
        "-n",
        "height,width",
        "--n-cols",
        "2",
    ]);

    assert_eq!(cli.cat_vars, vec!["type", "color"]);
    assert_eq!(cli.num_vars, vec!["height", "width"]);
    assert_eq!(cli.n_cols, Some(2));
}

#[test]
fn test_cli_rejects_zero_n_cols() {
    let result = Cli::try_parse_from(["eda-report", "-i", "data.csv", "--n-cols", "0"]);
    assert!(result.is_err());

    let result = Cli::try_parse_from(["eda-report", "-i", "data.csv", "--n-cols", "-1"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_requires_input() {
    assert!(Cli::try_parse_from(["eda-report", "-n", "height"]).is_err());
}

#[test]
fn test_cli_full_table_scan() {
    let cli = Cli::parse_from([
        "eda-report",
        "-i",
        "data.csv",
        "--infer-schema-length",
        "0",
    ]);

    assert_eq!(cli.infer_schema_length, 0);
}

#[test]
fn test_command_line_overrides_config_file() {
    let cli = Cli::parse_from(["eda-report", "-i", "data.csv", "-n", "height"]);
    let file = ReportConfig {
        cat_vars: Some(vec!["type".to_string()]),
        num_vars: Some(vec!["width".to_string()]),
        n_cols: Some(2),
    };

    let config = cli.resolve(Some(file));

    assert_eq!(config.cat_vars, vec!["type"]);
    assert_eq!(config.num_vars, vec!["height"]);
    assert_eq!(config.n_cols, 2);
}

#[test]
fn test_config_from_json() {
    let config = ReportConfig::from_json(&json!({
        "cat_vars": ["type"],
        "n_cols": 4
    }))
    .unwrap();

    assert_eq!(config.cat_vars, Some(vec!["type".to_string()]));
    assert_eq!(config.num_vars, None);
    assert_eq!(config.n_cols, Some(4));
}

#[test]
fn test_config_rejects_non_list_columns() {
    let err = ReportConfig::from_json(&json!({ "cat_vars": "type" })).unwrap_err();
    assert!(matches!(err, EdaError::InvalidType(_)));
    assert_eq!(err.to_string(), "cat_vars must be a list of strings");

    let err = ReportConfig::from_json(&json!({ "num_vars": [1, 2] })).unwrap_err();
    assert_eq!(err.to_string(), "num_vars must be a list of strings");

    let err = ReportConfig::from_json(&json!(["type"])).unwrap_err();
    assert!(matches!(err, EdaError::InvalidType(_)));
}

#[test]
fn test_config_rejects_bad_n_cols() {
    for bad in [json!(0), json!(-2), json!(1.5), json!("3")] {
        let err = ReportConfig::from_json(&json!({ "n_cols": bad })).unwrap_err();
        assert!(matches!(err, EdaError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "n_cols must be a positive non-zero integer");
    }
}

#[test]
fn test_config_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eda.json");
    std::fs::write(&path, r#"{ "num_vars": ["height", "width"] }"#).unwrap();

    let config = ReportConfig::load(&path).unwrap();

    assert_eq!(
        config.num_vars,
        Some(vec!["height".to_string(), "width".to_string()])
    );
}

#[test]
fn test_binary_generates_and_exports_report() {
    let mut df = common::create_mixed_dataframe();
    let (dir, csv_path) = common::create_temp_csv(&mut df);
    let export_path = dir.path().join("report.json");

    Command::cargo_bin("eda-report")
        .unwrap()
        .arg("-i")
        .arg(&csv_path)
        .args(["-c", "type", "-n", "height,width", "--export"])
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correlation plot of numerical variable"))
        .stdout(predicate::str::contains("EDA report complete!"));

    let text = std::fs::read_to_string(&export_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["metadata"]["rows"], 5);
}

#[test]
fn test_binary_reports_invalid_selection() {
    let mut df = common::create_mixed_dataframe();
    let (_dir, csv_path) = common::create_temp_csv(&mut df);

    Command::cargo_bin("eda-report")
        .unwrap()
        .arg("-i")
        .arg(&csv_path)
        .args(["-c", "type", "-n", "type"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("The report was not generated successfully").count(1),
        )
        .stdout(predicate::str::contains("only numeric columns expected"));
}
