//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::cli::ReportConfig;
use crate::pipeline::{DEFAULT_GRID_COLUMNS, N_COLS_NOT_POSITIVE};

/// eda-report - Exploratory data analysis report for a CSV or Parquet dataset
#[derive(Parser, Debug)]
#[command(name = "eda-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Categorical columns to plot (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub cat_vars: Vec<String>,

    /// Numeric columns to summarize and correlate (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub num_vars: Vec<String>,

    /// Categorical histograms per grid row [default: 3]
    #[arg(long, value_parser = validate_n_cols)]
    pub n_cols: Option<usize>,

    /// JSON config file with `cat_vars`, `num_vars` and `n_cols`.
    /// Values given on the command line take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write Vega-Lite chart files to this directory instead of printing previews
    #[arg(long)]
    pub chart_dir: Option<PathBuf>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Column selections and grid width after merging flags with the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub cat_vars: Vec<String>,
    pub num_vars: Vec<String>,
    pub n_cols: usize,
}

impl Cli {
    /// Merge command-line values with an optional config file.
    pub fn resolve(&self, file: Option<ReportConfig>) -> ResolvedConfig {
        let file = file.unwrap_or_default();

        let pick = |cli: &Vec<String>, file: Option<Vec<String>>| {
            if cli.is_empty() {
                file.unwrap_or_default()
            } else {
                cli.clone()
            }
        };

        ResolvedConfig {
            cat_vars: pick(&self.cat_vars, file.cat_vars),
            num_vars: pick(&self.num_vars, file.num_vars),
            n_cols: self.n_cols.or(file.n_cols).unwrap_or(DEFAULT_GRID_COLUMNS),
        }
    }
}

/// Validator for n_cols parameter
fn validate_n_cols(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(N_COLS_NOT_POSITIVE.to_string()),
    }
}
