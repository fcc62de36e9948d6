//! eda-report: Exploratory Data Analysis Library
//!
//! Missing value summaries, categorical histograms, numeric summaries and
//! histograms, and a lower-triangle correlation matrix for a polars
//! `DataFrame`, combined into one report.

pub mod chart;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use error::{EdaError, EdaResult};
pub use pipeline::{calc_cor, describe_cat_var, describe_na_values, describe_num_var};
pub use report::{generate_report, generate_report_with, ReportOptions};
