//! eda-report: Exploratory Data Analysis CLI Tool
//!
//! Loads a CSV or Parquet dataset and prints (or writes) the EDA report.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing::debug;

use eda_report::chart::{ChartRenderer, ConsoleRenderer, VegaLiteWriter};
use eda_report::cli::{Cli, ReportConfig};
use eda_report::pipeline::{dataset_stats, load_dataset};
use eda_report::report::{
    export_report, report_failure, run_report, ReportExport, ReportOptions,
};
use eda_report::utils::{
    create_spinner, finish_with_failure, finish_with_success, print_banner, print_completion,
    print_config, print_info, print_success,
};

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let file_config = cli.config.as_deref().map(ReportConfig::load).transpose()?;
    let config = cli.resolve(file_config);
    debug!(?config, "resolved configuration");

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &config.cat_vars, &config.num_vars, config.n_cols);

    // Load dataset
    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = match load_dataset(&cli.input, cli.infer_schema_length) {
        Ok(df) => df,
        Err(e) => {
            finish_with_failure(&spinner, "Failed to load dataset");
            return Err(e);
        }
    };
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols, memory_mb) = dataset_stats(&df);
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);
    println!(
        "      {}",
        style(format!("Loaded in {:.2?}", step_start.elapsed())).dim()
    );

    let options = ReportOptions {
        n_cols: config.n_cols,
    };
    let mut console_renderer = ConsoleRenderer::default();
    let mut file_renderer = cli.chart_dir.as_ref().map(VegaLiteWriter::new);
    let renderer: &mut dyn ChartRenderer = match file_renderer.as_mut() {
        Some(writer) => writer,
        None => &mut console_renderer,
    };

    let report = match run_report(&df, &config.cat_vars, &config.num_vars, &options, renderer) {
        Ok(report) => report,
        Err(e) => {
            report_failure(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(writer) = &file_renderer {
        print_success(&format!(
            "Wrote {} chart file(s) to {}",
            writer.written().len(),
            writer.dir().display()
        ));
    }

    if let Some(path) = &cli.export {
        let export = ReportExport::new(&report, &cli.input.display().to_string(), rows, cols)?;
        export_report(&export, path)?;
        print_success(&format!("Report exported to {}", path.display()));
    } else {
        print_info("Use --export <PATH> to save the report as JSON");
    }

    print_completion();

    Ok(ExitCode::SUCCESS)
}
