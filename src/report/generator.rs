//! EDA report orchestration
//!
//! Runs the four analysis steps in order and presents the results. The first
//! failing step aborts the whole report; nothing partial is shown.

use polars::prelude::*;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::chart::{Chart, ChartRenderer, ConsoleRenderer};
use crate::error::{EdaError, EdaResult};
use crate::pipeline::{
    calc_cor, describe_cat_var, describe_na_values, describe_num_var, CategoricalGrid,
    CorrelationChart, MissingnessMatrix, NumericSummary, DEFAULT_GRID_COLUMNS,
};
use crate::report::summary::{format_correlations, format_missing_counts, format_numeric_summary};
use crate::utils::{print_error, print_section};

/// Report settings that are not column selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Categorical histograms per grid row.
    pub n_cols: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            n_cols: DEFAULT_GRID_COLUMNS,
        }
    }
}

/// Everything one report run computes.
#[derive(Debug, Clone, Serialize)]
pub struct EdaReport {
    pub missingness: MissingnessMatrix,
    pub categorical: CategoricalGrid,
    pub numeric_summary: NumericSummary,
    pub numeric_histogram: Chart,
    pub correlation: CorrelationChart,
}

/// Run every analysis step, stopping at the first error.
pub fn build_report<C, N>(
    df: &DataFrame,
    cat_vars: &[C],
    num_vars: &[N],
    options: &ReportOptions,
) -> EdaResult<EdaReport>
where
    C: AsRef<str>,
    N: AsRef<str>,
{
    let missingness = describe_na_values(df)?;
    let categorical = describe_cat_var(df, cat_vars, options.n_cols)?;
    let (numeric_summary, numeric_histogram) = describe_num_var(df, num_vars)?;
    let correlation = calc_cor(df, num_vars)?;

    Ok(EdaReport {
        missingness,
        categorical,
        numeric_summary,
        numeric_histogram,
        correlation,
    })
}

/// Print the tables and hand each chart to `renderer`.
///
/// Renderer failures are logged and skipped.
pub fn present_report(report: &EdaReport, renderer: &mut dyn ChartRenderer) {
    print_section("Number of NA values in each column");
    print!("{}", format_missing_counts(&report.missingness));

    print_section("Categorical variable histogram");
    render_chart(renderer, "categorical_histograms", &report.categorical.chart);

    print_section("Numerical variable histogram");
    render_chart(renderer, "numeric_histograms", &report.numeric_histogram);

    print_section("Numerical variable summary");
    print!("{}", format_numeric_summary(&report.numeric_summary));

    print_section("Correlation plot of numerical variable");
    render_chart(renderer, "correlation_matrix", &report.correlation.chart);
    print!("{}", format_correlations(&report.correlation.triples));
}

fn render_chart(renderer: &mut dyn ChartRenderer, name: &str, chart: &Chart) {
    if let Err(e) = renderer.render(name, chart) {
        warn!(chart = name, error = %e, "failed to render chart");
    }
}

/// Build and present the report, returning it on success.
pub fn run_report<C, N>(
    df: &DataFrame,
    cat_vars: &[C],
    num_vars: &[N],
    options: &ReportOptions,
    renderer: &mut dyn ChartRenderer,
) -> EdaResult<EdaReport>
where
    C: AsRef<str>,
    N: AsRef<str>,
{
    let report = build_report(df, cat_vars, num_vars, options)?;
    present_report(&report, renderer);
    info!(
        columns = df.width(),
        rows = df.height(),
        "report generated"
    );
    Ok(report)
}

/// Generate the report with custom options and renderer.
///
/// Returns `true` on success. Any failure is printed and logged, and turns
/// into `false`.
pub fn generate_report_with<C, N>(
    df: &DataFrame,
    cat_vars: &[C],
    num_vars: &[N],
    options: &ReportOptions,
    renderer: &mut dyn ChartRenderer,
) -> bool
where
    C: AsRef<str>,
    N: AsRef<str>,
{
    match run_report(df, cat_vars, num_vars, options, renderer) {
        Ok(_) => true,
        Err(e) => {
            report_failure(&e);
            false
        }
    }
}

/// Print and log a failed report run.
pub fn report_failure(e: &EdaError) {
    print_error("The report was not generated successfully", &e.to_string());
    error!(code = e.error_code(), error = %e, "report generation failed");
}

/// Generate the full EDA report on the console with default options.
pub fn generate_report<C, N>(df: &DataFrame, cat_vars: &[C], num_vars: &[N]) -> bool
where
    C: AsRef<str>,
    N: AsRef<str>,
{
    generate_report_with(
        df,
        cat_vars,
        num_vars,
        &ReportOptions::default(),
        &mut ConsoleRenderer::default(),
    )
}
