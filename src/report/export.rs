//! JSON export of a complete EDA report

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::pipeline::{CorrelationTriple, Statistic};
use crate::report::EdaReport;

/// Metadata about the report run
#[derive(Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// eda-report version
    pub version: String,
    /// Input file path
    pub input_file: String,
    pub rows: usize,
    pub columns: usize,
}

/// Complete report export
#[derive(Serialize)]
pub struct ReportExport {
    pub metadata: ReportMetadata,
    /// NA count per column, in column order
    pub missing_counts: Vec<(String, usize)>,
    /// Statistic label -> column -> value
    pub numeric_summary: BTreeMap<String, BTreeMap<String, Option<f64>>>,
    pub categorical_columns: Vec<String>,
    pub correlations: Vec<CorrelationTriple>,
    /// Vega-Lite documents keyed by chart name
    pub charts: BTreeMap<String, Value>,
}

impl ReportExport {
    pub fn new(report: &EdaReport, input_file: &str, rows: usize, columns: usize) -> Result<Self> {
        let mut numeric_summary = BTreeMap::new();
        for stat in Statistic::ALL {
            let by_column: BTreeMap<String, Option<f64>> = report
                .numeric_summary
                .columns
                .iter()
                .cloned()
                .zip(report.numeric_summary.row(stat))
                .map(|(column, v)| (column, (!v.is_nan()).then_some(v)))
                .collect();
            numeric_summary.insert(stat.label().to_string(), by_column);
        }

        let mut charts = BTreeMap::new();
        for (name, chart) in [
            ("categorical_histograms", &report.categorical.chart),
            ("numeric_histograms", &report.numeric_histogram),
            ("correlation_matrix", &report.correlation.chart),
        ] {
            let spec = chart
                .to_vega_lite()
                .with_context(|| format!("Failed to serialize chart '{}'", name))?;
            charts.insert(name.to_string(), spec);
        }

        Ok(Self {
            metadata: ReportMetadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: input_file.to_string(),
                rows,
                columns,
            },
            missing_counts: report.missingness.missing_counts(),
            numeric_summary,
            categorical_columns: report.categorical.columns.clone(),
            correlations: report.correlation.triples.clone(),
            charts,
        })
    }
}

/// Write the report export as pretty JSON
pub fn export_report(export: &ReportExport, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, export)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}
