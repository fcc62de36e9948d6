//! Numeric variable summaries and histograms

use polars::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::chart::{Chart, Data, Encoding, FacetChart, FieldDef, FieldType, Mark, UnitChart};
use crate::error::EdaResult;
use crate::pipeline::selection::{
    ensure_numeric, ensure_subset, ensure_unique, NUM_VARS_NOT_SUBSET, NUM_VARS_NOT_UNIQUE,
    ONLY_NUMERIC_EXPECTED,
};

/// Histogram bin limit.
pub const DEFAULT_MAX_BINS: usize = 30;
/// Facet panels per row in the numeric histogram.
pub const FACET_COLUMNS: usize = 3;

const CHART_SIZE: u32 = 300;

/// Summary statistics, in table row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Statistic {
    #[serde(rename = "25%")]
    Q25,
    #[serde(rename = "75%")]
    Q75,
    #[serde(rename = "min")]
    Min,
    #[serde(rename = "max")]
    Max,
    #[serde(rename = "median")]
    Median,
    #[serde(rename = "mean")]
    Mean,
    #[serde(rename = "sd")]
    Sd,
}

impl Statistic {
    pub const ALL: [Statistic; 7] = [
        Statistic::Q25,
        Statistic::Q75,
        Statistic::Min,
        Statistic::Max,
        Statistic::Median,
        Statistic::Mean,
        Statistic::Sd,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Statistic::Q25 => "25%",
            Statistic::Q75 => "75%",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Median => "median",
            Statistic::Mean => "mean",
            Statistic::Sd => "sd",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Seven statistics per requested column.
///
/// `values[c]` holds the statistics of `columns[c]` in [`Statistic::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub columns: Vec<String>,
    pub values: Vec<[f64; 7]>,
}

impl NumericSummary {
    pub fn get(&self, stat: Statistic, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i][stat.position()])
    }

    /// One table row: the statistic across all columns.
    pub fn row(&self, stat: Statistic) -> Vec<f64> {
        self.values.iter().map(|v| v[stat.position()]).collect()
    }

    /// Table with a leading `statistic` column and one column per variable.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns = Vec::with_capacity(self.columns.len() + 1);
        let labels: Vec<&str> = Statistic::ALL.iter().map(|s| s.label()).collect();
        columns.push(Column::new("statistic".into(), labels));

        for (name, stats) in self.columns.iter().zip(&self.values) {
            columns.push(Column::new(name.as_str().into(), stats.to_vec()));
        }

        DataFrame::new(columns)
    }
}

/// Summarize numeric columns and build a faceted histogram of their values.
///
/// Missing values (null or NaN) are ignored everywhere. `sd` is the
/// population standard deviation (divisor N); percentiles interpolate
/// linearly between order statistics.
pub fn describe_num_var<S: AsRef<str>>(
    df: &DataFrame,
    num_vars: &[S],
) -> EdaResult<(NumericSummary, Chart)> {
    ensure_unique(num_vars, NUM_VARS_NOT_UNIQUE)?;
    ensure_subset(df, num_vars, NUM_VARS_NOT_SUBSET)?;
    ensure_numeric(df, num_vars, ONLY_NUMERIC_EXPECTED)?;

    let mut columns = Vec::with_capacity(num_vars.len());
    let mut observed = Vec::with_capacity(num_vars.len());
    for name in num_vars {
        let name = name.as_ref();
        columns.push(name.to_string());
        observed.push(present_values(df.column(name)?)?);
    }

    let values = observed.iter().map(|v| summarize(v)).collect();
    let summary = NumericSummary { columns, values };
    let chart = histogram_chart(&summary.columns, &observed);

    debug!(
        columns = summary.columns.len(),
        "summarized numeric variables"
    );

    Ok((summary, chart))
}

/// Non-missing values of a numeric column as f64, in row order.
pub(crate) fn present_values(column: &Column) -> PolarsResult<Vec<f64>> {
    let floats = column.as_materialized_series().cast(&DataType::Float64)?;
    Ok(floats
        .f64()?
        .iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect())
}

fn summarize(values: &[f64]) -> [f64; 7] {
    if values.is_empty() {
        return [f64::NAN; 7];
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    [
        quantile(&sorted, 0.25),
        quantile(&sorted, 0.75),
        sorted[0],
        sorted[sorted.len() - 1],
        quantile(&sorted, 0.5),
        mean,
        variance.sqrt(),
    ]
}

/// Linear-interpolation quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

fn histogram_chart(names: &[String], observed: &[Vec<f64>]) -> Chart {
    let values = names
        .iter()
        .zip(observed)
        .flat_map(|(name, values)| {
            values.iter().map(move |v| {
                Data::row([
                    ("variable", Value::from(name.as_str())),
                    ("value", Value::from(*v)),
                ])
            })
        })
        .collect();

    Chart::Facet(FacetChart {
        data: Data { values },
        facet: FieldDef::new("variable", FieldType::Nominal),
        columns: FACET_COLUMNS,
        spec: UnitChart {
            title: Some("Histogram of Numeric Variables".to_string()),
            width: Some(CHART_SIZE),
            height: Some(CHART_SIZE),
            data: None,
            mark: Mark::bar(),
            encoding: Encoding {
                x: Some(
                    FieldDef::new("value", FieldType::Quantitative)
                        .with_bin(DEFAULT_MAX_BINS)
                        .with_title("Value"),
                ),
                y: Some(FieldDef::count()),
                ..Default::default()
            },
        },
    })
}
