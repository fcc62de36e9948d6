//! Categorical variable histograms

use polars::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::chart::{Chart, Data, Encoding, FieldDef, FieldType, Mark, UnitChart};
use crate::error::EdaResult;
use crate::pipeline::missing::drop_missing_rows;
use crate::pipeline::selection::{
    ensure_positive_n_cols, ensure_subset, ensure_unique, CAT_VARS_NOT_IN_FRAME,
    CAT_VARS_NOT_UNIQUE,
};

/// Charts per grid row when the caller does not choose.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

const BAR_WIDTH: f64 = 40.0;
const CHART_WIDTH: u32 = 300;
const CHART_HEIGHT: u32 = 200;
const CATEGORY_FIELD: &str = "category";
const COUNT_FIELD: &str = "count";

/// Category frequencies for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryHistogram {
    pub column: String,
    /// `(category, count)` sorted by category.
    pub counts: Vec<(String, usize)>,
}

impl CategoryHistogram {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Grid of categorical histograms.
#[derive(Debug, Clone, Serialize)]
pub struct CategoricalGrid {
    /// Plotted columns, in request order.
    pub columns: Vec<String>,
    pub n_cols: usize,
    pub histograms: Vec<CategoryHistogram>,
    pub chart: Chart,
}

impl CategoricalGrid {
    /// Number of grid rows.
    pub fn n_rows(&self) -> usize {
        self.columns.len().div_ceil(self.n_cols)
    }

    /// Column names laid out row-major, `n_cols` per row.
    pub fn layout(&self) -> Vec<Vec<String>> {
        self.columns.chunks(self.n_cols).map(<[String]>::to_vec).collect()
    }
}

/// Plot a frequency histogram for each categorical column, arranged in a grid
/// of `n_cols` charts per row.
///
/// Rows with a missing value in *any* column of the dataset are dropped
/// before counting.
pub fn describe_cat_var<S: AsRef<str>>(
    df: &DataFrame,
    cat_vars: &[S],
    n_cols: usize,
) -> EdaResult<CategoricalGrid> {
    ensure_positive_n_cols(n_cols)?;
    ensure_subset(df, cat_vars, CAT_VARS_NOT_IN_FRAME)?;
    ensure_unique(cat_vars, CAT_VARS_NOT_UNIQUE)?;

    let all_columns: Vec<&Column> = df.get_columns().iter().collect();
    let complete = drop_missing_rows(df, &all_columns)?;

    let mut histograms = Vec::with_capacity(cat_vars.len());
    let mut charts = Vec::with_capacity(cat_vars.len());
    for name in cat_vars {
        let labels = category_labels(&complete, name.as_ref())?;
        histograms.push(count_categories(name.as_ref(), &labels)?);
        charts.push(histogram_chart(name.as_ref(), &labels)?);
    }

    let rows: Vec<Chart> = chunk_charts(charts, n_cols)
        .into_iter()
        .map(Chart::hconcat)
        .collect();
    let chart = Chart::vconcat(rows);

    debug!(
        columns = cat_vars.len(),
        rows_kept = complete.height(),
        rows_dropped = df.height() - complete.height(),
        "built categorical histograms"
    );

    Ok(CategoricalGrid {
        columns: cat_vars.iter().map(|s| s.as_ref().to_string()).collect(),
        n_cols,
        histograms,
        chart,
    })
}

/// Non-missing values of a column as category labels.
fn category_labels(df: &DataFrame, name: &str) -> PolarsResult<Series> {
    Ok(df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?
        .drop_nulls())
}

fn count_categories(name: &str, labels: &Series) -> EdaResult<CategoryHistogram> {
    // value_counts names its columns after the series, which may itself be "count"
    let frequencies = labels
        .clone()
        .with_name(CATEGORY_FIELD.into())
        .value_counts(false, false, COUNT_FIELD.into(), false)?;

    let categories = frequencies.column(CATEGORY_FIELD)?.as_materialized_series();
    let totals = frequencies
        .column(COUNT_FIELD)?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;

    let mut counts: Vec<(String, usize)> = categories
        .str()?
        .iter()
        .zip(totals.u64()?.iter())
        .filter_map(|(category, n)| Some((category?.to_string(), n? as usize)))
        .collect();
    counts.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(CategoryHistogram {
        column: name.to_string(),
        counts,
    })
}

/// Bar chart over the raw labels, one data row per kept value.
fn histogram_chart(name: &str, labels: &Series) -> PolarsResult<Chart> {
    let values = labels
        .str()?
        .iter()
        .flatten()
        .map(|label| Data::row([(name, Value::from(label))]))
        .collect();

    Ok(Chart::Unit(UnitChart {
        title: Some(format!("Histogram of {}", name)),
        width: Some(CHART_WIDTH),
        height: Some(CHART_HEIGHT),
        data: Some(Data { values }),
        mark: Mark::bar().with_width(BAR_WIDTH),
        encoding: Encoding {
            x: Some(FieldDef::new(name, FieldType::Ordinal)),
            y: Some(FieldDef::count()),
            ..Default::default()
        },
    }))
}

fn chunk_charts(charts: Vec<Chart>, n_cols: usize) -> Vec<Vec<Chart>> {
    let mut rows = Vec::with_capacity(charts.len().div_ceil(n_cols));
    let mut current = Vec::with_capacity(n_cols);
    for chart in charts {
        current.push(chart);
        if current.len() == n_cols {
            rows.push(std::mem::replace(&mut current, Vec::with_capacity(n_cols)));
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
