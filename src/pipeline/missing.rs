//! Missing value description
//!
//! A cell counts as missing when it is null, or when it is a floating-point NaN.

use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::EdaResult;

/// Presence indicators, one row per dataset column.
///
/// `values[c][r]` is 0 when row `r` of column `c` is missing and 1 otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingnessMatrix {
    pub index: Vec<String>,
    pub values: Vec<Vec<u8>>,
}

impl MissingnessMatrix {
    /// `(num_columns, num_rows)` of the source dataset.
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.values.first().map_or(0, Vec::len))
    }

    /// Indicator row for a column.
    pub fn row(&self, column: &str) -> Option<&[u8]> {
        self.index
            .iter()
            .position(|name| name == column)
            .map(|i| self.values[i].as_slice())
    }

    /// Number of missing cells per column, in column order.
    pub fn missing_counts(&self) -> Vec<(String, usize)> {
        self.index
            .iter()
            .zip(&self.values)
            .map(|(name, row)| (name.clone(), row.iter().filter(|&&v| v == 0).count()))
            .collect()
    }
}

/// Encode the missingness pattern of every cell in the dataset.
pub fn describe_na_values(df: &DataFrame) -> EdaResult<MissingnessMatrix> {
    let mut index = Vec::with_capacity(df.width());
    let mut values = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let row: Vec<u8> = missing_mask(column)?
            .into_iter()
            .map(|missing| if missing { 0 } else { 1 })
            .collect();
        index.push(column.name().to_string());
        values.push(row);
    }

    debug!(
        columns = index.len(),
        rows = df.height(),
        "described missing values"
    );

    Ok(MissingnessMatrix { index, values })
}

/// Per-row missing flags for a column (null, or NaN in float columns).
pub(crate) fn missing_mask(column: &Column) -> PolarsResult<Vec<bool>> {
    let series = column.as_materialized_series();

    if series.dtype().is_float() {
        let floats = series.cast(&DataType::Float64)?;
        Ok(floats
            .f64()?
            .iter()
            .map(|val| val.map_or(true, f64::is_nan))
            .collect())
    } else {
        Ok(series
            .is_null()
            .iter()
            .map(|val| val.unwrap_or(true))
            .collect())
    }
}

/// Keep-mask over the rows of `df` that have no missing cell in `columns`.
pub(crate) fn complete_rows(df: &DataFrame, columns: &[&Column]) -> PolarsResult<BooleanChunked> {
    let mut keep = vec![true; df.height()];
    for column in columns {
        for (flag, missing) in keep.iter_mut().zip(missing_mask(column)?) {
            *flag &= !missing;
        }
    }
    Ok(BooleanChunked::from_slice("complete".into(), &keep))
}

/// Drop every row of `df` with a missing cell in any of `columns`.
pub(crate) fn drop_missing_rows(df: &DataFrame, columns: &[&Column]) -> PolarsResult<DataFrame> {
    let mask = complete_rows(df, columns)?;
    df.filter(&mask)
}
