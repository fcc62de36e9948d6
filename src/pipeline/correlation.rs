//! Pairwise Pearson correlation and the lower-triangle correlation chart

use faer::Mat;
use polars::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::chart::{
    Chart, ColorDef, Condition, ConditionalValue, Data, Encoding, FieldDef, FieldType,
    LayerChart, LegendDirection, Mark, UnitChart,
};
use crate::error::EdaResult;
use crate::pipeline::missing::drop_missing_rows;
use crate::pipeline::numeric::present_values;
use crate::pipeline::selection::{
    ensure_numeric, ensure_subset, ensure_unique, COLUMNS_NOT_NUMERIC, NUM_VARS_NOT_SUBSET,
    NUM_VARS_NOT_UNIQUE,
};

/// Correlations at or below this render their label in dark text.
pub const LABEL_COLOR_THRESHOLD: f64 = 0.2;

const CHART_SIZE: u32 = 400;
const LABEL_FONT_SIZE: f64 = 20.0;

/// One cell of the lower triangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationTriple {
    pub var1: String,
    pub var2: String,
    /// Raw Pearson coefficient; NaN when undefined.
    pub corr: f64,
}

impl CorrelationTriple {
    /// Coefficient with two decimals, as the chart labels print it.
    pub fn label(&self) -> String {
        format!("{:.2}", self.corr)
    }
}

/// Full symmetric correlation matrix over alphabetically sorted names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub names: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == a)?;
        let j = self.names.iter().position(|n| n == b)?;
        Some(self.values[i][j])
    }

    /// Lower triangle with diagonal, outer variable first.
    ///
    /// Each outer name pairs with every name still in the pool, itself
    /// included, and then leaves the pool. Sorted names make the first and
    /// last triples self-pairs.
    pub fn lower_triangle(&self) -> Vec<CorrelationTriple> {
        let n = self.names.len();
        let mut triples = Vec::with_capacity(n * (n + 1) / 2);
        let mut pool: Vec<usize> = (0..n).collect();

        for i in 0..n {
            for &j in &pool {
                triples.push(CorrelationTriple {
                    var1: self.names[i].clone(),
                    var2: self.names[j].clone(),
                    corr: self.values[i][j],
                });
            }
            pool.retain(|&j| j != i);
        }

        triples
    }
}

/// Correlation triples plus the heatmap chart built from them.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationChart {
    pub matrix: CorrelationMatrix,
    pub triples: Vec<CorrelationTriple>,
    /// Complete rows used after dropping missing values.
    pub rows_used: usize,
    pub chart: Chart,
}

/// Correlate the numeric columns `num_vars` and build a lower-triangle
/// heatmap with value labels.
///
/// Rows with a missing value in any selected column are dropped first.
pub fn calc_cor<S: AsRef<str>>(df: &DataFrame, num_vars: &[S]) -> EdaResult<CorrelationChart> {
    ensure_subset(df, num_vars, NUM_VARS_NOT_SUBSET)?;
    ensure_numeric(df, num_vars, COLUMNS_NOT_NUMERIC)?;
    ensure_unique(num_vars, NUM_VARS_NOT_UNIQUE)?;

    let mut names: Vec<String> = num_vars.iter().map(|s| s.as_ref().to_string()).collect();
    names.sort();

    let selected: Vec<&Column> = names
        .iter()
        .map(|name| df.column(name))
        .collect::<PolarsResult<_>>()?;
    let complete = drop_missing_rows(df, &selected)?;

    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        columns.push(present_values(complete.column(name)?)?);
    }

    let matrix = CorrelationMatrix {
        values: pearson_matrix(&columns),
        names,
    };
    let triples = matrix.lower_triangle();
    let chart = correlation_chart(&triples);

    debug!(
        columns = matrix.names.len(),
        rows_used = complete.height(),
        rows_dropped = df.height() - complete.height(),
        "computed correlation matrix"
    );

    Ok(CorrelationChart {
        matrix,
        rows_used: complete.height(),
        triples,
        chart,
    })
}

/// Pearson correlation matrix of equal-length columns.
///
/// Columns are centred and scaled to unit norm so that `R = Zᵀ Z`. The
/// diagonal is exactly 1.0; a pair involving a constant column (or fewer
/// than two rows) is NaN. Off-diagonal values are clamped into [-1, 1].
fn pearson_matrix(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n_cols = columns.len();
    let n_rows = columns.first().map_or(0, Vec::len);

    let mut z = Mat::<f64>::zeros(n_rows, n_cols);
    let mut defined = vec![false; n_cols];

    for (col_idx, values) in columns.iter().enumerate() {
        if n_rows < 2 {
            continue;
        }
        let mean = values.iter().sum::<f64>() / n_rows as f64;
        let norm = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>().sqrt();
        if norm == 0.0 {
            continue; // Constant column
        }
        defined[col_idx] = true;
        for (row_idx, &x) in values.iter().enumerate() {
            z[(row_idx, col_idx)] = (x - mean) / norm;
        }
    }

    let r = z.transpose() * &z;

    (0..n_cols)
        .map(|i| {
            (0..n_cols)
                .map(|j| {
                    if i == j {
                        1.0
                    } else if defined[i] && defined[j] {
                        r[(i, j)].clamp(-1.0, 1.0)
                    } else {
                        f64::NAN
                    }
                })
                .collect()
        })
        .collect()
}

fn correlation_chart(triples: &[CorrelationTriple]) -> Chart {
    let values = triples
        .iter()
        .map(|t| {
            Data::row([
                ("Var1", Value::from(t.var1.as_str())),
                ("Var2", Value::from(t.var2.as_str())),
                ("Corr", Value::from(t.corr)),
            ])
        })
        .collect();

    let x = FieldDef::new("Var1", FieldType::Ordinal);
    let y = FieldDef::new("Var2", FieldType::Ordinal).with_label_angle(0.0);

    let heatmap = UnitChart {
        title: None,
        width: None,
        height: None,
        data: None,
        mark: Mark::rect(),
        encoding: Encoding {
            x: Some(x.clone()),
            y: Some(y.clone()),
            color: Some(ColorDef::Field(
                FieldDef::new("Corr", FieldType::Quantitative)
                    .with_legend(LegendDirection::Horizontal),
            )),
            text: None,
        },
    };

    let labels = UnitChart {
        title: None,
        width: None,
        height: None,
        data: None,
        mark: Mark::text()
            .with_baseline("middle")
            .with_font_size(LABEL_FONT_SIZE),
        encoding: Encoding {
            x: Some(x),
            y: Some(y),
            color: Some(ColorDef::Conditional(ConditionalValue {
                condition: Condition {
                    test: format!("datum.Corr <= {}", LABEL_COLOR_THRESHOLD),
                    value: "black".to_string(),
                },
                value: "white".to_string(),
            })),
            text: Some(FieldDef::new("Corr", FieldType::Quantitative).with_format(".2f")),
        },
    };

    Chart::Layer(LayerChart {
        title: "Correlation matrix".to_string(),
        width: CHART_SIZE,
        height: CHART_SIZE,
        data: Data { values },
        layer: vec![heatmap, labels],
    })
}
