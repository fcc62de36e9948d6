//! Benchmarks for the correlation matrix and numeric summaries
//!
//! Run with: cargo bench --bench correlation_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polars::prelude::*;
use rand::prelude::*;
use rand::SeedableRng;

use eda_report::pipeline::{calc_cor, describe_num_var};

/// Seeded numeric frame; every fourth column follows an earlier one, and
/// roughly 1% of cells are null.
fn generate_numeric_dataframe(n_rows: usize, n_cols: usize, seed: u64) -> DataFrame {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut raw: Vec<Vec<f64>> = Vec::with_capacity(n_cols);

    for i in 0..n_cols {
        let values: Vec<f64> = if i % 4 == 3 {
            raw[i - 3]
                .iter()
                .map(|v| v + rng.gen::<f64>() * 10.0 - 5.0)
                .collect()
        } else {
            (0..n_rows).map(|_| rng.gen::<f64>() * 100.0).collect()
        };
        raw.push(values);
    }

    let columns: Vec<Column> = raw
        .into_iter()
        .enumerate()
        .map(|(i, values)| {
            let with_nulls: Vec<Option<f64>> = values
                .into_iter()
                .map(|v| (rng.gen::<f64>() > 0.01).then_some(v))
                .collect();
            Column::new(format!("feature_{:03}", i).into(), with_nulls)
        })
        .collect();

    DataFrame::new(columns).expect("Failed to create DataFrame")
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}

/// calc_cor for varying column counts
fn benchmark_correlation_by_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_by_columns");
    group.sample_size(30);

    let n_rows = 10_000;
    let column_counts = [5, 10, 25, 50, 100];

    for n_cols in column_counts {
        let df = generate_numeric_dataframe(n_rows, n_cols, 42);
        let names = column_names(&df);

        group.throughput(Throughput::Elements(((n_cols * (n_cols + 1)) / 2) as u64));

        group.bench_with_input(
            BenchmarkId::new("calc_cor", n_cols),
            &(&df, &names),
            |b, (df, names)| {
                b.iter(|| {
                    let _ = calc_cor(black_box(*df), black_box(names.as_slice()));
                });
            },
        );
    }

    group.finish();
}

/// calc_cor for varying row counts
fn benchmark_correlation_by_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_by_rows");
    group.sample_size(20);

    let n_cols = 20;
    let row_counts = [1_000, 10_000, 50_000, 100_000];

    for n_rows in row_counts {
        let df = generate_numeric_dataframe(n_rows, n_cols, 42);
        let names = column_names(&df);

        group.throughput(Throughput::Elements(n_rows as u64));

        group.bench_with_input(
            BenchmarkId::new("calc_cor", n_rows),
            &(&df, &names),
            |b, (df, names)| {
                b.iter(|| {
                    let _ = calc_cor(black_box(*df), black_box(names.as_slice()));
                });
            },
        );
    }

    group.finish();
}

/// Numeric summaries and histogram data over the same frames
fn benchmark_numeric_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric_summary");
    group.sample_size(20);

    let scenarios = [
        ("small_dataset", 5_000, 10),
        ("medium_dataset", 50_000, 20),
        ("large_dataset", 100_000, 50),
    ];

    for (name, n_rows, n_cols) in scenarios {
        let df = generate_numeric_dataframe(n_rows, n_cols, 7);
        let names = column_names(&df);

        group.throughput(Throughput::Elements((n_rows * n_cols) as u64));

        group.bench_with_input(
            BenchmarkId::new("describe_num_var", name),
            &(&df, &names),
            |b, (df, names)| {
                b.iter(|| {
                    let _ = describe_num_var(black_box(*df), black_box(names.as_slice()));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_correlation_by_columns,
    benchmark_correlation_by_rows,
    benchmark_numeric_summary,
);
criterion_main!(benches);
