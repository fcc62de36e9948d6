//! Console tables for the report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};

use crate::pipeline::{CorrelationTriple, MissingnessMatrix, NumericSummary, Statistic};

/// NA count per column, missing counts highlighted.
pub fn format_missing_counts(matrix: &MissingnessMatrix) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("NA values").add_attribute(Attribute::Bold),
    ]);

    for (column, count) in matrix.missing_counts() {
        table.add_row(vec![
            Cell::new(column),
            Cell::new(count)
                .set_alignment(CellAlignment::Right)
                .fg(if count == 0 { Color::White } else { Color::Red }),
        ]);
    }

    indent(&table)
}

/// Statistic rows by variable columns.
pub fn format_numeric_summary(summary: &NumericSummary) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("").add_attribute(Attribute::Bold)];
    header.extend(
        summary
            .columns
            .iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for stat in Statistic::ALL {
        let mut row = vec![Cell::new(stat.label()).add_attribute(Attribute::Bold)];
        row.extend(
            summary
                .row(stat)
                .into_iter()
                .map(|v| Cell::new(format_stat(v)).set_alignment(CellAlignment::Right)),
        );
        table.add_row(row);
    }

    indent(&table)
}

/// The lower-triangle triples as `Var1 | Var2 | Corr`.
pub fn format_correlations(triples: &[CorrelationTriple]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Var1").add_attribute(Attribute::Bold),
        Cell::new("Var2").add_attribute(Attribute::Bold),
        Cell::new("Corr").add_attribute(Attribute::Bold),
    ]);

    for triple in triples {
        table.add_row(vec![
            Cell::new(&triple.var1),
            Cell::new(&triple.var2),
            Cell::new(triple.label()).set_alignment(CellAlignment::Right),
        ]);
    }

    indent(&table)
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.4}", value)
    }
}

fn indent(table: &Table) -> String {
    table
        .to_string()
        .lines()
        .map(|line| format!("    {}\n", line))
        .collect()
}
