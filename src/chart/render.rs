//! Chart renderers
//!
//! A renderer receives each chart of the report with a short name. Rendering
//! is best effort: the report logs renderer failures and carries on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;
use serde_json::Value;

use super::Chart;

/// Displays or stores a chart.
pub trait ChartRenderer {
    fn render(&mut self, name: &str, chart: &Chart) -> Result<()>;
}

/// Prints a title and a table preview of each panel's data to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    pub preview_rows: usize,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self { preview_rows: 10 }
    }
}

impl ConsoleRenderer {
    /// Text that [`ChartRenderer::render`] prints, without printing it.
    pub fn format(&self, chart: &Chart) -> String {
        let mut out = String::new();

        for (title, data) in chart.panels() {
            out.push_str(&format!(
                "    {} {}\n",
                style("▌").cyan(),
                style(title.unwrap_or("(untitled)")).white().bold()
            ));

            let fields = data.fields();
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(
                fields
                    .iter()
                    .map(|f| Cell::new(f).add_attribute(Attribute::Bold))
                    .collect::<Vec<_>>(),
            );

            for row in data.values.iter().take(self.preview_rows) {
                table.add_row(
                    fields
                        .iter()
                        .map(|f| Cell::new(display_value(row.get(f))))
                        .collect::<Vec<_>>(),
                );
            }

            for line in table.to_string().lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }

            if data.len() > self.preview_rows {
                out.push_str(&format!(
                    "    {}\n",
                    style(format!("... {} more rows", data.len() - self.preview_rows)).dim()
                ));
            }
        }

        out
    }
}

impl ChartRenderer for ConsoleRenderer {
    fn render(&mut self, _name: &str, chart: &Chart) -> Result<()> {
        print!("{}", self.format(chart));
        Ok(())
    }
}

/// Writes each chart as `<dir>/<name>.vl.json`.
#[derive(Debug, Clone)]
pub struct VegaLiteWriter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl VegaLiteWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in render order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartRenderer for VegaLiteWriter {
    fn render(&mut self, name: &str, chart: &Chart) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create chart directory: {}", self.dir.display()))?;

        let path = self.dir.join(format!("{}.vl.json", file_stem(name)));
        let spec = chart
            .to_vega_lite()
            .with_context(|| format!("Failed to serialize chart '{}'", name))?;

        let file = std::fs::File::create(&path)
            .with_context(|| format!("Failed to create chart file: {}", path.display()))?;
        serde_json::to_writer_pretty(file, &spec)
            .with_context(|| format!("Failed to write chart file: {}", path.display()))?;

        self.written.push(path);
        Ok(())
    }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{:.4}", f),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
