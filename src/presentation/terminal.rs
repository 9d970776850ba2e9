use std::io;
use std::io::Write;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Row, Table as TextTable};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::presentation::{Metric, Renderer, Series, Table};

const DEFAULT_BAR_WIDTH: usize = 40;

/// Draws dashboards as plain text tables onto any writer, usually stdout.
pub struct TerminalRenderer<W: Write> {
    output: W,
    bar_width: usize
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            bar_width: DEFAULT_BAR_WIDTH
        }
    }

    #[cfg(test)]
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.output
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "## {}", title)
    }

    /// Writes a three-column table of label, value and a drawn mark, or a "no data" line.
    fn chart(&mut self, series: &Series, extra_column: &str, mark: impl Fn(&Decimal) -> String) -> io::Result<()> {
        self.heading(series.title)?;

        if series.points.is_empty() {
            return writeln!(self.output, "No data for the current filters");
        }

        let mut table = TextTable::new();
        table.load_preset(UTF8_FULL)
            .set_header(vec![series.label_column, series.value_column, extra_column]);

        for point in &series.points {
            table.add_row(Row::from(vec![
                Cell::new(&point.label),
                Cell::new(&point.value_label).set_alignment(CellAlignment::Right),
                Cell::new(mark(&point.value)),
            ]));
        }

        writeln!(self.output, "{}", table)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "# {}", title)
    }

    fn render_summary(&mut self, summary: &str) -> io::Result<()> {
        writeln!(self.output, "{}", summary)
    }

    fn render_metrics(&mut self, metrics: &[Metric]) -> io::Result<()> {
        let mut table = TextTable::new();
        table.load_preset(UTF8_FULL)
            .set_header(metrics.iter().map(|metric| metric.label).collect::<Vec<_>>());
        table.add_row(Row::from(metrics.iter()
            .map(|metric| Cell::new(&metric.value).set_alignment(CellAlignment::Right))
            .collect::<Vec<_>>()));

        writeln!(self.output)?;
        writeln!(self.output, "{}", table)
    }

    fn render_line_chart(&mut self, series: &Series) -> io::Result<()> {
        let max = maximum(series);
        let width = self.bar_width;

        self.chart(series, "trend", |value| {
            format!("{}●", " ".repeat(scaled(*value, max, width)))
        })
    }

    fn render_bar_chart(&mut self, series: &Series) -> io::Result<()> {
        let max = maximum(series);
        let width = self.bar_width;

        self.chart(series, "bar", |value| "█".repeat(scaled(*value, max, width)))
    }

    fn render_pie_chart(&mut self, series: &Series) -> io::Result<()> {
        let total = series.points.iter().fold(Decimal::ZERO, |total, point| total.saturating_add(point.value));

        self.chart(series, "share", |value| {
            if total.is_zero() {
                return "0.0%".to_string();
            }
            format!("{:.1}%", (*value * Decimal::ONE_HUNDRED / total).round_dp(1))
        })
    }

    fn render_table(&mut self, table: &Table) -> io::Result<()> {
        self.heading(table.title)?;

        if table.rows.is_empty() {
            return writeln!(self.output, "No data for the current filters");
        }

        let mut text_table = TextTable::new();
        text_table.load_preset(UTF8_FULL)
            .set_header(table.columns.clone());

        for row in &table.rows {
            text_table.add_row(row.clone());
        }

        writeln!(self.output, "{}", text_table)
    }

    fn render_notice(&mut self, notice: &str) -> io::Result<()> {
        writeln!(self.output, "{}", notice)?;
        self.output.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

fn maximum(series: &Series) -> Decimal {
    series.points.iter().map(|point| point.value).max().unwrap_or(Decimal::ZERO)
}

fn scaled(value: Decimal, max: Decimal, width: usize) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }

    (value / max * Decimal::from(width)).round().to_usize().unwrap_or(0)
}
