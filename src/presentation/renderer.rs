use std::io;

use crate::presentation::{Dashboard, Metric, Series, Table, DASHBOARD_TITLE};

/// The drawing surface a dashboard is handed to.
pub trait Renderer {
    fn render_title(&mut self, title: &str) -> io::Result<()>;
    fn render_summary(&mut self, summary: &str) -> io::Result<()>;
    fn render_metrics(&mut self, metrics: &[Metric]) -> io::Result<()>;
    fn render_line_chart(&mut self, series: &Series) -> io::Result<()>;
    fn render_bar_chart(&mut self, series: &Series) -> io::Result<()>;
    fn render_pie_chart(&mut self, series: &Series) -> io::Result<()>;
    fn render_table(&mut self, table: &Table) -> io::Result<()>;
    /// Free-form text such as help or a rejected command.
    fn render_notice(&mut self, notice: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

impl Dashboard {
    /// Draws the whole dashboard. The detail table is only drawn when requested.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, show_details: bool) -> io::Result<()> {
        renderer.render_title(DASHBOARD_TITLE)?;
        renderer.render_summary(&self.summary)?;
        renderer.render_metrics(&self.metrics)?;
        renderer.render_line_chart(&self.sales_trend)?;
        renderer.render_bar_chart(&self.top_products)?;
        renderer.render_pie_chart(&self.gender_distribution)?;

        if show_details {
            renderer.render_table(&self.details)?;
        }

        renderer.flush()
    }
}
