mod adapter;
mod renderer;
mod terminal;
#[cfg(test)]
mod tests;

pub use adapter::{present, Dashboard, Metric, Series, Table, DASHBOARD_TITLE};
pub use renderer::Renderer;
pub use terminal::TerminalRenderer;
