mod engine;
mod models;
mod presentation;
mod session;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{stdin, BufReader};
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::presentation::TerminalRenderer;
use crate::session::DashboardSession;
use crate::storage::{DatasetLoader, SnapshotStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    //NOTE: The dataset location is fixed, the only argument is the optional log level.
    let log_level = std::env::args().nth(1)
        .map(|s| parse_log_level(&s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let storage = Arc::new(SnapshotStorage::new());
    let loader = DatasetLoader::new(storage);

    let dataset = spawn_blocking(move || loader.load()).await??;

    info!("Dashboard ready with {} transactions", dataset.len());

    let renderer = TerminalRenderer::new(BufWriter::new(stdout().lock()));
    let mut session = DashboardSession::new(dataset, renderer);

    session.run(BufReader::new(stdin())).await?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the dashboard itself, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
