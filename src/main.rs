//! prd-fix - repairs known formatting mistakes in the KungfuMaster PRD
//!
//! Reads the document, applies a fixed list of literal substitutions and
//! writes the result back to the same path.

mod app;
mod core;

use anyhow::{Context, Result};
use app::FixApp;
use crate::core::config::FixConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting prd-fix v{}", env!("CARGO_PKG_VERSION"));

    let config = FixConfig::load().context("Failed to load configuration")?;
    let app = FixApp::new(config);

    let report = app.run(&mut std::io::stdout().lock())?;
    tracing::info!(
        "Finished {} (changed: {})",
        report.path.display(),
        report.changed
    );

    Ok(())
}
