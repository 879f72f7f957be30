//! Emoji lexicon site data generator.
//!
//! One-shot batch binary: reads the lexicon CSV from the working directory
//! and regenerates the two JSON artifacts consumed by the visualization
//! front-end, overwriting any previous output.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate-site-data
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use emolex_sitegen::pipeline::SiteDataPipeline;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let report = SiteDataPipeline::new().run()?;

    info!(
        "Wrote {} summary rows and {} expanded rows to {}",
        report.summary_rows,
        report.expanded_rows,
        report.output_dir.display()
    );

    Ok(())
}
