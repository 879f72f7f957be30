//! End-to-end site data generation pipeline.
//!
//! Loads the lexicon, transforms every row, and writes both JSON artifacts.
//! The whole run is synchronous and single-shot: it either completes fully
//! or fails and must be re-run after fixing the input.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::io::{ArtifactWriter, LexiconLoader};
use crate::transformations::transform_rows;

/// Configuration for a site data generation run.
///
/// Paths are explicit so tests can point the pipeline at temporary
/// locations.
#[derive(Debug, Clone)]
pub struct SiteDataConfig {
    pub lexicon_csv: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SiteDataConfig {
    /// Conventional repository-relative paths: the lexicon CSV at the root,
    /// artifacts under `docs/data` for the static site.
    fn default() -> Self {
        Self {
            lexicon_csv: PathBuf::from("Emoji_Lexicon_1.5.csv"),
            output_dir: Path::new("docs").join("data"),
        }
    }
}

/// Result of a completed generation run
#[derive(Debug, Clone)]
pub struct SiteDataReport {
    pub summary_rows: usize,
    pub expanded_rows: usize,
    pub output_dir: PathBuf,
}

/// Main site data generation pipeline
pub struct SiteDataPipeline {
    config: SiteDataConfig,
}

impl SiteDataPipeline {
    /// Create a pipeline with the default configuration
    pub fn new() -> Self {
        Self {
            config: SiteDataConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: SiteDataConfig) -> Self {
        Self { config }
    }

    /// Run the full generation.
    ///
    /// Any failure aborts the run; the output files are only meaningful
    /// after a fully successful run.
    pub fn run(&self) -> Result<SiteDataReport> {
        // Step 1: Load the lexicon
        let loaded = LexiconLoader::load_from_csv(&self.config.lexicon_csv)?;
        info!(
            "Loaded {} lexicon rows ({} votes)",
            loaded.rows.len(),
            loaded.total_votes
        );

        // Step 2: Transform every row into summary + expansion
        let (summaries, votes) = transform_rows(&loaded.rows)?;

        // Step 3: Write both artifacts
        let writer = ArtifactWriter::new(self.config.output_dir.clone());
        writer.write(&summaries, &votes)?;

        Ok(SiteDataReport {
            summary_rows: summaries.len(),
            expanded_rows: votes.len(),
            output_dir: self.config.output_dir.clone(),
        })
    }
}

impl Default for SiteDataPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to generate the site data artifacts
pub fn generate_site_data(config: SiteDataConfig) -> Result<SiteDataReport> {
    SiteDataPipeline::with_config(config).run()
}
