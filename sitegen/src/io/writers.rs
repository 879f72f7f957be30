use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::core::domain::{ExpandedVote, SummaryRecord};

/// File name of the per-emoji summary artifact.
pub const SUMMARY_FILE: &str = "emoji_summary.json";

/// File name of the per-vote expansion artifact.
pub const EXPANDED_FILE: &str = "emoji_scores_expanded.json";

/// Paths of the artifacts produced by a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub summary_path: PathBuf,
    pub expanded_path: PathBuf,
}

/// Writes the two site data artifacts into an output directory.
///
/// Both files are fully rewritten on every run. Any failure aborts the run;
/// there is no partial-success mode.
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Serialize and write both artifacts, creating the output directory if
    /// needed. The summary is pretty-printed for diffability; the expansion
    /// is compact because it carries one entry per vote.
    pub fn write(
        &self,
        summaries: &[SummaryRecord],
        votes: &[ExpandedVote],
    ) -> Result<WrittenArtifacts> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let summary_path = self.output_dir.join(SUMMARY_FILE);
        let summary_json =
            serde_json::to_string_pretty(summaries).context("Failed to serialize summary records")?;
        fs::write(&summary_path, summary_json)
            .with_context(|| format!("Failed to write {}", summary_path.display()))?;

        let expanded_path = self.output_dir.join(EXPANDED_FILE);
        let expanded_json =
            serde_json::to_string(votes).context("Failed to serialize expanded votes")?;
        fs::write(&expanded_path, expanded_json)
            .with_context(|| format!("Failed to write {}", expanded_path.display()))?;

        Ok(WrittenArtifacts {
            summary_path,
            expanded_path,
        })
    }
}
