use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::LexiconRow;
use crate::parsing::csv_parser;

/// Result of loading the lexicon table
#[derive(Debug)]
pub struct LexiconLoadResult {
    pub rows: Vec<LexiconRow>,
    pub total_votes: u64,
}

impl LexiconLoadResult {
    pub fn new(rows: Vec<LexiconRow>) -> Self {
        let total_votes = rows.iter().map(|r| r.count).sum();
        Self { rows, total_votes }
    }
}

/// Unified interface for loading the emoji sentiment lexicon
pub struct LexiconLoader;

impl LexiconLoader {
    /// Load the lexicon from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> Result<LexiconLoadResult> {
        let rows = csv_parser::parse_lexicon_csv_to_rows(csv_path)
            .with_context(|| format!("Failed to load lexicon from {}", csv_path.display()))?;

        Ok(LexiconLoadResult::new(rows))
    }
}
