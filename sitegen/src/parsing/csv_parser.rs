use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::LexiconRow;

/// Numeric lexicon columns. All are cast to Float64 after inference because
/// integer-looking CSV columns may be inferred as i64.
const FLOAT_COLUMNS: [&str; 12] = [
    "sentiment_score",
    "count",
    "pos_ratio",
    "neg_ratio",
    "neu_ratio",
    "percent_very_pos",
    "percent_pos",
    "percent_somewhat_pos",
    "percent_very_neg",
    "percent_neg",
    "percent_somewhat_neg",
    "confidence_interval",
];

/// Parse the lexicon CSV file into a Polars DataFrame
pub fn parse_lexicon_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse CSV into DataFrame")?;

    // Get existing column names
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    // Cast columns to expected types if they were inferred incorrectly
    let mut lazy_df = df.lazy();

    // emoji should be String
    if column_names.contains(&"emoji".to_string()) {
        lazy_df = lazy_df.with_column(col("emoji").cast(DataType::String));
    }

    for col_name in FLOAT_COLUMNS {
        if column_names.contains(&col_name.to_string()) {
            lazy_df = lazy_df.with_column(
                when(col(col_name).is_not_null())
                    .then(col(col_name).cast(DataType::Float64))
                    .otherwise(lit(NULL).cast(DataType::Float64))
                    .alias(col_name),
            );
        }
    }

    let df = lazy_df
        .collect()
        .context("Failed to cast columns to expected types")?;

    Ok(df)
}

/// Parse the lexicon CSV and convert to LexiconRow structures
pub fn parse_lexicon_csv_to_rows(csv_path: &Path) -> Result<Vec<LexiconRow>> {
    let df = parse_lexicon_csv(csv_path)?;
    dataframe_to_rows(&df)
}

/// Convert a lexicon DataFrame to LexiconRow structures
pub fn dataframe_to_rows(df: &DataFrame) -> Result<Vec<LexiconRow>> {
    let height = df.height();

    // Extract columns; every lexicon column is required
    let emojis = df.column("emoji")?.str()?;
    let sentiment_scores = df.column("sentiment_score")?.f64()?;
    let counts = df.column("count")?.f64()?;
    let pos_ratios = df.column("pos_ratio")?.f64()?;
    let neg_ratios = df.column("neg_ratio")?.f64()?;
    let neu_ratios = df.column("neu_ratio")?.f64()?;
    let percent_very_pos = df.column("percent_very_pos")?.f64()?;
    let percent_pos = df.column("percent_pos")?.f64()?;
    let percent_somewhat_pos = df.column("percent_somewhat_pos")?.f64()?;
    let percent_very_neg = df.column("percent_very_neg")?.f64()?;
    let percent_neg = df.column("percent_neg")?.f64()?;
    let percent_somewhat_neg = df.column("percent_somewhat_neg")?.f64()?;
    let confidence_intervals = df.column("confidence_interval")?.f64()?;

    let mut rows = Vec::with_capacity(height);

    for i in 0..height {
        let emoji = emojis
            .get(i)
            .with_context(|| format!("Missing emoji at row {}", i))?
            .to_string();

        let count_raw = counts
            .get(i)
            .with_context(|| format!("Missing count at row {}", i))?;

        let row = LexiconRow {
            emoji,
            sentiment_score: sentiment_scores
                .get(i)
                .with_context(|| format!("Missing sentiment_score at row {}", i))?,
            count: validate_count(count_raw, i)?,
            pos_ratio: pos_ratios
                .get(i)
                .with_context(|| format!("Missing pos_ratio at row {}", i))?,
            neg_ratio: neg_ratios
                .get(i)
                .with_context(|| format!("Missing neg_ratio at row {}", i))?,
            neu_ratio: neu_ratios
                .get(i)
                .with_context(|| format!("Missing neu_ratio at row {}", i))?,
            percent_very_pos: percent_very_pos
                .get(i)
                .with_context(|| format!("Missing percent_very_pos at row {}", i))?,
            percent_pos: percent_pos
                .get(i)
                .with_context(|| format!("Missing percent_pos at row {}", i))?,
            percent_somewhat_pos: percent_somewhat_pos
                .get(i)
                .with_context(|| format!("Missing percent_somewhat_pos at row {}", i))?,
            percent_very_neg: percent_very_neg
                .get(i)
                .with_context(|| format!("Missing percent_very_neg at row {}", i))?,
            percent_neg: percent_neg
                .get(i)
                .with_context(|| format!("Missing percent_neg at row {}", i))?,
            percent_somewhat_neg: percent_somewhat_neg
                .get(i)
                .with_context(|| format!("Missing percent_somewhat_neg at row {}", i))?,
            confidence_interval: confidence_intervals
                .get(i)
                .with_context(|| format!("Missing confidence_interval at row {}", i))?,
        };

        rows.push(row);
    }

    Ok(rows)
}

/// The source stores `count` as a numeric column; anything that is not a
/// non-negative whole number is rejected rather than silently truncated.
fn validate_count(raw: f64, row: usize) -> Result<u64> {
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 || raw > u64::MAX as f64 {
        anyhow::bail!(
            "Invalid count {} at row {}: expected a non-negative integer",
            raw,
            row
        );
    }
    Ok(raw as u64)
}
