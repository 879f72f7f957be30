//! Domain models for emoji sentiment survey data.
//!
//! This module provides the core data structures of the generator: one
//! lexicon row per emoji, the fixed seven-bucket sentiment scale, and the
//! balanced integer counts derived from the fractional bucket ratios.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of sentiment buckets a vote count is partitioned into.
pub const NUM_BUCKETS: usize = 7;

/// One of the seven fixed sentiment categories, ordered from very negative
/// (score 1) to very positive (score 7).
///
/// # Examples
///
/// ```
/// use emolex_sitegen::core::domain::ScoreBucket;
///
/// assert_eq!(ScoreBucket::VeryNegative.score(), 1);
/// assert_eq!(ScoreBucket::Neutral.score(), 4);
/// assert_eq!(ScoreBucket::from_score(7), Some(ScoreBucket::VeryPositive));
/// assert_eq!(ScoreBucket::from_score(8), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreBucket {
    VeryNegative,
    Negative,
    SomewhatNegative,
    Neutral,
    SomewhatPositive,
    Positive,
    VeryPositive,
}

impl ScoreBucket {
    /// All buckets in ascending score order.
    pub const ALL: [ScoreBucket; NUM_BUCKETS] = [
        ScoreBucket::VeryNegative,
        ScoreBucket::Negative,
        ScoreBucket::SomewhatNegative,
        ScoreBucket::Neutral,
        ScoreBucket::SomewhatPositive,
        ScoreBucket::Positive,
        ScoreBucket::VeryPositive,
    ];

    /// Ordinal score label for this bucket, 1 through 7.
    pub fn score(self) -> u8 {
        self as u8 + 1
    }

    /// Bucket for an ordinal score label, if it is in range.
    pub fn from_score(score: u8) -> Option<ScoreBucket> {
        match score {
            1..=7 => Some(Self::ALL[(score - 1) as usize]),
            _ => None,
        }
    }
}

/// One emoji's aggregated sentiment survey, as read from the lexicon table.
///
/// The seven bucket ratio fields (`percent_very_neg` through
/// `percent_very_pos`, with `neu_ratio` doubling as the neutral bucket) are
/// upstream-rounded percentages and are not required to sum to exactly 1.0.
/// Multiplying them by `count` therefore gives fractional vote targets,
/// which is what forces the rebalancing step downstream.
///
/// Rows are read once from the source table and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconRow {
    pub emoji: String,
    pub sentiment_score: f64,
    pub count: u64,
    pub pos_ratio: f64,
    pub neg_ratio: f64,
    pub neu_ratio: f64,
    pub percent_very_pos: f64,
    pub percent_pos: f64,
    pub percent_somewhat_pos: f64,
    pub percent_very_neg: f64,
    pub percent_neg: f64,
    pub percent_somewhat_neg: f64,
    pub confidence_interval: f64,
}

impl LexiconRow {
    /// Fraction of this emoji's votes falling in the given sentiment bucket.
    pub fn bucket_ratio(&self, bucket: ScoreBucket) -> f64 {
        match bucket {
            ScoreBucket::VeryNegative => self.percent_very_neg,
            ScoreBucket::Negative => self.percent_neg,
            ScoreBucket::SomewhatNegative => self.percent_somewhat_neg,
            ScoreBucket::Neutral => self.neu_ratio,
            ScoreBucket::SomewhatPositive => self.percent_somewhat_pos,
            ScoreBucket::Positive => self.percent_pos,
            ScoreBucket::VeryPositive => self.percent_very_pos,
        }
    }

    /// Fractional vote targets per bucket, in fixed bucket order.
    pub fn bucket_targets(&self) -> [f64; NUM_BUCKETS] {
        let mut targets = [0.0; NUM_BUCKETS];
        for (i, bucket) in ScoreBucket::ALL.iter().enumerate() {
            targets[i] = self.bucket_ratio(*bucket) * self.count as f64;
        }
        targets
    }
}

/// Integer vote counts per sentiment bucket for a single emoji.
///
/// Invariant: the values sum exactly to the source row's `count`. Keyed by
/// ordinal score so it serializes as a JSON object with keys `"1"` through
/// `"7"` in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalancedCounts(BTreeMap<u8, u64>);

impl BalancedCounts {
    /// Build from per-bucket allocations in fixed bucket order.
    pub fn from_allocations(allocations: [u64; NUM_BUCKETS]) -> Self {
        Self(
            ScoreBucket::ALL
                .iter()
                .zip(allocations)
                .map(|(bucket, n)| (bucket.score(), n))
                .collect(),
        )
    }

    /// Count for one bucket.
    pub fn get(&self, bucket: ScoreBucket) -> u64 {
        self.0.get(&bucket.score()).copied().unwrap_or(0)
    }

    /// Total votes across all buckets.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Iterate `(score, count)` pairs in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.0.iter().map(|(score, n)| (*score, *n))
    }
}

/// Per-emoji summary emitted to `emoji_summary.json`.
///
/// Field order matches the JSON key order the front-end expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub emoji: String,
    pub name: String,
    pub sentiment_score: f64,
    pub count: u64,
    pub pos_ratio: f64,
    pub neg_ratio: f64,
    pub neu_ratio: f64,
    pub percent_very_pos: f64,
    pub percent_pos: f64,
    pub percent_somewhat_pos: f64,
    pub percent_very_neg: f64,
    pub percent_neg: f64,
    pub percent_somewhat_neg: f64,
    pub confidence_interval: f64,
    pub counts: BalancedCounts,
}

impl SummaryRecord {
    /// Combine a lexicon row with its derived display name and balanced counts.
    pub fn new(row: &LexiconRow, name: String, counts: BalancedCounts) -> Self {
        Self {
            emoji: row.emoji.clone(),
            name,
            sentiment_score: row.sentiment_score,
            count: row.count,
            pos_ratio: row.pos_ratio,
            neg_ratio: row.neg_ratio,
            neu_ratio: row.neu_ratio,
            percent_very_pos: row.percent_very_pos,
            percent_pos: row.percent_pos,
            percent_somewhat_pos: row.percent_somewhat_pos,
            percent_very_neg: row.percent_very_neg,
            percent_neg: row.percent_neg,
            percent_somewhat_neg: row.percent_somewhat_neg,
            confidence_interval: row.confidence_interval,
            counts,
        }
    }
}

/// A single vote unit emitted to `emoji_scores_expanded.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedVote {
    pub emoji: String,
    pub score: u8,
}
