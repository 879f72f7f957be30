use anyhow::Result;

use crate::algorithms::rebalance_counts;
use crate::core::domain::{
    BalancedCounts, ExpandedVote, LexiconRow, SummaryRecord, NUM_BUCKETS,
};
use crate::transformations::naming::display_name;

/// Transform one lexicon row into its summary record and per-vote expansion.
///
/// The seven fractional vote targets are rebalanced into integers summing
/// exactly to the row's count, then flattened into one [`ExpandedVote`] per
/// unit, buckets in fixed score order. Pure over its inputs.
pub fn transform_row(row: &LexiconRow) -> Result<(SummaryRecord, Vec<ExpandedVote>)> {
    let counts = balanced_counts_for(row)?;
    let summary = SummaryRecord::new(row, display_name(&row.emoji), counts.clone());
    let votes = expand_votes(&row.emoji, &counts);
    Ok((summary, votes))
}

/// Transform the whole lexicon, preserving input row order.
///
/// The expanded votes are row-major: all votes of the first row, then the
/// second, and so on.
pub fn transform_rows(rows: &[LexiconRow]) -> Result<(Vec<SummaryRecord>, Vec<ExpandedVote>)> {
    let mut summaries = Vec::with_capacity(rows.len());
    let mut votes = Vec::new();

    for row in rows {
        let (summary, row_votes) = transform_row(row)?;
        summaries.push(summary);
        votes.extend(row_votes);
    }

    Ok((summaries, votes))
}

/// Rebalanced per-bucket integer counts for one row.
pub fn balanced_counts_for(row: &LexiconRow) -> Result<BalancedCounts> {
    let targets = row.bucket_targets();
    let balanced = rebalance_counts(&targets, row.count)?;

    let mut allocations = [0u64; NUM_BUCKETS];
    allocations.copy_from_slice(&balanced);
    Ok(BalancedCounts::from_allocations(allocations))
}

fn expand_votes(emoji: &str, counts: &BalancedCounts) -> Vec<ExpandedVote> {
    let mut votes = Vec::with_capacity(counts.total() as usize);
    for (score, n) in counts.iter() {
        for _ in 0..n {
            votes.push(ExpandedVote {
                emoji: emoji.to_string(),
                score,
            });
        }
    }
    votes
}
