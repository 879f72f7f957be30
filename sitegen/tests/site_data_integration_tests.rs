//! Integration tests for the full site data generation pipeline.
//!
//! These tests run the generator end to end against temporary directories
//! and check the artifact-level guarantees:
//! 1. Balanced counts sum exactly to each row's vote count
//! 2. The per-vote expansion matches the balanced counts
//! 3. Repeated runs produce byte-identical output
//! 4. Failures abort before any output is produced

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use emolex_sitegen::core::domain::{ExpandedVote, ScoreBucket, SummaryRecord};
use emolex_sitegen::io::{EXPANDED_FILE, SUMMARY_FILE};
use emolex_sitegen::pipeline::{generate_site_data, SiteDataConfig};
use tempfile::tempdir;

const HEADER: &str = "emoji,sentiment_score,count,pos_ratio,neg_ratio,neu_ratio,\
percent_very_pos,percent_pos,percent_somewhat_pos,percent_very_neg,percent_neg,\
percent_somewhat_neg,confidence_interval";

// ==================== Helper Functions ====================

fn write_lexicon_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let csv_path = dir.join("lexicon.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&csv_path, content).unwrap();
    csv_path
}

fn run_pipeline(rows: &[&str]) -> (tempfile::TempDir, Vec<SummaryRecord>, Vec<ExpandedVote>) {
    let dir = tempdir().unwrap();
    let lexicon_csv = write_lexicon_csv(dir.path(), rows);
    let output_dir = dir.path().join("data");

    let report = generate_site_data(SiteDataConfig {
        lexicon_csv,
        output_dir: output_dir.clone(),
    })
    .unwrap();

    let summaries: Vec<SummaryRecord> =
        serde_json::from_str(&fs::read_to_string(output_dir.join(SUMMARY_FILE)).unwrap()).unwrap();
    let votes: Vec<ExpandedVote> =
        serde_json::from_str(&fs::read_to_string(output_dir.join(EXPANDED_FILE)).unwrap()).unwrap();

    assert_eq!(report.summary_rows, summaries.len());
    assert_eq!(report.expanded_rows, votes.len());

    (dir, summaries, votes)
}

// ==================== Tests ====================

#[test]
fn generates_both_artifacts_with_consistent_counts() {
    let (_dir, summaries, votes) = run_pipeline(&[
        "😂,0.22,10,0.4,0.3,0.3,0.1,0.2,0.1,0.05,0.15,0.1,0.05",
        "👍,0.65,37,0.8,0.1,0.1,0.4,0.3,0.1,0.02,0.03,0.05,0.04",
    ]);

    assert_eq!(summaries.len(), 2);
    assert_eq!(votes.len(), 47);

    // Per-row: balanced counts sum exactly to the vote count
    for summary in &summaries {
        assert_eq!(summary.counts.total(), summary.count, "{}", summary.emoji);
    }

    // Per emoji and score, expansion cardinality equals the balanced count
    let mut grouped: HashMap<(String, u8), u64> = HashMap::new();
    for vote in &votes {
        *grouped.entry((vote.emoji.clone(), vote.score)).or_default() += 1;
    }
    for summary in &summaries {
        for bucket in ScoreBucket::ALL {
            let expanded = grouped
                .get(&(summary.emoji.clone(), bucket.score()))
                .copied()
                .unwrap_or(0);
            assert_eq!(expanded, summary.counts.get(bucket));
        }
    }
}

#[test]
fn tie_breaking_is_deterministic() {
    // Targets are [0.5, 1.5, 1.0, 3.0, 1.0, 2.0, 1.0]; floors sum to 9 and
    // the .5 tie between scores 1 and 2 resolves to the earlier bucket.
    let (_dir, summaries, _votes) =
        run_pipeline(&["😂,0.22,10,0.4,0.3,0.3,0.1,0.2,0.1,0.05,0.15,0.1,0.05"]);

    let counts = &summaries[0].counts;
    assert_eq!(counts.get(ScoreBucket::VeryNegative), 1);
    assert_eq!(counts.get(ScoreBucket::Negative), 1);
    assert_eq!(counts.get(ScoreBucket::SomewhatNegative), 1);
    assert_eq!(counts.get(ScoreBucket::Neutral), 3);
    assert_eq!(counts.get(ScoreBucket::SomewhatPositive), 1);
    assert_eq!(counts.get(ScoreBucket::Positive), 2);
    assert_eq!(counts.get(ScoreBucket::VeryPositive), 1);
}

#[test]
fn zero_count_row_yields_no_votes() {
    let (_dir, summaries, votes) = run_pipeline(&[
        "😐,0.0,0,0,0,1,0,0,0,0,0,0,0",
        "👍,0.65,4,0.8,0.1,0.1,0.5,0.25,0.05,0.02,0.03,0.05,0.04",
    ]);

    assert_eq!(summaries[0].counts.total(), 0);
    assert_eq!(votes.len(), 4);
    assert!(votes.iter().all(|v| v.emoji == "👍"));
}

#[test]
fn summary_names_come_from_the_emoji_catalog() {
    let (_dir, summaries, _votes) = run_pipeline(&[
        "😀,0.3,5,0.6,0.2,0.2,0.3,0.2,0.1,0.05,0.05,0.1,0.03",
        "zz,0.3,5,0.6,0.2,0.2,0.3,0.2,0.1,0.05,0.05,0.1,0.03",
    ]);

    assert_eq!(summaries[0].name, "grinning face");
    // Glyphs outside the catalog fall back to the raw value
    assert_eq!(summaries[1].name, "zz");
}

#[test]
fn row_order_and_vote_order_follow_the_input() {
    let (_dir, summaries, votes) = run_pipeline(&[
        "😂,0.22,2,0.4,0.3,0.3,0.5,0.0,0.0,0.0,0.0,0.5,0.05",
        "👍,0.65,3,0.8,0.1,0.1,1.0,0.0,0.0,0.0,0.0,0.0,0.04",
    ]);

    assert_eq!(summaries[0].emoji, "😂");
    assert_eq!(summaries[1].emoji, "👍");

    assert_eq!(votes.len(), 5);
    assert!(votes[..2].iter().all(|v| v.emoji == "😂"));
    assert!(votes[2..].iter().all(|v| v.emoji == "👍"));

    // Within a row, votes are in ascending score order
    let first_scores: Vec<u8> = votes[..2].iter().map(|v| v.score).collect();
    assert_eq!(first_scores, vec![3, 7]);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let rows = [
        "😂,0.22,10,0.4,0.3,0.3,0.1,0.2,0.1,0.05,0.15,0.1,0.05",
        "👍,0.65,37,0.8,0.1,0.1,0.4,0.3,0.1,0.02,0.03,0.05,0.04",
        "😐,0.0,0,0,0,1,0,0,0,0,0,0,0",
    ];

    let dir = tempdir().unwrap();
    let lexicon_csv = write_lexicon_csv(dir.path(), &rows);

    let mut outputs = Vec::new();
    for run in ["first", "second"] {
        let output_dir = dir.path().join(run);
        generate_site_data(SiteDataConfig {
            lexicon_csv: lexicon_csv.clone(),
            output_dir: output_dir.clone(),
        })
        .unwrap();

        outputs.push((
            fs::read(output_dir.join(SUMMARY_FILE)).unwrap(),
            fs::read(output_dir.join(EXPANDED_FILE)).unwrap(),
        ));
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn missing_input_file_aborts_before_any_output() {
    let dir = tempdir().unwrap();
    let output_dir = dir.path().join("data");

    let result = generate_site_data(SiteDataConfig {
        lexicon_csv: dir.path().join("nope.csv"),
        output_dir: output_dir.clone(),
    });

    assert!(result.is_err());
    assert!(!output_dir.exists(), "No output should be produced");
}

#[test]
fn invalid_count_aborts_the_run() {
    let dir = tempdir().unwrap();
    let lexicon_csv = write_lexicon_csv(
        dir.path(),
        &["😂,0.22,10.5,0.4,0.3,0.3,0.1,0.2,0.1,0.05,0.15,0.1,0.05"],
    );

    let result = generate_site_data(SiteDataConfig {
        lexicon_csv,
        output_dir: dir.path().join("data"),
    });

    assert!(result.is_err());
    let error_msg = format!("{:#}", result.unwrap_err());
    assert!(error_msg.contains("Invalid count"), "{}", error_msg);
}
