//! Per-row transformation of lexicon records into output artifacts.
//!
//! # Modules
//!
//! - [`expand`]: rebalance a row's bucket ratios into exact integer counts
//!   and flatten them into one record per vote
//! - [`naming`]: derive human-readable display names for emoji glyphs

pub mod expand;
pub mod naming;

pub use expand::{balanced_counts_for, transform_row, transform_rows};
pub use naming::display_name;
