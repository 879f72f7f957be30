//! High-level data loading and artifact writing.
//!
//! This module combines the parsers with domain model construction on the
//! way in, and handles output directory setup plus JSON serialization on
//! the way out.

pub mod loaders;
pub mod writers;


pub use loaders::{LexiconLoadResult, LexiconLoader};
pub use writers::{ArtifactWriter, WrittenArtifacts, EXPANDED_FILE, SUMMARY_FILE};
