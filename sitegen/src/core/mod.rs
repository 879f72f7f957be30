//! Core domain models for the emoji sentiment lexicon.
//!
//! This module defines the data structures that flow through the generator:
//! lexicon rows read from the source table, balanced per-bucket counts, and
//! the two output record shapes.

pub mod domain;
