//! Parsers for the emoji sentiment lexicon source table.
//!
//! # Example
//!
//! ```no_run
//! use emolex_sitegen::parsing::csv_parser::parse_lexicon_csv_to_rows;
//! use std::path::Path;
//!
//! let rows = parse_lexicon_csv_to_rows(Path::new("Emoji_Lexicon_1.5.csv"))
//!     .expect("Failed to parse lexicon");
//! ```

pub mod csv_parser;
