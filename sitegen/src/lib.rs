//! Emoji sentiment lexicon site data backend.
//!
//! Converts the emoji sentiment lexicon CSV into the two JSON artifacts the
//! visualization front-end consumes: a per-emoji summary and a flattened
//! per-vote expansion. The numeric core is the largest-remainder rebalancer
//! in [`algorithms`]; everything else is loading, transformation, and
//! artifact writing around it.

pub mod algorithms;
pub mod core;
pub mod io;
pub mod parsing;
pub mod pipeline;
pub mod transformations;
