//! Markov Text — second-order Markov chain text generation.
//!
//! Builds a chain mapping every pair of consecutive words in a source text to
//! the words observed to follow it, then random-walks that chain to produce
//! new text that statistically resembles the source.

pub mod core;
pub mod schema;
