//! Fuzzy search and relevance ranking for inventory lists.
//!
//! The pipeline runs one way: the query is tokenized, each item is scored
//! against the tokens, zero scores are dropped, and the rest are stably
//! sorted by score. Nothing is cached between calls.

// Module declarations
pub(crate) mod fuzzy;
pub(crate) mod rank;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use fuzzy::is_fuzzy_match;
pub use rank::{Ranker, ScoredItem, rank_items, rank_scored};
pub use scoring::{ScoreWeights, score};
pub use tokenize::tokenize;
