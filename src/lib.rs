pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod item;
pub mod search;
pub mod tools;
pub mod tracing;

pub use catalog::{Catalog, CatalogPage};
pub use config::RankConfig;
pub use error::{CatalogError, ConfigError};
pub use item::{CatalogItem, SearchableItem};
pub use search::{
    Ranker, ScoreWeights, ScoredItem, is_fuzzy_match, rank_items, rank_scored, score, tokenize,
};
