//! Relevance scoring for catalog items.
//!
//! Each query token is checked against the lower-cased title and description
//! of an item. The checks are independent, so a single token can earn several
//! weights at once, and an item's score is the sum over all tokens.

use super::fuzzy::is_fuzzy_match;
use crate::item::SearchableItem;
use serde::{Deserialize, Serialize};

/// Per-rule weights applied by the scorer.
///
/// Defaults:
/// - 10: Title contains the token
/// - 5: Title starts with the token (on top of the above)
/// - 5: Description contains the token
/// - 3: Token is a subsequence of the title
/// - 2: Token is a subsequence of the description
///
/// The numbers are hand-tuned. Only their ordering carries meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreWeights {
    pub title_substring: u32,
    pub title_prefix: u32,
    pub description_substring: u32,
    pub title_fuzzy: u32,
    pub description_fuzzy: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_substring: 10,
            title_prefix: 5,
            description_substring: 5,
            title_fuzzy: 3,
            description_fuzzy: 2,
        }
    }
}

impl ScoreWeights {
    /// Score one token against already lower-cased fields.
    pub(crate) fn token_score(&self, title: &str, description: &str, token: &str) -> u32 {
        [
            (title.contains(token), self.title_substring),
            (title.starts_with(token), self.title_prefix),
            (description.contains(token), self.description_substring),
            (is_fuzzy_match(title, token), self.title_fuzzy),
            (is_fuzzy_match(description, token), self.description_fuzzy),
        ]
        .into_iter()
        .filter(|&(hit, _)| hit)
        .fold(0u32, |score, (_, weight)| score.saturating_add(weight))
    }

    /// Score an item against a token list.
    ///
    /// Returns 0 for an empty token list. Telling "no query" apart from
    /// "nothing relevant" is the ranker's job, not the scorer's.
    pub fn score<T: SearchableItem + ?Sized>(&self, item: &T, tokens: &[String]) -> u32 {
        if tokens.is_empty() {
            return 0;
        }

        let title = item.title().to_lowercase();
        let description = item.description().unwrap_or_default().to_lowercase();

        tokens.iter().fold(0u32, |total, token| {
            total.saturating_add(self.token_score(&title, &description, token))
        })
    }
}

/// Score an item with the default weights.
pub fn score<T: SearchableItem + ?Sized>(item: &T, tokens: &[String]) -> u32 {
    ScoreWeights::default().score(item, tokens)
}
