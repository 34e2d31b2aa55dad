//! Filtering and ranking of catalog items against a query.

use super::scoring::ScoreWeights;
use super::tokenize::tokenize;
use crate::item::SearchableItem;
use serde::Serialize;
use std::time::Instant;

/// An item paired with the score it earned for a query.
///
/// Borrows the item; the caller's data is never modified.
#[derive(Debug, Serialize)]
pub struct ScoredItem<'a, T> {
    pub score: u32,
    pub item: &'a T,
}

// Manual impls so `T` need not be Clone/Copy: only a reference is held.
impl<T> Clone for ScoredItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScoredItem<'_, T> {}

/// Ranks items by relevance to a query.
///
/// Stateless apart from its weights: every call tokenizes, scores, filters
/// and sorts from scratch, so the same inputs always give the same output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ranker {
    weights: ScoreWeights,
}

impl Ranker {
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score a single item against pre-tokenized terms.
    pub fn score<T: SearchableItem + ?Sized>(&self, item: &T, tokens: &[String]) -> u32 {
        self.weights.score(item, tokens)
    }

    /// Returns the items relevant to `query`, most relevant first.
    ///
    /// A query with no tokens returns every item in its original order.
    /// Otherwise items scoring zero are dropped, and items with equal scores
    /// keep their input order.
    pub fn rank<'a, T: SearchableItem>(&self, items: &'a [T], query: &str) -> Vec<&'a T> {
        self.rank_scored(items, query)
            .into_iter()
            .map(|scored| scored.item)
            .collect()
    }

    /// Like [`rank`](Self::rank), keeping each item's score.
    ///
    /// With no tokens, every item is returned with a score of 0.
    pub fn rank_scored<'a, T: SearchableItem>(
        &self,
        items: &'a [T],
        query: &str,
    ) -> Vec<ScoredItem<'a, T>> {
        let start = Instant::now();
        let tokens = tokenize(query);

        if tokens.is_empty() {
            return items
                .iter()
                .map(|item| ScoredItem { score: 0, item })
                .collect();
        }

        let mut scored: Vec<_> = items
            .iter()
            .map(|item| ScoredItem {
                score: self.weights.score(item, &tokens),
                item,
            })
            .filter(|scored| scored.score > 0)
            .collect();

        // `sort_by` is stable, which keeps ties in input order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Ranked {} items against {} tokens: {} matched in {:?}",
            items.len(),
            tokens.len(),
            scored.len(),
            start.elapsed()
        );

        scored
    }
}

/// Rank items with the default weights. See [`Ranker::rank`].
pub fn rank_items<'a, T: SearchableItem>(items: &'a [T], query: &str) -> Vec<&'a T> {
    Ranker::default().rank(items, query)
}

/// Rank items with the default weights, keeping scores. See [`Ranker::rank_scored`].
pub fn rank_scored<'a, T: SearchableItem>(
    items: &'a [T],
    query: &str,
) -> Vec<ScoredItem<'a, T>> {
    Ranker::default().rank_scored(items, query)
}
