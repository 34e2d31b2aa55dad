//! Query tokenization.

/// Splits a raw query into lower-cased search terms.
///
/// Whitespace runs separate terms; nothing else does. Punctuation stays part
/// of the term it touches, so `"t-shirt"` is a single token.
///
/// An empty or all-whitespace query yields no tokens. Callers treat that as
/// "no active search" rather than "match nothing".
pub fn tokenize(query: &str) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
