//! Greedy subsequence matching.

/// Returns true if every character of `token` appears in `text` in order.
///
/// The characters need not be contiguous: `"bst"` matches `"blackshirt"`.
/// This is a single left-to-right pass with no backtracking, comparing
/// Unicode scalar values exactly. Case folding is the caller's job.
///
/// An empty token matches any text.
pub fn is_fuzzy_match(text: &str, token: &str) -> bool {
    let mut wanted = token.chars().peekable();

    for c in text.chars() {
        match wanted.peek() {
            Some(&next) if next == c => {
                wanted.next();
            }
            Some(_) => {}
            None => return true,
        }
    }

    wanted.peek().is_none()
}
