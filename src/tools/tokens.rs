//! Show how a query is split into search terms.

use crate::search::tokenize;
use clap::Args;

/// Parameters for the tokens command
#[derive(Debug, Clone, Args)]
pub struct TokensRequest {
    /// Query to tokenize
    pub query: String,
}

/// One token per line, or a note when the query has none.
pub fn execute_tokens(request: &TokensRequest) -> String {
    let tokens = tokenize(&request.query);
    if tokens.is_empty() {
        return "(no tokens: every item would be listed)\n".to_string();
    }

    let mut output = tokens.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn run(query: &str) -> String {
        execute_tokens(&TokensRequest {
            query: query.to_string(),
        })
    }

    #[test]
    fn test_tokens_listed() {
        check!(run("  Red  SHIRT ") == "red\nshirt\n");
    }

    #[test]
    fn test_empty_query() {
        check!(run("   ").starts_with("(no tokens"));
    }
}
