//! Rank a catalog dump against a query and render the results.

use crate::{
    catalog::Catalog,
    config::RankConfig,
    error::Result,
    item::CatalogItem,
    search::ScoredItem,
};
use clap::Args;
use std::{fmt::Write as _, path::PathBuf};

/// Parameters for the rank command
#[derive(Debug, Clone, Args)]
pub struct RankRequest {
    /// Catalog dump: a JSON array of items, a page, or an array of pages
    pub catalog: PathBuf,
    /// Search query (empty lists the whole catalog)
    #[arg(default_value = "")]
    pub query: String,
    /// Maximum number of results to show (overrides the config file)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
    /// Show each result's relevance score
    #[arg(long)]
    pub scores: bool,
    /// Print full records as JSON instead of a title list
    #[arg(long)]
    pub json: bool,
    /// TOML file with a result limit and scoring weights
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Load the catalog, rank it, and render the results.
pub fn execute_rank(request: &RankRequest) -> Result<String> {
    let config = match &request.config {
        Some(path) => RankConfig::load(path)?,
        None => RankConfig::default(),
    };
    let catalog = Catalog::load(&request.catalog)?;

    let ranked = config
        .ranker()
        .rank_scored(catalog.items(), &request.query);
    let limit = request.limit.or(config.limit).unwrap_or(ranked.len());
    let shown = &ranked[..limit.min(ranked.len())];

    if request.json {
        return render_json(shown, request.scores);
    }

    if catalog.is_empty() {
        return Ok("Catalog is empty.\n".to_string());
    }

    Ok(render_text(
        shown,
        ranked.len(),
        &request.query,
        request.scores,
    ))
}

/// One line per result, numbered from 1.
pub(crate) fn render_text(
    shown: &[ScoredItem<'_, CatalogItem>],
    matched: usize,
    query: &str,
    scores: bool,
) -> String {
    let mut output = String::new();

    if matched == 0 {
        let _ = writeln!(output, "No items match \"{}\"", query.trim());
        return output;
    }

    for (rank, scored) in shown.iter().enumerate() {
        let title = match scored.item.title.trim() {
            "" => "(untitled)",
            title => title,
        };
        let _ = write!(output, "{:>3}. {}", rank + 1, title);
        if scores {
            let _ = write!(output, "  [score {}]", scored.score);
        }
        output.push('\n');
    }

    if matched > shown.len() {
        let _ = writeln!(output, "  ... and {} more", matched - shown.len());
    }

    output
}

/// Full records as a JSON array; `{score, item}` objects when scores are requested.
pub(crate) fn render_json(shown: &[ScoredItem<'_, CatalogItem>], scores: bool) -> Result<String> {
    let mut output = if scores {
        serde_json::to_string_pretty(shown)?
    } else {
        let items: Vec<_> = shown.iter().map(|scored| scored.item).collect();
        serde_json::to_string_pretty(&items)?
    };
    output.push('\n');
    Ok(output)
}
