use crate::tools::{RankRequest, TokensRequest};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "inventory-rank")]
#[command(about = "Search and rank a seller's inventory list", long_about = None)]
pub struct Cli {
    /// Log ranking details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog items by relevance to a query
    Rank(RankRequest),
    /// Print the search terms a query splits into
    Tokens(TokensRequest),
}
