use clap::Parser;
use inventory_rank::cli::{Cli, Commands};
use inventory_rank::tools::{execute_rank, execute_tokens};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    inventory_rank::tracing::init(cli.verbose);

    let output = match &cli.command {
        Commands::Rank(request) => execute_rank(request).inspect_err(|e| {
            tracing::error!("Ranking failed: {:#}", e);
        })?,
        Commands::Tokens(request) => execute_tokens(request),
    };

    std::io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
