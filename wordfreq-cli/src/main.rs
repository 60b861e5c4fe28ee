//! wordfreq command-line entry point

use clap::Parser;
use wordfreq_cli::commands::Commands;

/// Word-frequency statistics over a text corpus, benchmarked across
/// concurrency levels
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench(args) => args.execute(),
        Commands::Stats(args) => args.execute(),
        Commands::Generate(args) => args.execute(),
    }
}
