mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridstats")]
#[command(about = "Collect game matchup statistics into flat CSV files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect a batch of game ids into a CSV file
    Collect(commands::collect::CollectArgs),
    /// Fetch a single game id and print its record
    Probe(commands::probe::ProbeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gridstats=info".parse().unwrap())
                .add_directive("gridstats_lib=info".parse().unwrap())
                .add_directive("gridstats_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Collect(args) => commands::collect::run(args).await?,
        Commands::Probe(args) => commands::probe::run(args).await?,
    }

    Ok(())
}
