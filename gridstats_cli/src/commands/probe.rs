//! Single-id probe subcommand.

use anyhow::Result;
use clap::Args;

use gridstats_lib::{fetch_record, JitterRange, TaskOutcome};

use crate::output::{self, OutputFormat};

/// Probe CLI arguments.
#[derive(Args)]
pub struct ProbeArgs {
    /// Game id to fetch
    pub game_id: u64,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub output: String,

    /// Override the matchup page base URL (GRIDSTATS_BASE_URL also works)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Fetch one game id and print its reshaped record.
pub async fn run(args: &ProbeArgs) -> Result<()> {
    let format = match args.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = super::build_client(args.base_url.as_deref());

    match fetch_record(&client, args.game_id, JitterRange::NONE).await {
        TaskOutcome::Record(record) => match format {
            OutputFormat::Table => output::print_record_table(&record),
            OutputFormat::Json => output::print_record_json(&record)?,
        },
        TaskOutcome::Empty => eprintln!("No data for game {}", args.game_id),
    }

    Ok(())
}
