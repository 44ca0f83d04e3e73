//! Batch collection subcommand.

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use gridstats_lib::validation::{validate_concurrency, validate_id_range, validate_jitter};
use gridstats_lib::{persist, Collector, WriteMode};

/// Batch collection CLI arguments.
#[derive(Args)]
pub struct CollectArgs {
    /// First game id of the range
    #[arg(long, conflicts_with = "ids")]
    pub start: Option<u64>,

    /// Number of ids to walk from --start
    #[arg(long, requires = "start")]
    pub count: Option<u64>,

    /// Explicit comma-separated game ids (alternative to --start/--count)
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<u64>,

    /// Output CSV path
    #[arg(long)]
    pub out: PathBuf,

    /// Append to the output file instead of overwriting it
    #[arg(long)]
    pub append: bool,

    /// Maximum in-flight page fetches
    #[arg(long, default_value_t = 10)]
    pub concurrency: usize,

    /// Minimum pre-fetch delay in milliseconds
    #[arg(long, default_value_t = 200)]
    pub jitter_min_ms: u64,

    /// Maximum pre-fetch delay in milliseconds
    #[arg(long, default_value_t = 500)]
    pub jitter_max_ms: u64,

    /// Override the matchup page base URL (GRIDSTATS_BASE_URL also works)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Run a batch collection and persist the aggregate.
pub async fn run(args: &CollectArgs) -> Result<()> {
    let concurrency = validate_concurrency(args.concurrency)?;
    let jitter = validate_jitter(args.jitter_min_ms, args.jitter_max_ms)?;

    let ids = if !args.ids.is_empty() {
        args.ids.clone()
    } else {
        match (args.start, args.count) {
            (Some(start), Some(count)) => validate_id_range(start, count)?,
            _ => bail!("provide either --ids or both --start and --count"),
        }
    };

    let client = super::build_client(args.base_url.as_deref());
    let collector = Collector::new(client, concurrency, jitter);

    let stop = collector.stop_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Stop requested, draining in-flight fetches...");
            stop.store(true, Ordering::Relaxed);
        }
    });

    eprintln!(
        "Collecting {} game ids with concurrency {}",
        ids.len(),
        concurrency
    );

    let pb = ProgressBar::new(ids.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} ({eta}) {msg}",
        )
        .unwrap(),
    );
    pb.set_message("fetching matchup pages...");

    let batch = collector
        .collect(&ids, |stats| {
            pb.set_message(format!("{} ok, {} empty", stats.succeeded, stats.empty));
            pb.inc(1);
        })
        .await;

    pb.finish_with_message(format!(
        "{} attempted, {} records, {} empty",
        batch.stats.attempted,
        batch.stats.succeeded + batch.stats.schema_mismatched,
        batch.stats.empty
    ));

    let mode = if args.append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    };
    persist(&batch, &args.out, mode)?;

    eprintln!();
    eprintln!(
        "Collection complete: {} attempted, {} records, {} empty, {} schema-mismatched",
        batch.stats.attempted,
        batch.stats.succeeded,
        batch.stats.empty,
        batch.stats.schema_mismatched
    );
    eprintln!(
        "Wrote {} rows to {}",
        batch.records.len(),
        args.out.display()
    );

    Ok(())
}
