//! Bounded-concurrency batch collection across many game ids.
//!
//! Uses the Semaphore + JoinSet + mpsc pattern: workers fan out under a
//! fixed permit count and stream outcomes to a single collecting loop that
//! owns the aggregate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use gridstats_api::Client;

use crate::record::GameRecord;
use crate::task::{fetch_record, JitterRange, TaskOutcome};

/// Attempt interval between progress log lines.
const PROGRESS_EVERY: usize = 25;

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchStats {
    /// Ids a worker actually tried (skipped ids after a stop request are
    /// not counted).
    pub attempted: usize,
    /// Ids that produced nothing usable.
    pub empty: usize,
    /// Records surviving schema selection.
    pub succeeded: usize,
    /// Records excluded for disagreeing with the batch schema.
    pub schema_mismatched: usize,
}

/// The aggregate of one batch run: surviving records in game-id order, the
/// established column schema, and the run counters.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub records: Vec<GameRecord>,
    pub schema: Vec<String>,
    pub stats: BatchStats,
}

/// Collects records for many game ids under bounded concurrency.
pub struct Collector {
    client: Arc<Client>,
    concurrency: usize,
    jitter: JitterRange,
    stop: Arc<AtomicBool>,
}

impl Collector {
    pub fn new(client: Client, concurrency: usize, jitter: JitterRange) -> Self {
        Self {
            client: Arc::new(client),
            concurrency,
            jitter,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for requesting a graceful stop. Ids not yet dispatched are
    /// skipped; in-flight fetches finish within the client timeout.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Runs the batch. `on_progress` is invoked once per completed id with
    /// the counters so far.
    ///
    /// Workers share no mutable state; the collecting loop is the sole
    /// owner of the aggregate, so results are neither dropped nor
    /// duplicated regardless of completion interleaving. Records are
    /// ordered by game id afterwards, the majority column set becomes the
    /// batch schema, and disagreeing records are excluded and counted.
    pub async fn collect<F>(&self, ids: &[u64], mut on_progress: F) -> BatchResult
    where
        F: FnMut(&BatchStats),
    {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let (tx, mut rx) = mpsc::channel::<(u64, TaskOutcome)>(self.concurrency * 2);
        let mut join_set = JoinSet::new();

        for &game_id in ids {
            let sem = Arc::clone(&semaphore);
            let sender = tx.clone();
            let client = Arc::clone(&self.client);
            let stop = Arc::clone(&self.stop);
            let jitter = self.jitter;

            join_set.spawn(async move {
                let _permit = sem.acquire().await.expect("semaphore closed");
                if stop.load(Ordering::Relaxed) {
                    return;
                }
                let outcome = fetch_record(&client, game_id, jitter).await;
                let _ = sender.send((game_id, outcome)).await;
            });
        }
        drop(tx);

        let mut stats = BatchStats::default();
        let mut collected: Vec<GameRecord> = Vec::new();

        while let Some((game_id, outcome)) = rx.recv().await {
            stats.attempted += 1;
            match outcome {
                TaskOutcome::Record(record) => {
                    stats.succeeded += 1;
                    collected.push(*record);
                }
                TaskOutcome::Empty => {
                    stats.empty += 1;
                    tracing::debug!("game {}: no record", game_id);
                }
            }
            if stats.attempted % PROGRESS_EVERY == 0 {
                tracing::info!(
                    "progress: {} attempted, {} records, {} empty",
                    stats.attempted,
                    stats.succeeded,
                    stats.empty
                );
            }
            on_progress(&stats);
        }

        collected.sort_by_key(|r| r.game_id);

        let schema = majority_schema(&collected);
        let produced = collected.len();
        let mut records = Vec::with_capacity(produced);
        for record in collected {
            if record.columns == schema {
                records.push(record);
            } else {
                tracing::warn!(
                    "game {}: {} columns disagree with batch schema of {}, excluding",
                    record.game_id,
                    record.columns.len(),
                    schema.len()
                );
            }
        }
        stats.schema_mismatched = produced - records.len();
        stats.succeeded = records.len();

        BatchResult {
            records,
            schema,
            stats,
        }
    }
}

/// The most common column set among the records. Ties break toward the set
/// seen first, which after sorting is the one carried by the earliest game
/// id. Empty input yields an empty schema.
fn majority_schema(records: &[GameRecord]) -> Vec<String> {
    let mut counts: Vec<(&[String], usize)> = Vec::new();
    for record in records {
        match counts
            .iter_mut()
            .find(|(cols, _)| *cols == record.columns.as_slice())
        {
            Some((_, n)) => *n += 1,
            None => counts.push((record.columns.as_slice(), 1)),
        }
    }

    let mut best: Option<(&[String], usize)> = None;
    for (cols, n) in counts {
        match best {
            Some((_, best_n)) if n <= best_n => {}
            _ => best = Some((cols, n)),
        }
    }
    best.map(|(cols, _)| cols.to_vec()).unwrap_or_default()
}
