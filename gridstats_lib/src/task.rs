//! The per-id fetch task: fetch, extract, reshape.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use gridstats_api::Client;

use crate::record::GameRecord;
use crate::reshape::reshape;

/// Pre-fetch delay range in milliseconds, sampled uniformly per request.
/// `NONE` disables the delay entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl JitterRange {
    /// No delay. The default for tests.
    pub const NONE: Self = Self { min_ms: 0, max_ms: 0 };

    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            Duration::from_millis(self.min_ms)
        } else {
            Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..self.max_ms))
        }
    }
}

/// What one id produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    /// The page yielded a reshaped record.
    Record(Box<GameRecord>),
    /// Nothing usable behind this id. Covers fetch failures, unparseable
    /// bodies, and pages without tables; the cause is logged, not carried.
    Empty,
}

/// Fetches one game page and reshapes it into a record.
///
/// Never returns an error: every failure mode collapses into
/// [`TaskOutcome::Empty`] so one bad id cannot take down a batch.
pub async fn fetch_record(client: &Client, game_id: u64, jitter: JitterRange) -> TaskOutcome {
    let delay = jitter.sample();
    if !delay.is_zero() {
        sleep(delay).await;
    }

    let body = match client.fetch_game(game_id).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!("game {}: fetch failed: {}", game_id, err);
            return TaskOutcome::Empty;
        }
    };

    let tables = match gridstats_api::extract(&body) {
        Ok(tables) => tables,
        Err(err) => {
            tracing::warn!("game {}: extraction failed: {}", game_id, err);
            return TaskOutcome::Empty;
        }
    };

    if tables.is_empty() {
        tracing::debug!("game {}: page has no tables", game_id);
        return TaskOutcome::Empty;
    }

    let record = reshape(game_id, &tables.summary(), &tables.matchup());
    TaskOutcome::Record(Box::new(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_samples_zero() {
        assert!(JitterRange::NONE.sample().is_zero());
    }

    #[test]
    fn degenerate_range_is_a_fixed_delay() {
        let jitter = JitterRange::new(300, 300);
        assert_eq!(jitter.sample(), Duration::from_millis(300));
    }

    #[test]
    fn sample_stays_inside_the_range() {
        let jitter = JitterRange::new(200, 500);
        for _ in 0..100 {
            let d = jitter.sample();
            assert!(d >= Duration::from_millis(200));
            assert!(d < Duration::from_millis(500));
        }
    }
}
