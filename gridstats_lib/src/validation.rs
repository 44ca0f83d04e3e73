//! Input validation for batch runs. All checks run before any network
//! activity.

use crate::error::GridStatsError;
use crate::task::JitterRange;

pub const MAX_CONCURRENCY: usize = 64;

/// Validate the worker pool size (must be 1..=64).
pub fn validate_concurrency(concurrency: usize) -> Result<usize, GridStatsError> {
    if !(1..=MAX_CONCURRENCY).contains(&concurrency) {
        return Err(GridStatsError::InvalidInput(format!(
            "concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY, concurrency
        )));
    }
    Ok(concurrency)
}

/// Validate a start/count id range and expand it into the id list.
pub fn validate_id_range(start: u64, count: u64) -> Result<Vec<u64>, GridStatsError> {
    if count == 0 {
        return Err(GridStatsError::InvalidInput(
            "count must be >= 1".to_string(),
        ));
    }
    if start.checked_add(count - 1).is_none() {
        return Err(GridStatsError::InvalidInput(format!(
            "id range {}..+{} overflows",
            start, count
        )));
    }
    Ok((0..count).map(|offset| start + offset).collect())
}

/// Validate a jitter delay range (min must not exceed max).
pub fn validate_jitter(min_ms: u64, max_ms: u64) -> Result<JitterRange, GridStatsError> {
    if min_ms > max_ms {
        return Err(GridStatsError::InvalidInput(format!(
            "jitter minimum {}ms exceeds maximum {}ms",
            min_ms, max_ms
        )));
    }
    Ok(JitterRange::new(min_ms, max_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Concurrency bounds --

    #[test]
    fn concurrency_valid() {
        assert_eq!(validate_concurrency(1).unwrap(), 1);
        assert_eq!(validate_concurrency(10).unwrap(), 10);
        assert_eq!(validate_concurrency(64).unwrap(), 64);
    }

    #[test]
    fn concurrency_zero_rejected() {
        assert!(validate_concurrency(0).is_err());
    }

    #[test]
    fn concurrency_over_max_rejected() {
        assert!(validate_concurrency(65).is_err());
    }

    // -- Id ranges --

    #[test]
    fn id_range_expands() {
        assert_eq!(validate_id_range(100, 3).unwrap(), vec![100, 101, 102]);
    }

    #[test]
    fn id_range_single() {
        assert_eq!(validate_id_range(7, 1).unwrap(), vec![7]);
    }

    #[test]
    fn id_range_zero_count_rejected() {
        assert!(validate_id_range(100, 0).is_err());
    }

    #[test]
    fn id_range_overflow_rejected() {
        assert!(validate_id_range(u64::MAX, 2).is_err());
    }

    #[test]
    fn id_range_up_to_max_accepted() {
        assert_eq!(
            validate_id_range(u64::MAX, 1).unwrap(),
            vec![u64::MAX]
        );
    }

    // -- Jitter bounds --

    #[test]
    fn jitter_valid() {
        assert_eq!(validate_jitter(200, 500).unwrap(), JitterRange::new(200, 500));
    }

    #[test]
    fn jitter_zero_allowed() {
        assert_eq!(validate_jitter(0, 0).unwrap(), JitterRange::NONE);
    }

    #[test]
    fn jitter_inverted_rejected() {
        assert!(validate_jitter(500, 200).is_err());
    }
}
