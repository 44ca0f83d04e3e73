//! Error types for the library layer.

use std::fmt;

use gridstats_api::{ExtractError, FetchError};

use crate::sink::PersistError;

/// Errors produced by the library layer, wrapping upstream fetch and
/// extraction errors and adding persistence and input validation failures.
#[derive(Debug)]
pub enum GridStatsError {
    /// A page fetch failed.
    Fetch(FetchError),
    /// Table extraction failed.
    Extract(ExtractError),
    /// Writing the aggregate to disk failed.
    Persist(PersistError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for GridStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Fetch error: {}", e),
            Self::Extract(e) => write!(f, "Extract error: {}", e),
            Self::Persist(e) => write!(f, "Persist error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for GridStatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Extract(e) => Some(e),
            Self::Persist(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<FetchError> for GridStatsError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<ExtractError> for GridStatsError {
    fn from(e: ExtractError) -> Self {
        Self::Extract(e)
    }
}

impl From<PersistError> for GridStatsError {
    fn from(e: PersistError) -> Self {
        Self::Persist(e)
    }
}
