//! Error types for fetching and table extraction.

/// Errors that can occur when fetching a game page.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The HTTP request failed (network error, timeout, or unreadable body).
    #[error("request for game {game_id} failed")]
    RequestFailed { game_id: u64 },
    /// The site returned a non-success status for this game id.
    #[error("game {game_id} returned status {status}")]
    HttpStatus { game_id: u64, status: u16 },
}

impl FetchError {
    /// The game id the failed request was for.
    pub fn game_id(&self) -> u64 {
        match self {
            Self::RequestFailed { game_id } | Self::HttpStatus { game_id, .. } => *game_id,
        }
    }
}

/// Errors that can occur when extracting tables from a page body.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The body was empty or whitespace. Anything else is handled by the
    /// HTML5 parser, which never rejects input.
    #[error("document is empty")]
    EmptyDocument,
}
