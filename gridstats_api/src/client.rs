//! HTTP client for fetching game matchup pages.

use std::time::Duration;

use url::Url;

use crate::{user_agent::get_user_agent, FetchError};

const DEFAULT_BASE_URL: &str = "https://www.espn.com/nfl/matchup";

/// HTTP client for the matchup pages.
///
/// Sends requests with browser-like headers and a randomized user agent to
/// avoid being blocked. Each request builds a fresh `reqwest::Client` with
/// a 30-second timeout.
pub struct Client {
    /// Base URL for matchup pages. The game id is appended as a `gameId`
    /// query parameter.
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production matchup pages.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Renders the page URL for a game id.
    pub fn game_url(&self, game_id: u64) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Invalid base URL '{}': {}", self.base_url, e);
            FetchError::RequestFailed { game_id }
        })?;
        url.query_pairs_mut()
            .append_pair("gameId", &game_id.to_string());
        Ok(url)
    }

    /// Fetches the raw HTML body of one game page.
    ///
    /// A non-success status, connection failure, or timeout yields a
    /// `FetchError` carrying the game id. Never caches.
    pub async fn fetch_game(&self, game_id: u64) -> Result<String, FetchError> {
        let url = self.game_url(game_id)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                FetchError::RequestFailed { game_id }
            })?;
        let resp = client
            .get(url)
            .header("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("accept-language", "en-US,en;q=0.9")
            .header("sec-fetch-dest", "document")
            .header("sec-fetch-mode", "navigate")
            .header("sec-fetch-site", "none")
            .header("upgrade-insecure-requests", "1")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get game {}: {}", game_id, e);
                FetchError::RequestFailed { game_id }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read body for game {}: {}", game_id, e);
            FetchError::RequestFailed { game_id }
        })?;

        if !status.is_success() {
            tracing::error!(
                "Game {} request failed with status {}: {}",
                game_id,
                status,
                truncate_body(&body)
            );
            return Err(FetchError::HttpStatus {
                game_id,
                status: status.as_u16(),
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
