//! CLI subcommand implementations.

pub mod collect;
pub mod probe;

use gridstats_lib::gridstats_api::Client;

/// Builds the page client. A `--base-url` flag wins over the
/// `GRIDSTATS_BASE_URL` environment variable; without either the
/// production site is used.
pub(crate) fn build_client(base_url: Option<&str>) -> Client {
    match base_url
        .map(str::to_string)
        .or_else(|| std::env::var("GRIDSTATS_BASE_URL").ok())
    {
        Some(base) => Client::with_base_url(&base),
        None => Client::new(),
    }
}
