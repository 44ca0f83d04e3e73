mod client;
mod errors;
mod tables;
pub mod user_agent;

pub use self::client::Client;
pub use self::errors::{ExtractError, FetchError};
pub use self::tables::{
    extract, MatchupRow, MatchupTable, RawTable, SummaryTable, TableSet, ABSENT_POINTS,
    ABSENT_TEAM,
};
