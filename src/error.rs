//! Error taxonomy for the earnings calendar.
//!
//! Fetch-class errors (the upstream is unreachable, answers with a
//! non-success status, or its payload lacks the requested date) propagate to
//! the caller unchanged. Malformed-record errors are never recovered by
//! skipping rows: a silently shortened batch would corrupt the day's
//! leaderboard.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[derive(Error, Debug)]
pub enum CalendarError {
    /// HTTP request failed (connect, timeout, body read, JSON decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Feed payload carries no entry for the requested date
    #[error("no earnings data for {0} in upstream payload")]
    MissingDate(NaiveDate),

    /// Relational source failed
    #[error("database error: {0}")]
    Database(#[from] duckdb::Error),

    /// URL construction failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// A record is missing a required field
    #[error("announcement record is missing `{0}`")]
    MissingField(&'static str),

    /// A record's time-of-day is not a valid HH:MM:SS string
    #[error("invalid time `{value}` for {symbol}: expected HH:MM:SS")]
    InvalidTime { symbol: String, value: String },
}
