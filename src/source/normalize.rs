//! Raw wire records → `Announcement`.
//!
//! Strict by contract: a record missing `symbol`, `time`, or `importance`,
//! or carrying a time that is not `HH:MM:SS`, fails the whole fetch. Rows
//! are never skipped; a quietly shortened batch would change the day's
//! leaderboard without anyone noticing.

use crate::error::{CalendarError, Result};
use crate::models::{Announcement, RawStock};
use chrono::NaiveTime;

pub fn normalise_symbol(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Parse a strict `HH:MM:SS` time-of-day. Zero-padded 24-hour form only,
/// so lexicographic order on the text matches chronological order.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.len() != 8 {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M:%S").ok()
}

pub fn raw_stock_to_announcement(raw: &RawStock) -> Result<Announcement> {
    let symbol = raw
        .symbol
        .as_deref()
        .map(normalise_symbol)
        .filter(|s| !s.is_empty())
        .ok_or(CalendarError::MissingField("symbol"))?;

    let time_str = raw
        .time
        .as_deref()
        .ok_or(CalendarError::MissingField("time"))?;

    let time = parse_time(time_str).ok_or_else(|| CalendarError::InvalidTime {
        symbol: symbol.clone(),
        value: time_str.to_string(),
    })?;

    let importance = raw
        .importance
        .ok_or(CalendarError::MissingField("importance"))?;

    Ok(Announcement {
        symbol,
        time,
        importance,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
