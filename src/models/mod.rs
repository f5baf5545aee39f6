use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── Announcement ──────────────────────────────────────────────────────────────

/// One company's earnings announcement for a given day.
/// Immutable once fetched; built by a source adapter, consumed read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    pub symbol: String,
    pub time: NaiveTime,
    /// Ordinal newsworthiness score from the upstream feed; higher sorts first.
    pub importance: i64,
}

// ── Time-of-day bucket ────────────────────────────────────────────────────────

/// "Before market open" vs "after market close" partition of a trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Am,
    Pm,
}

impl Bucket {
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Am => "am",
            Bucket::Pm => "pm",
        }
    }

    /// Fixed sentence rendered when a bucket has no announcements at all.
    pub fn empty_sentence(self) -> &'static str {
        match self {
            Bucket::Am => "There are no notable earnings before the bell.",
            Bucket::Pm => "There are no notable earnings after the bell.",
        }
    }

    /// Heading text used by the markup renderer.
    pub fn heading(self) -> &'static str {
        match self {
            Bucket::Am => "Before the Bell",
            Bucket::Pm => "After the Bell",
        }
    }
}

// ── Ranked selection ──────────────────────────────────────────────────────────

/// Output of the ranker for one bucket: up to eight symbols in importance
/// order, plus the count of announcements beyond the cutoff.
/// `others` is `Some(total - 8)` exactly when the bucket held more than
/// eight records, `None` otherwise (never `Some(0)`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedSelection {
    pub symbols: Vec<String>,
    pub others: Option<usize>,
}

// ── Day summary ───────────────────────────────────────────────────────────────

/// Final rendered pair of newsletter strings for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub am: String,
    pub pm: String,
}

// ── Raw wire types ────────────────────────────────────────────────────────────

/// Feed payload: `{"earnings": {"2024-07-24": {"stocks": [...]}}}`
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub earnings: HashMap<String, FeedDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedDay {
    #[serde(default)]
    pub stocks: Vec<RawStock>,
}

/// One stock entry as it arrives off the wire. Every field is optional so
/// that absence surfaces as a malformed-record error during normalization
/// instead of a deserialization failure for the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStock {
    pub symbol: Option<String>,
    pub time: Option<String>,
    pub importance: Option<i64>,
}
