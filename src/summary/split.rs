//! Time-of-day partition of a day's announcements.

use crate::models::Announcement;
use chrono::NaiveTime;

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("12:00:00 is a valid time")
}

/// Partition a day's records into (morning, afternoon).
///
/// A record belongs to the afternoon iff its time is strictly after
/// 12:00:00; exactly 12:00:00 counts as morning. Relative order within
/// each bucket is preserved from the input, and every record lands in
/// exactly one bucket.
pub fn split(records: Vec<Announcement>) -> (Vec<Announcement>, Vec<Announcement>) {
    let cutoff = noon();
    records.into_iter().partition(|r| r.time <= cutoff)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
