pub mod database;
pub mod feed;
pub mod http_client;
pub mod normalize;

use crate::config::{AppConfig, SourceKind};
use crate::error::Result;
use crate::models::Announcement;
use async_trait::async_trait;
use chrono::NaiveDate;

// ── Source trait ──────────────────────────────────────────────────────────────

/// Swappable calendar source abstraction. Both implementations normalize
/// into the same `Announcement` shape before anything downstream sees them.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// All announcement records for `date`, one round-trip, no retry.
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<Announcement>>;
}

/// Build the source the configuration selects.
pub fn from_config(config: &AppConfig) -> Result<Box<dyn CalendarSource>> {
    Ok(match config.source {
        SourceKind::Feed => Box::new(feed::EarningsFeed::new(&config.feed)?),
        SourceKind::Database => Box::new(database::DatabaseSource::new(&config.database)),
    })
}
