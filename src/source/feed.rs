//! Network calendar feed.
//!
//! The upstream API takes a half-open day range (`date_from = date`,
//! `date_to = date + 1 day`) and answers with a payload keyed by date:
//! `{"earnings": {"YYYY-MM-DD": {"stocks": [...]}}}`. A missing key for
//! the requested date is a fetch error, not an empty day.

use crate::config::FeedConfig;
use crate::error::{CalendarError, Result};
use crate::models::{Announcement, FeedResponse};
use crate::source::CalendarSource;
use crate::source::http_client::HttpClient;
use crate::source::normalize::raw_stock_to_announcement;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use tracing::{debug, info};
use url::Url;

pub struct EarningsFeed {
    client: HttpClient,
    base_url: String,
}

impl EarningsFeed {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for a one-day calendar window starting at `date`.
    fn calendar_url(&self, date: NaiveDate) -> Result<Url> {
        let (start, end) = day_range(date);
        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("date_from", start.format("%Y-%m-%d").to_string()),
                ("date_to", end.format("%Y-%m-%d").to_string()),
            ],
        )?;
        Ok(url)
    }
}

#[async_trait]
impl CalendarSource for EarningsFeed {
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<Announcement>> {
        let url = self.calendar_url(date)?;
        info!("Fetching earnings calendar for {}", date);

        let payload: FeedResponse = self.client.get_json(&url).await?;

        let key = date.format("%Y-%m-%d").to_string();
        let day = payload
            .earnings
            .get(&key)
            .ok_or(CalendarError::MissingDate(date))?;

        debug!("{}: {} raw stock entries", date, day.stocks.len());

        day.stocks.iter().map(raw_stock_to_announcement).collect()
    }
}

/// Half-open request window for one calendar day.
pub fn day_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    (date, date + Duration::days(1))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
