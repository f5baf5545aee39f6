//! Pipeline orchestrator: ties source → split → rank → format together.
//!
//! ## Entry points
//!
//! `plain_summary(date)` — newsletter mode: bare comma-joined strings.
//! `markup_summary(date)` — embedding mode: `<h6>`-wrapped strings.
//!
//! The two differ only in which renderer they invoke. Everything after the
//! fetch is pure: identical input batches produce byte-identical output, and
//! nothing persists across invocations.

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::{Bucket, DaySummary, RankedSelection};
use crate::source::{self, CalendarSource};
use crate::summary::format;
use crate::summary::rank::{RankObserver, TracingObserver, rank};
use crate::summary::split::split;
use chrono::NaiveDate;
use tracing::info;

pub struct Pipeline {
    source: Box<dyn CalendarSource>,
    observer: Box<dyn RankObserver>,
}

impl Pipeline {
    pub fn new(source: Box<dyn CalendarSource>, observer: Box<dyn RankObserver>) -> Self {
        Self { source, observer }
    }

    /// Build a pipeline against the config-selected source, logging rank
    /// diagnostics through `tracing`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(source::from_config(config)?, Box::new(TracingObserver)))
    }

    /// Fetch, partition, and rank one day's calendar.
    async fn ranked_day(&self, date: NaiveDate) -> Result<(RankedSelection, RankedSelection)> {
        let records = self.source.fetch_day(date).await?;
        info!("{}: {} announcements", date, records.len());

        let (morning, afternoon) = split(records);
        let am = rank(&morning, Bucket::Am, &*self.observer);
        let pm = rank(&afternoon, Bucket::Pm, &*self.observer);
        Ok((am, pm))
    }

    /// Plain-text am/pm summary strings for `date`.
    pub async fn plain_summary(&self, date: NaiveDate) -> Result<DaySummary> {
        let (am, pm) = self.ranked_day(date).await?;
        Ok(DaySummary {
            am: format::plain(&am, Bucket::Am),
            pm: format::plain(&pm, Bucket::Pm),
        })
    }

    /// Markup-wrapped am/pm summary strings for `date`.
    pub async fn markup_summary(&self, date: NaiveDate) -> Result<DaySummary> {
        let (am, pm) = self.ranked_day(date).await?;
        Ok(DaySummary {
            am: format::markup(&am, Bucket::Am),
            pm: format::markup(&pm, Bucket::Pm),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
