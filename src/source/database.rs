//! Alternate relational source.
//!
//! Reads the same record shape from an `earnings_calendar_detail` table
//! instead of the network feed. One query per invocation; the connection is
//! opened per call so the source stays safe under concurrent callers.

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::{Announcement, RawStock};
use crate::source::CalendarSource;
use crate::source::normalize::raw_stock_to_announcement;
use async_trait::async_trait;
use chrono::NaiveDate;
use duckdb::{Connection, params};
use std::path::PathBuf;
use tracing::debug;

const DAY_QUERY: &str = r#"
SELECT symbol, time, importance
FROM earnings_calendar_detail
WHERE date = ?
"#;

pub struct DatabaseSource {
    db_path: PathBuf,
}

impl DatabaseSource {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            db_path: config.db_path.clone(),
        }
    }

    fn query_day(&self, date: NaiveDate) -> Result<Vec<RawStock>> {
        let conn = Connection::open(&self.db_path)?;
        let mut stmt = conn.prepare(DAY_QUERY)?;

        let rows = stmt.query_map(params![date], |row| {
            Ok(RawStock {
                symbol: row.get(0)?,
                time: row.get(1)?,
                importance: row.get(2)?,
            })
        })?;

        let mut raw = Vec::new();
        for row in rows {
            raw.push(row?);
        }
        Ok(raw)
    }
}

#[async_trait]
impl CalendarSource for DatabaseSource {
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<Announcement>> {
        let raw = self.query_day(date)?;
        debug!("{}: {} rows from {:?}", date, raw.len(), self.db_path);

        raw.iter().map(raw_stock_to_announcement).collect()
    }
}
