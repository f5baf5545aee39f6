use crate::config::FeedConfig;
use crate::error::{CalendarError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()?;

        Ok(Self { inner })
    }

    /// Fetch a URL and decode its JSON body. Single round-trip: a failure
    /// here propagates to the caller, which owns any retry policy.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        debug!("GET {}", url);

        let resp = self.inner.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CalendarError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(resp.json::<T>().await?)
    }
}
