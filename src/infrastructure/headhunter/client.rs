//! hh.ru vacancy search API client.

use crate::domain::repositories::{FetchError, FetchResult, VacancySource};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the public hh.ru vacancy search API.
///
/// Only the first result page is requested. Failures are reported once and
/// never retried.
pub struct HeadHunterClient {
    client: Client,
    base_url: String,
}

impl HeadHunterClient {
    /// Builds a client for `base_url` (e.g. `"https://api.hh.ru"`).
    ///
    /// hh.ru rejects requests without a `User-Agent`, so one is always sent.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()
            .map_err(|e| FetchError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies", self.base_url)
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    async fn connect(&self) -> bool {
        match self.client.get(self.vacancies_url()).send().await {
            Ok(response) => {
                debug!("hh.ru connectivity check: {}", response.status());
                response.status() == StatusCode::OK
            }
            Err(e) => {
                warn!("hh.ru connectivity check failed: {}", e);
                false
            }
        }
    }

    async fn fetch_vacancies(&self, query: &str, per_page: u32) -> FetchResult<Vec<Value>> {
        if !self.connect().await {
            return Err(FetchError::Unavailable(self.base_url.clone()));
        }

        let per_page = per_page.to_string();
        let url = Url::parse_with_params(
            &self.vacancies_url(),
            [("text", query), ("per_page", per_page.as_str()), ("page", "0")],
        )
        .map_err(|e| FetchError::Request(format!("Invalid API URL: {}", e)))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let mut body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let items = match body.get_mut("items").map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };

        info!("Fetched {} raw vacancies for '{}'", items.len(), query);
        Ok(items)
    }
}
