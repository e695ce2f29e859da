//! Vacancy source trait and fetch error types.

use async_trait::async_trait;
use serde_json::Value;

/// Errors that can occur while fetching vacancies from a remote source.
///
/// Callers treat every variant as "fetch failed"; the variants only carry
/// detail for the message.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Vacancy API is unavailable: {0}")]
    Unavailable(String),

    #[error("Vacancy API request failed: {0}")]
    Request(String),

    #[error("Vacancy API returned status {0}")]
    Status(u16),

    #[error("Failed to decode vacancy API response: {0}")]
    Decode(String),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Trait for remote vacancy search APIs.
///
/// Implementations return raw, untyped records exactly as the API sends them;
/// turning them into [`crate::domain::entities::Vacancy`] values is the job of
/// [`crate::application::services::VacancyMapper`].
///
/// # Implementations
///
/// - [`crate::infrastructure::headhunter::HeadHunterClient`] - hh.ru API client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Checks that the API answers with a success status.
    ///
    /// Network errors are reported as `false`.
    async fn connect(&self) -> bool;

    /// Fetches the first page of vacancies matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on connection failure, non-success status or an
    /// undecodable body. Failures are not retried.
    async fn fetch_vacancies(&self, query: &str, per_page: u32) -> FetchResult<Vec<Value>>;
}
