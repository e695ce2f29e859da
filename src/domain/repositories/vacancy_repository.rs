//! Repository trait for saved vacancies.

use crate::domain::entities::VacancyRecord;

/// Errors raised when the store cannot be written.
///
/// Reading never fails: a missing or unreadable store counts as empty.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write vacancy store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize vacancies: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Repository interface for the saved-vacancy collection.
///
/// Records are kept in insertion order and addressed by `url`; duplicates are
/// allowed. Implementations assume a single writer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonVacancyRepository`] - JSON file implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/json_repository.rs`
#[cfg_attr(test, mockall::automock)]
pub trait VacancyRepository: Send + Sync {
    /// Appends a record to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be persisted.
    fn add(&self, record: VacancyRecord) -> Result<(), StoreError>;

    /// Removes every record whose `url` equals `url`.
    ///
    /// Returns `Ok(true)` if at least one record was removed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the shrunk collection cannot be persisted.
    fn delete(&self, url: &str) -> Result<bool, StoreError>;

    /// Returns saved records.
    ///
    /// With a keyword, only records whose title or description contains it
    /// (case-insensitive) are returned.
    fn query<'a>(&self, keyword: Option<&'a str>) -> Vec<VacancyRecord>;
}
