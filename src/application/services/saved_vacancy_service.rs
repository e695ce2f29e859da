//! Saved-vacancy use-cases on top of a [`VacancyRepository`].

use std::sync::Arc;

use crate::domain::entities::{Vacancy, VacancyRecord};
use crate::domain::repositories::VacancyRepository;
use crate::error::AppError;
use tracing::{info, warn};

/// Service for saving, listing and removing shortlisted vacancies.
pub struct SavedVacancyService<R: VacancyRepository> {
    repository: Arc<R>,
}

impl<R: VacancyRepository> SavedVacancyService<R> {
    /// Creates a new saved-vacancy service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Appends every vacancy to the store, in order.
    ///
    /// Returns the number of records written. Already saved vacancies are
    /// appended again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on the first failed write; earlier records
    /// stay saved.
    pub fn save_all(&self, vacancies: &[Vacancy]) -> Result<usize, AppError> {
        for vacancy in vacancies {
            self.repository.add(vacancy.to_record())?;
        }
        info!("Saved {} vacancies", vacancies.len());
        Ok(vacancies.len())
    }

    /// Lists stored records, optionally filtered by keyword.
    pub fn list(&self, keyword: Option<&str>) -> Vec<VacancyRecord> {
        self.repository.query(keyword)
    }

    /// Lists stored records as validated vacancies.
    ///
    /// Records that no longer pass validation are skipped with a warning.
    pub fn load(&self, keyword: Option<&str>) -> Vec<Vacancy> {
        self.repository
            .query(keyword)
            .into_iter()
            .filter_map(|record| match Vacancy::try_from(record) {
                Ok(vacancy) => Some(vacancy),
                Err(e) => {
                    warn!("Skipping invalid saved vacancy: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Removes every record with the given URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for a blank URL and
    /// [`AppError::Store`] if the store cannot be rewritten.
    pub fn remove(&self, url: &str) -> Result<bool, AppError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::InvalidInput("URL must not be empty".to_string()));
        }

        let removed = self.repository.delete(url)?;
        if removed {
            info!("Removed saved vacancy {}", url);
        }
        Ok(removed)
    }
}
