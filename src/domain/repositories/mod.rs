//! Capability traits for the domain layer.
//!
//! # Available Traits
//!
//! - [`VacancyRepository`] - Saved-vacancy storage (add, delete, query)
//! - [`VacancySource`] - Remote vacancy search API (connect, fetch)
//!
//! Implementations live in `crate::infrastructure`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod vacancy_repository;
pub mod vacancy_source;

pub use vacancy_repository::{StoreError, VacancyRepository};
pub use vacancy_source::{FetchError, FetchResult, VacancySource};

#[cfg(test)]
pub use vacancy_repository::MockVacancyRepository;
#[cfg(test)]
pub use vacancy_source::MockVacancySource;
