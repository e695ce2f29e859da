//! # Vacancy Finder
//!
//! Searches hh.ru for vacancies, ranks them by salary and keeps a shortlist
//! in a local JSON file.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Vacancy`] entity and capability traits
//! - **Application Layer** ([`application`]) - Mapping, ranking and the search/save use-cases
//! - **Infrastructure Layer** ([`infrastructure`]) - hh.ru client and JSON file storage
//!
//! ## Data Flow
//!
//! 1. [`infrastructure::headhunter::HeadHunterClient`] fetches raw records
//! 2. [`application::services::VacancyMapper`] turns them into vacancies, skipping malformed ones
//! 3. [`application::services::rank`] filters by keyword and keeps the best paid
//! 4. [`infrastructure::persistence::JsonVacancyRepository`] stores the chosen ones
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        RankingOptions, SavedVacancyService, SearchRequest, SearchService, VacancyMapper,
    };
    pub use crate::domain::entities::{Vacancy, VacancyRecord, ValidationError};
    pub use crate::domain::repositories::{VacancyRepository, VacancySource};
    pub use crate::error::AppError;
    pub use crate::infrastructure::headhunter::HeadHunterClient;
    pub use crate::infrastructure::persistence::JsonVacancyRepository;
}
