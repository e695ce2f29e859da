//! Application layer services implementing the use-cases.
//!
//! Services consume the domain traits and give the CLI a small API.
//!
//! # Available Services
//!
//! - [`services::vacancy_mapper::VacancyMapper`] - Raw API record to vacancy conversion
//! - [`services::ranking`] - Keyword filtering and salary ranking
//! - [`services::search_service::SearchService`] - Fetch, map and rank in one call
//! - [`services::saved_vacancy_service::SavedVacancyService`] - Saved shortlist management

pub mod services;
