//! Repository implementations.
//!
//! # Repositories
//!
//! - [`JsonVacancyRepository`] - Saved vacancies in a single JSON file

pub mod json_vacancy_repository;

pub use json_vacancy_repository::JsonVacancyRepository;
