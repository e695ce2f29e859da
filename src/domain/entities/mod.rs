//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Vacancy`] - A validated job posting with salary-based ordering
//! - [`VacancyRecord`] - The flat form of a vacancy as kept in the JSON store
//!
//! Vacancies are validated on construction and on every update, so a
//! [`Vacancy`] value always satisfies its invariants. Records are plain data
//! and are re-validated when turned back into vacancies.

pub mod vacancy;

pub use vacancy::{
    SALARY_NOT_SPECIFIED, Vacancy, VacancyRecord, ValidationError, json_text, normalize_salary,
};
