//! hh.ru integration.
//!
//! Provides [`HeadHunterClient`], the production
//! [`crate::domain::repositories::VacancySource`].

mod client;

pub use client::HeadHunterClient;
