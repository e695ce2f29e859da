//! Business logic services for the application layer.

pub mod ranking;
pub mod saved_vacancy_service;
pub mod search_service;
pub mod vacancy_mapper;

pub use ranking::{RankingOptions, clamp_top_n, rank};
pub use saved_vacancy_service::SavedVacancyService;
pub use search_service::{SearchOutcome, SearchRequest, SearchService};
pub use vacancy_mapper::{Ingested, MappingRejection, VacancyMapper};
