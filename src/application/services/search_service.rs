//! Vacancy search use-case: fetch, map and rank.

use std::sync::Arc;

use crate::application::services::ranking::{
    RankingOptions, clamp_top_n, filter_by_keywords, sort_by_salary_desc,
};
use crate::application::services::vacancy_mapper::VacancyMapper;
use crate::domain::entities::Vacancy;
use crate::domain::repositories::VacancySource;
use crate::error::AppError;
use tracing::info;

/// Parameters of one search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub per_page: u32,
    pub ranking: RankingOptions,
}

/// What a search produced, with the counts shown to the user.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Raw records returned by the API.
    pub fetched: usize,
    /// Raw records skipped as malformed.
    pub rejected: usize,
    /// Vacancies left after keyword filtering.
    pub filtered: usize,
    /// Top vacancies by salary, highest first.
    pub vacancies: Vec<Vacancy>,
}

/// Service running the search pipeline against a [`VacancySource`].
pub struct SearchService<S: VacancySource> {
    source: Arc<S>,
    mapper: VacancyMapper,
}

impl<S: VacancySource> SearchService<S> {
    /// Creates a new search service.
    pub fn new(source: Arc<S>, mapper: VacancyMapper) -> Self {
        Self { source, mapper }
    }

    /// Runs a search.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the query is blank (no request is
    /// made) and [`AppError::Fetch`] if the API call fails.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, AppError> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(AppError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }

        let raws = self
            .source
            .fetch_vacancies(query, request.per_page)
            .await?;

        let ingested = self.mapper.ingest(&raws);
        let mut vacancies = filter_by_keywords(ingested.vacancies, &request.ranking.keywords);
        let filtered = vacancies.len();
        sort_by_salary_desc(&mut vacancies);
        vacancies.truncate(clamp_top_n(request.ranking.top_n));

        info!(
            fetched = raws.len(),
            rejected = ingested.rejected.len(),
            filtered,
            "Search for '{}' finished",
            query
        );

        Ok(SearchOutcome {
            fetched: raws.len(),
            rejected: ingested.rejected.len(),
            filtered,
            vacancies,
        })
    }
}
