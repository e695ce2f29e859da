//! Conversion of raw hh.ru records into validated vacancies.

use crate::domain::entities::{Vacancy, ValidationError, json_text};
use serde_json::Value;
use tracing::warn;

/// Longest salary string kept as-is; longer ones are cut and marked with `...`.
const MAX_SALARY_LEN: usize = 100;
const ELLIPSIS: &str = "...";

/// Reasons a raw record is skipped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingRejection {
    #[error("vacancy has no name")]
    MissingName,

    #[error("vacancy has no id")]
    MissingId,

    #[error("vacancy id is not a string or number: {0}")]
    InvalidId(String),

    #[error("invalid vacancy: {0}")]
    Invalid(#[from] ValidationError),
}

/// Result of mapping a batch of raw records.
#[derive(Debug, Default)]
pub struct Ingested {
    pub vacancies: Vec<Vacancy>,
    pub rejected: Vec<MappingRejection>,
}

/// Maps raw API records onto [`Vacancy`] values.
///
/// Malformed records never produce an error for the caller: they come back as
/// [`MappingRejection`]s and are skipped by [`VacancyMapper::ingest`].
#[derive(Debug, Clone)]
pub struct VacancyMapper {
    vacancy_url_base: String,
}

impl VacancyMapper {
    /// Creates a mapper building vacancy links as `{vacancy_url_base}{id}`.
    pub fn new(vacancy_url_base: impl Into<String>) -> Self {
        Self {
            vacancy_url_base: vacancy_url_base.into(),
        }
    }

    /// Maps one raw record.
    ///
    /// # Rules
    ///
    /// 1. `name` is trimmed and must not be empty
    /// 2. `id` must be present and truthy
    /// 3. the link is `{vacancy_url_base}{id}`
    /// 4. `salary.from`, `salary.to` and `salary.currency` compose
    ///    `"{from}–{to} {currency}"`, cut to 100 characters
    /// 5. `snippet.requirement` becomes the description
    pub fn map(&self, raw: &Value) -> Result<Vacancy, MappingRejection> {
        let title = raw
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(MappingRejection::MissingName)?;

        let id = vacancy_id(raw.get("id"))?;
        let url = format!("{}{}", self.vacancy_url_base, id);

        let salary = raw
            .get("salary")
            .filter(|s| is_truthy(s))
            .map(compose_salary);

        let description = raw
            .get("snippet")
            .and_then(|snippet| snippet.get("requirement"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(Vacancy::new(title, &url, salary.as_deref(), description)?)
    }

    /// Maps a batch of raw records, keeping order and skipping rejects.
    ///
    /// Each rejection is logged as a warning and counted in the result.
    pub fn ingest(&self, raws: &[Value]) -> Ingested {
        let mut ingested = Ingested::default();

        for raw in raws {
            match self.map(raw) {
                Ok(vacancy) => ingested.vacancies.push(vacancy),
                Err(rejection) => {
                    warn!("Skipping malformed vacancy: {}", rejection);
                    ingested.rejected.push(rejection);
                }
            }
        }

        ingested
    }
}

fn vacancy_id(id: Option<&Value>) -> Result<String, MappingRejection> {
    match id {
        Some(id) if !is_truthy(id) => Err(MappingRejection::MissingId),
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(other) => Err(MappingRejection::InvalidId(other.to_string())),
        None => Err(MappingRejection::MissingId),
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn compose_salary(salary: &Value) -> String {
    let part = |name: &str| json_text(salary.get(name)).unwrap_or_default();

    let composed = format!("{}–{} {}", part("from"), part("to"), part("currency"));
    truncate_salary(composed.trim())
}

fn truncate_salary(salary: &str) -> String {
    if salary.chars().count() <= MAX_SALARY_LEN {
        return salary.to_string();
    }

    let keep = MAX_SALARY_LEN - ELLIPSIS.len();
    let mut truncated: String = salary.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
