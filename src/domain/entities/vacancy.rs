//! Vacancy entity representing a single job posting.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// Salary string stored when a posting does not state a salary.
pub const SALARY_NOT_SPECIFIED: &str = "Зарплата не указана";

static HTTP_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());
static DIGIT_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Errors raised when a vacancy is built or modified with invalid data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Vacancy title must not be empty")]
    EmptyTitle,

    #[error("Vacancy URL must not be empty")]
    EmptyUrl,

    #[error("Invalid vacancy URL format: {0}")]
    InvalidUrl(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// A validated job posting.
///
/// Every field goes through the same validation on construction and on update:
///
/// - `title` is trimmed and must not be empty
/// - `url` must start with `http://` or `https://`
/// - `salary` is normalized, blank input becomes [`SALARY_NOT_SPECIFIED`]
/// - `description` is trimmed and may be empty
///
/// # Ordering
///
/// Vacancies compare **only** by [`Vacancy::salary_value`]. Two postings with the
/// same salary figure are equal even if their titles and URLs differ, and a
/// posting without a salary figure sorts below every posting that has one.
#[derive(Debug, Clone)]
pub struct Vacancy {
    title: String,
    url: String,
    salary: String,
    description: String,
}

impl Vacancy {
    /// Creates a new vacancy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] for a blank title,
    /// [`ValidationError::EmptyUrl`] for an empty URL and
    /// [`ValidationError::InvalidUrl`] for a URL without an HTTP(S) scheme.
    pub fn new(
        title: &str,
        url: &str,
        salary: Option<&str>,
        description: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validate_title(title)?,
            url: validate_url(url)?,
            salary: normalize_salary(salary),
            description: description.trim().to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the title, validated the same way as in [`Vacancy::new`].
    ///
    /// The vacancy is left unchanged on error.
    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    /// Replaces the URL, validated the same way as in [`Vacancy::new`].
    ///
    /// The vacancy is left unchanged on error.
    pub fn set_url(&mut self, url: &str) -> Result<(), ValidationError> {
        self.url = validate_url(url)?;
        Ok(())
    }

    pub fn set_salary(&mut self, salary: Option<&str>) {
        self.salary = normalize_salary(salary);
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.trim().to_string();
    }

    /// Extracts the numeric salary figure.
    ///
    /// Returns the first run of ASCII digits in the salary string, scanning left
    /// to right, so `"от 80000 до 120000 руб."` yields `80000`. Returns `None`
    /// when the salary is not specified or contains no digits. Figures that do
    /// not fit into `u64` saturate.
    pub fn salary_value(&self) -> Option<u64> {
        if self.salary == SALARY_NOT_SPECIFIED {
            return None;
        }

        DIGIT_RUN_REGEX
            .find(&self.salary)
            .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
    }

    /// Three-way comparison by salary figure.
    ///
    /// `None` is less than any figure and equal to another `None`.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.salary_value().cmp(&other.salary_value())
    }

    /// Converts the vacancy into its stored form.
    pub fn to_record(&self) -> VacancyRecord {
        VacancyRecord {
            title: self.title.clone(),
            url: self.url.clone(),
            salary: self.salary.clone(),
            description: self.description.clone(),
        }
    }

    /// Rebuilds a vacancy from a stored record, re-running validation.
    pub fn from_record(record: &VacancyRecord) -> Result<Self, ValidationError> {
        Self::new(
            &record.title,
            &record.url,
            Some(&record.salary),
            &record.description,
        )
    }

    /// Serializes the vacancy into a JSON object with the four record fields.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "title": self.title,
            "url": self.url,
            "salary": self.salary,
            "description": self.description,
        })
    }

    /// Builds a vacancy from an untyped JSON object.
    ///
    /// `salary` defaults to [`SALARY_NOT_SPECIFIED`] and `description` to an
    /// empty string when absent. A numeric salary is kept as its decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if `title` or `url` is absent
    /// or not a string, otherwise the same errors as [`Vacancy::new`].
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let field = |name: &str| value.get(name).and_then(Value::as_str);

        let title = field("title").ok_or(ValidationError::MissingField("title"))?;
        let url = field("url").ok_or(ValidationError::MissingField("url"))?;
        let salary = json_text(value.get("salary"));

        Self::new(
            title,
            url,
            salary.as_deref(),
            field("description").unwrap_or_default(),
        )
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {} ({})", self.title, self.salary, self.url)
    }
}

// Equality follows the salary figure only, see the type docs.
impl PartialEq for Vacancy {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Vacancy {}

impl PartialOrd for Vacancy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vacancy {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Serialized form of a [`Vacancy`] as kept in the JSON store.
///
/// `url` is the addressing key, there is no separate identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub title: String,
    pub url: String,
    #[serde(default = "default_salary")]
    pub salary: String,
    #[serde(default)]
    pub description: String,
}

impl VacancyRecord {
    /// Reads a record from an untyped stored object.
    ///
    /// Returns `None` unless `title` and `url` are strings. A `salary` that is
    /// missing, `null` or not a string/number becomes [`SALARY_NOT_SPECIFIED`],
    /// a non-string `description` becomes empty. Unknown fields are ignored.
    pub fn from_json(value: &Value) -> Option<Self> {
        let field = |name: &str| value.get(name).and_then(Value::as_str);

        Some(Self {
            title: field("title")?.to_string(),
            url: field("url")?.to_string(),
            salary: json_text(value.get("salary")).unwrap_or_else(default_salary),
            description: field("description").unwrap_or_default().to_string(),
        })
    }

    /// Returns true if `keyword` occurs in the title or description, ignoring case.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

impl From<&Vacancy> for VacancyRecord {
    fn from(vacancy: &Vacancy) -> Self {
        vacancy.to_record()
    }
}

impl TryFrom<VacancyRecord> for Vacancy {
    type Error = ValidationError;

    fn try_from(record: VacancyRecord) -> Result<Self, Self::Error> {
        Vacancy::from_record(&record)
    }
}

/// Renders a JSON string or number as text; anything else is `None`.
pub fn json_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn default_salary() -> String {
    SALARY_NOT_SPECIFIED.to_string()
}

fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn validate_url(url: &str) -> Result<String, ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    if !HTTP_URL_REGEX.is_match(url) {
        return Err(ValidationError::InvalidUrl(url.to_string()));
    }
    Ok(url.to_string())
}

/// Normalizes a salary string for display and storage.
///
/// Blank or missing input becomes [`SALARY_NOT_SPECIFIED`]. Otherwise the input
/// is trimmed and whitespace sitting between two ASCII digits is removed, so
/// `"100 000"` becomes `"100000"`. Nothing else is touched.
pub fn normalize_salary(salary: Option<&str>) -> String {
    let Some(salary) = salary.map(str::trim).filter(|s| !s.is_empty()) else {
        return SALARY_NOT_SPECIFIED.to_string();
    };

    let chars: Vec<char> = salary.chars().collect();
    let mut normalized = String::with_capacity(salary.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() && normalized.ends_with(|p: char| p.is_ascii_digit()) {
            let run_end = chars[i..]
                .iter()
                .position(|ch| !ch.is_whitespace())
                .map_or(chars.len(), |offset| i + offset);
            if run_end < chars.len() && chars[run_end].is_ascii_digit() {
                i = run_end;
                continue;
            }
        }
        normalized.push(c);
        i += 1;
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy_with_salary(title: &str, salary: Option<&str>) -> Vacancy {
        Vacancy::new(title, "https://hh.ru/vacancy/1", salary, "").unwrap()
    }

    #[test]
    fn test_vacancy_creation() {
        let vacancy = Vacancy::new(
            "  Python Developer ",
            "https://hh.ru/vacancy/123",
            Some("100000–150000 руб."),
            " Опыт от 3 лет, знание Django ",
        )
        .unwrap();

        assert_eq!(vacancy.title(), "Python Developer");
        assert_eq!(vacancy.url(), "https://hh.ru/vacancy/123");
        assert_eq!(vacancy.salary(), "100000–150000 руб.");
        assert_eq!(vacancy.description(), "Опыт от 3 лет, знание Django");
    }

    #[test]
    fn test_vacancy_empty_title() {
        assert_eq!(
            Vacancy::new("", "https://example.com", None, "").unwrap_err(),
            ValidationError::EmptyTitle
        );
        assert_eq!(
            Vacancy::new("   \t", "https://example.com", None, "").unwrap_err(),
            ValidationError::EmptyTitle
        );
    }

    #[test]
    fn test_vacancy_url_errors_are_distinct() {
        assert_eq!(
            Vacancy::new("Dev", "", None, "").unwrap_err(),
            ValidationError::EmptyUrl
        );
        assert!(matches!(
            Vacancy::new("Dev", "not-a-url", None, "").unwrap_err(),
            ValidationError::InvalidUrl(_)
        ));
        assert!(matches!(
            Vacancy::new("Dev", "ftp://example.com", None, "").unwrap_err(),
            ValidationError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_vacancy_accepts_http_and_https() {
        assert!(Vacancy::new("Dev", "http://example.com", None, "").is_ok());
        assert!(Vacancy::new("Dev", "https://example.com", None, "").is_ok());
    }

    #[test]
    fn test_missing_salary_uses_sentinel() {
        assert_eq!(vacancy_with_salary("Dev", None).salary(), SALARY_NOT_SPECIFIED);
        assert_eq!(
            vacancy_with_salary("Dev", Some("   ")).salary(),
            SALARY_NOT_SPECIFIED
        );
    }

    #[test]
    fn test_normalize_salary_joins_digit_groups() {
        assert_eq!(normalize_salary(Some("100 000")), "100000");
        assert_eq!(normalize_salary(Some(" от 80 000 до 120 000 руб. ")), "от 80000 до 120000 руб.");
        assert_eq!(normalize_salary(Some("1 2 3")), "123");
        assert_eq!(normalize_salary(Some("100\u{a0}000 RUR")), "100000 RUR");
    }

    #[test]
    fn test_normalize_salary_leaves_other_text_alone() {
        assert_eq!(normalize_salary(Some("100,000")), "100,000");
        assert_eq!(normalize_salary(Some("100 руб.")), "100 руб.");
        assert_eq!(normalize_salary(Some("до  5")), "до  5");
        assert_eq!(normalize_salary(Some("100000– RUR")), "100000– RUR");
    }

    #[test]
    fn test_salary_value_not_specified() {
        let vacancy = vacancy_with_salary("Dev", Some(SALARY_NOT_SPECIFIED));
        assert_eq!(vacancy.salary_value(), None);
    }

    #[test]
    fn test_salary_value_without_digits() {
        assert_eq!(vacancy_with_salary("Dev", Some("по договорённости")).salary_value(), None);
    }

    #[test]
    fn test_salary_value_takes_first_digit_run() {
        assert_eq!(vacancy_with_salary("Dev", Some("100000 руб.")).salary_value(), Some(100000));
        assert_eq!(
            vacancy_with_salary("Dev", Some("от 80000 до 120000 руб.")).salary_value(),
            Some(80000)
        );
        assert_eq!(
            vacancy_with_salary("Dev", Some("от 80 000 до 120 000 руб.")).salary_value(),
            Some(80000)
        );
    }

    #[test]
    fn test_salary_value_saturates_on_overflow() {
        let vacancy = vacancy_with_salary("Dev", Some("99999999999999999999999"));
        assert_eq!(vacancy.salary_value(), Some(u64::MAX));
    }

    #[test]
    fn test_no_salary_is_less_than_any_salary() {
        let none = vacancy_with_salary("Dev", None);
        let one = vacancy_with_salary("Dev", Some("1"));

        assert!(none < one);
        assert_eq!(none.compare(&one), Ordering::Less);
        assert_eq!(one.compare(&none), Ordering::Greater);
    }

    #[test]
    fn test_two_missing_salaries_compare_equal() {
        let a = vacancy_with_salary("A", None);
        let b = vacancy_with_salary("B", Some("по договорённости"));
        assert_eq!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_comparison_by_salary() {
        let v1 = vacancy_with_salary("Dev1", Some("100 000 руб."));
        let v2 = vacancy_with_salary("Dev2", Some("80 000 руб."));

        assert!(v1 > v2);
        assert!(v2 < v1);
    }

    // Equality ignores title, url and description on purpose: only the salary
    // figure takes part. Keep this test if the contract ever gets revisited.
    #[test]
    fn test_equality_is_salary_value_only() {
        let a = Vacancy::new("Rust Dev", "https://a.example", Some("100000 RUR"), "x").unwrap();
        let b = Vacancy::new("Go Dev", "https://b.example", Some("от 100000"), "y").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_setters_revalidate() {
        let mut vacancy = vacancy_with_salary("Dev", Some("100"));

        assert_eq!(vacancy.set_title(" "), Err(ValidationError::EmptyTitle));
        assert_eq!(vacancy.title(), "Dev");
        assert_eq!(vacancy.set_url(""), Err(ValidationError::EmptyUrl));
        assert!(matches!(vacancy.set_url("hh.ru/1"), Err(ValidationError::InvalidUrl(_))));
        assert_eq!(vacancy.url(), "https://hh.ru/vacancy/1");

        vacancy.set_title(" Senior Dev ").unwrap();
        vacancy.set_url("http://hh.ru/vacancy/2").unwrap();
        vacancy.set_salary(Some("200 000"));
        vacancy.set_description("  anything goes ");

        assert_eq!(vacancy.title(), "Senior Dev");
        assert_eq!(vacancy.url(), "http://hh.ru/vacancy/2");
        assert_eq!(vacancy.salary(), "200000");
        assert_eq!(vacancy.description(), "anything goes");

        vacancy.set_salary(None);
        assert_eq!(vacancy.salary(), SALARY_NOT_SPECIFIED);
    }

    #[test]
    fn test_record_round_trip() {
        let vacancy = Vacancy::new(
            "Dev",
            "https://hh.ru/vacancy/7",
            Some("от 90 000 руб."),
            "Rust, tokio",
        )
        .unwrap();

        let restored = Vacancy::from_record(&vacancy.to_record()).unwrap();
        assert_eq!(restored.to_record(), vacancy.to_record());

        let restored = Vacancy::from_json(&vacancy.to_json()).unwrap();
        assert_eq!(restored.to_record(), vacancy.to_record());
    }

    #[test]
    fn test_from_json_missing_fields() {
        let no_title = serde_json::json!({ "url": "https://hh.ru/vacancy/1" });
        assert_eq!(
            Vacancy::from_json(&no_title).unwrap_err(),
            ValidationError::MissingField("title")
        );

        let no_url = serde_json::json!({ "title": "Dev" });
        assert_eq!(
            Vacancy::from_json(&no_url).unwrap_err(),
            ValidationError::MissingField("url")
        );
    }

    #[test]
    fn test_from_json_defaults() {
        let value = serde_json::json!({ "title": "Dev", "url": "https://hh.ru/vacancy/1" });
        let vacancy = Vacancy::from_json(&value).unwrap();

        assert_eq!(vacancy.salary(), SALARY_NOT_SPECIFIED);
        assert_eq!(vacancy.description(), "");
    }

    #[test]
    fn test_from_json_numeric_salary() {
        let value = serde_json::json!({
            "title": "Dev",
            "url": "https://hh.ru/vacancy/1",
            "salary": 100000
        });
        let vacancy = Vacancy::from_json(&value).unwrap();

        assert_eq!(vacancy.salary(), "100000");
        assert_eq!(vacancy.salary_value(), Some(100000));
    }

    #[test]
    fn test_record_from_json_is_lenient() {
        let value = serde_json::json!({
            "title": "Dev",
            "url": "https://hh.ru/vacancy/1",
            "salary": null,
            "description": 42,
            "employer": "ACME"
        });
        let record = VacancyRecord::from_json(&value).unwrap();

        assert_eq!(record.salary, SALARY_NOT_SPECIFIED);
        assert_eq!(record.description, "");

        let numeric = serde_json::json!({ "title": "Dev", "url": "https://x.example", "salary": 90000 });
        assert_eq!(VacancyRecord::from_json(&numeric).unwrap().salary, "90000");

        let no_url = serde_json::json!({ "title": "Dev" });
        assert!(VacancyRecord::from_json(&no_url).is_none());
    }

    #[test]
    fn test_record_deserialize_defaults() {
        let record: VacancyRecord =
            serde_json::from_str(r#"{"title":"Dev","url":"https://hh.ru/vacancy/1"}"#).unwrap();

        assert_eq!(record.salary, SALARY_NOT_SPECIFIED);
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_display() {
        let vacancy = vacancy_with_salary("Dev", Some("100 000 руб."));
        assert_eq!(
            vacancy.to_string(),
            "Dev — 100000 руб. (https://hh.ru/vacancy/1)"
        );
    }

    #[test]
    fn test_record_matches_keyword() {
        let record = Vacancy::new("Python Developer", "https://hh.ru/vacancy/1", None, "Опыт с Django")
            .unwrap()
            .to_record();

        assert!(record.matches_keyword("python"));
        assert!(record.matches_keyword("DJANGO"));
        assert!(record.matches_keyword("опыт"));
        assert!(!record.matches_keyword("rust"));
    }
}
