//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is made. A `.env` file in the working directory is honoured.
//!
//! ```bash
//! export HH_API_URL="https://api.hh.ru"
//! export VACANCIES_FILE="vacancies.json"
//! ```
//!
//! ## Optional Variables
//!
//! - `HH_API_URL` - Vacancy search API base (default: `https://api.hh.ru`)
//! - `HH_VACANCY_URL` - Base of public vacancy links (default: `https://hh.ru/vacancy/`)
//! - `HH_USER_AGENT` - User-Agent sent to the API (default: `vacancy-finder/<version>`)
//! - `HH_PER_PAGE` - Vacancies requested per search (default: 20, range: 1-100)
//! - `HTTP_TIMEOUT_SECS` - Request timeout (default: 30)
//! - `VACANCIES_FILE` - JSON file with saved vacancies (default: `vacancies.json`)
//! - `DEFAULT_TOP_N` - Size of the salary top when not asked (default: 5)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

/// Largest page size the hh.ru API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// Public vacancy links are built as `{vacancy_url_base}{id}`.
    pub vacancy_url_base: String,
    pub user_agent: String,
    pub per_page: u32,
    pub http_timeout_secs: u64,
    pub vacancies_file: PathBuf,
    pub default_top_n: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("HH_API_URL").unwrap_or_else(|_| "https://api.hh.ru".to_string());
        let vacancy_url_base =
            env::var("HH_VACANCY_URL").unwrap_or_else(|_| "https://hh.ru/vacancy/".to_string());
        let user_agent = env::var("HH_USER_AGENT")
            .unwrap_or_else(|_| format!("vacancy-finder/{}", env!("CARGO_PKG_VERSION")));

        let per_page = parse_var("HH_PER_PAGE", 20)?;
        let http_timeout_secs = parse_var("HTTP_TIMEOUT_SECS", 30)?;
        let default_top_n = parse_var("DEFAULT_TOP_N", 5)?;

        let vacancies_file = env::var("VACANCIES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("vacancies.json"));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_url,
            vacancy_url_base,
            user_agent,
            per_page,
            http_timeout_secs,
            vacancies_file,
            default_top_n,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_url` or `vacancy_url_base` is not an HTTP(S) URL
    /// - `per_page` is outside 1-100
    /// - `http_timeout_secs` is 0
    /// - `log_format` is not `text` or `json`
    /// - `vacancies_file` is empty
    pub fn validate(&self) -> Result<()> {
        validate_http_url("HH_API_URL", &self.api_url)?;
        validate_http_url("HH_VACANCY_URL", &self.vacancy_url_base)?;

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            anyhow::bail!(
                "HH_PER_PAGE must be between 1 and {}, got {}",
                MAX_PER_PAGE,
                self.per_page
            );
        }

        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.vacancies_file.as_os_str().is_empty() {
            anyhow::bail!("VACANCIES_FILE must not be empty");
        }

        Ok(())
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API: {}", self.api_url);
        tracing::info!("  Vacancy links: {}{{id}}", self.vacancy_url_base);
        tracing::info!("  Per page: {}", self.per_page);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_secs);
        tracing::info!("  Vacancies file: {}", self.vacancies_file.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{} must start with 'http://' or 'https://', got '{}'", name, value);
    }
    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
