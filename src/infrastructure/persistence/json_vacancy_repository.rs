//! JSON file implementation of the vacancy repository.

use crate::domain::entities::VacancyRecord;
use crate::domain::repositories::{StoreError, VacancyRepository};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Vacancy repository backed by a single JSON file.
///
/// The file holds the whole collection as one pretty-printed array of
/// objects with `title`, `url`, `salary` and `description`. Non-ASCII text is
/// written as-is.
///
/// Every operation loads the full file and `add`/`delete` rewrite it. There is
/// no locking: concurrent writers to the same path can lose updates, so one
/// process must own the file at a time.
///
/// Entries are kept as they were read. An entry with a `null` or numeric
/// salary, a missing description or extra fields survives rewrites untouched;
/// `query` skips entries without a string `title` and `url`. Only a missing
/// file, or one that is not a JSON array, loads as an empty collection and
/// gets replaced on the next write.
#[derive(Debug, Clone)]
pub struct JsonVacancyRepository {
    path: PathBuf,
}

impl JsonVacancyRepository {
    /// Creates a repository for `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Vec<Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Vacancy store {} does not exist yet", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read vacancy store {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(entries)) => {
                debug!(
                    "Loaded {} vacancies from {}",
                    entries.len(),
                    self.path.display()
                );
                entries
            }
            Ok(_) => {
                warn!(
                    "Vacancy store {} is not a JSON array, treating as empty",
                    self.path.display()
                );
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Vacancy store {} is corrupt, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[Value]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        debug!("Saved {} vacancies to {}", entries.len(), self.path.display());
        Ok(())
    }
}

fn text_field<'a>(entry: &'a Value, name: &str) -> Option<&'a str> {
    entry.get(name).and_then(Value::as_str)
}

impl VacancyRepository for JsonVacancyRepository {
    fn add(&self, record: VacancyRecord) -> Result<(), StoreError> {
        let mut entries = self.load();
        entries.push(serde_json::to_value(record)?);
        self.save(&entries)
    }

    fn delete(&self, url: &str) -> Result<bool, StoreError> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|entry| text_field(entry, "url") != Some(url));

        if entries.len() == before {
            return Ok(false);
        }

        self.save(&entries)?;
        Ok(true)
    }

    fn query(&self, keyword: Option<&str>) -> Vec<VacancyRecord> {
        let keyword = keyword.filter(|k| !k.is_empty());

        self.load()
            .iter()
            .filter_map(|entry| {
                let record = VacancyRecord::from_json(entry);
                if record.is_none() {
                    debug!("Skipping stored entry without title or url");
                }
                record
            })
            .filter(|record| keyword.is_none_or(|k| record.matches_keyword(k)))
            .collect()
    }
}
