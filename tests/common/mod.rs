#![allow(dead_code)]

use serde_json::{Value, json};
use tempfile::TempDir;
use vacancy_finder::domain::entities::VacancyRecord;
use vacancy_finder::infrastructure::persistence::JsonVacancyRepository;

pub fn temp_repository() -> (TempDir, JsonVacancyRepository) {
    let dir = TempDir::new().unwrap();
    let repo = JsonVacancyRepository::new(dir.path().join("vacancies.json"));
    (dir, repo)
}

pub fn record(title: &str, url: &str, description: &str) -> VacancyRecord {
    VacancyRecord {
        title: title.to_string(),
        url: url.to_string(),
        salary: "100000 RUR".to_string(),
        description: description.to_string(),
    }
}

pub fn raw_vacancy(id: &str, name: &str, salary_from: Option<u64>, requirement: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "salary": salary_from.map(|from| json!({ "from": from, "to": null, "currency": "RUR" })),
        "snippet": { "requirement": requirement },
        "alternate_url": format!("https://hh.ru/vacancy/{}", id)
    })
}
