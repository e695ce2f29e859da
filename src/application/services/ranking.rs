//! Keyword filtering and salary ranking of vacancies.

use crate::domain::entities::Vacancy;

/// Smallest accepted `top_n`.
pub const MIN_TOP_N: usize = 1;
/// Largest accepted `top_n`.
pub const MAX_TOP_N: usize = 50;

/// Parameters of the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingOptions {
    /// Words looked up in descriptions; empty means no filtering.
    pub keywords: Vec<String>,
    /// Number of vacancies to keep, clamped into `MIN_TOP_N..=MAX_TOP_N`.
    pub top_n: usize,
}

impl RankingOptions {
    pub fn new(keywords: Vec<String>, top_n: usize) -> Self {
        Self { keywords, top_n }
    }

    /// Splits a whitespace-separated keyword line, as typed by users.
    pub fn from_keyword_line(line: &str, top_n: usize) -> Self {
        Self::new(line.split_whitespace().map(str::to_string).collect(), top_n)
    }
}

/// Clamps a requested result size into `MIN_TOP_N..=MAX_TOP_N`.
pub fn clamp_top_n(top_n: usize) -> usize {
    top_n.clamp(MIN_TOP_N, MAX_TOP_N)
}

/// Returns true if the description contains any keyword, ignoring case.
///
/// Matching is by substring, not by word. An empty keyword list matches
/// everything.
pub fn matches_keywords(vacancy: &Vacancy, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }

    let description = vacancy.description().to_lowercase();
    keywords
        .iter()
        .any(|keyword| description.contains(&keyword.to_lowercase()))
}

/// Keeps vacancies whose description matches any keyword.
pub fn filter_by_keywords(vacancies: Vec<Vacancy>, keywords: &[String]) -> Vec<Vacancy> {
    vacancies
        .into_iter()
        .filter(|vacancy| matches_keywords(vacancy, keywords))
        .collect()
}

/// Sorts by salary figure, highest first, vacancies without a figure last.
///
/// The sort is stable: ties keep their input order.
pub fn sort_by_salary_desc(vacancies: &mut [Vacancy]) {
    vacancies.sort_by(|a, b| b.compare(a));
}

/// Filters, sorts and truncates vacancies in one go.
pub fn rank(vacancies: Vec<Vacancy>, options: &RankingOptions) -> Vec<Vacancy> {
    let mut ranked = filter_by_keywords(vacancies, &options.keywords);
    sort_by_salary_desc(&mut ranked);
    ranked.truncate(clamp_top_n(options.top_n));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy(title: &str, salary: Option<&str>, description: &str) -> Vacancy {
        Vacancy::new(
            title,
            &format!("https://hh.ru/vacancy/{}", title),
            salary,
            description,
        )
        .unwrap()
    }

    fn titles(vacancies: &[Vacancy]) -> Vec<&str> {
        vacancies.iter().map(Vacancy::title).collect()
    }

    #[test]
    fn test_rank_top_two_by_salary() {
        let vacancies = vec![
            vacancy("none", None, ""),
            vacancy("low", Some("80000 RUR"), ""),
            vacancy("high", Some("100000 RUR"), ""),
        ];

        let ranked = rank(vacancies, &RankingOptions::new(Vec::new(), 2));
        assert_eq!(titles(&ranked), ["high", "low"]);
    }

    #[test]
    fn test_missing_salary_sorts_last() {
        let mut vacancies = vec![
            vacancy("none", None, ""),
            vacancy("one", Some("1"), ""),
        ];

        sort_by_salary_desc(&mut vacancies);
        assert_eq!(titles(&vacancies), ["one", "none"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut vacancies = vec![
            vacancy("a", Some("100"), ""),
            vacancy("none1", None, ""),
            vacancy("b", Some("от 100 до 200"), ""),
            vacancy("none2", Some("по договорённости"), ""),
            vacancy("c", Some("100"), ""),
        ];

        sort_by_salary_desc(&mut vacancies);
        assert_eq!(titles(&vacancies), ["a", "b", "c", "none1", "none2"]);
    }

    #[test]
    fn test_keyword_filter_is_case_insensitive_substring() {
        let vacancies = vec![
            vacancy("git", None, "Знание GIT обязательно"),
            vacancy("docker", None, "Docker, k8s"),
            vacancy("plain", None, "Python"),
        ];

        let filtered = filter_by_keywords(vacancies, &["gi".to_string(), "DOCK".to_string()]);
        assert_eq!(titles(&filtered), ["git", "docker"]);
    }

    #[test]
    fn test_keywords_match_description_only() {
        let vacancies = vec![vacancy("Rust Developer", None, "Backend")];

        let filtered = filter_by_keywords(vacancies, &["rust".to_string()]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_keywords_pass_everything() {
        let vacancies = vec![vacancy("a", None, ""), vacancy("b", None, "x")];
        assert_eq!(filter_by_keywords(vacancies, &[]).len(), 2);
    }

    #[test]
    fn test_top_n_is_clamped() {
        assert_eq!(clamp_top_n(0), 1);
        assert_eq!(clamp_top_n(5), 5);
        assert_eq!(clamp_top_n(500), 50);

        let vacancies = vec![vacancy("a", Some("1"), ""), vacancy("b", Some("2"), "")];
        let ranked = rank(vacancies, &RankingOptions::new(Vec::new(), 0));
        assert_eq!(titles(&ranked), ["b"]);
    }

    #[test]
    fn test_keyword_line_parsing() {
        let options = RankingOptions::from_keyword_line("  опыт   git ", 3);
        assert_eq!(options.keywords, ["опыт", "git"]);
        assert_eq!(options.top_n, 3);
    }
}
