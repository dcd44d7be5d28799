//! Enrichment search: fixed query templates fanned out concurrently against a
//! `SearchProvider`, folded into one word-budgeted context block.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::search::SearchProvider;

/// Substituted when every query comes back empty.
pub const NO_RESULTS_FALLBACK: &str = "No relevant search results found.";

/// Topic templates; each is suffixed with the university and admission year.
const TOPIC_TEMPLATES: [&str; 10] = [
    "common data sets",
    "first year high school student application requirements",
    "first year high school student application deadlines",
    "undergraduate admission statistics",
    "financial aid options for",
    "application essay prompts",
    "scholarship opportunities",
    "admissions process overview",
    "housing and dormitory options",
    "campus life and student activities",
];

/// One query and the snippets it produced (empty on failure or no results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryHit {
    pub query: String,
    pub snippets: String,
}

/// Ordered results of one enrichment fan-out.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub hits: Vec<QueryHit>,
}

impl Enrichment {
    pub fn is_empty(&self) -> bool {
        self.hits.iter().all(|h| h.snippets.is_empty())
    }

    /// Joins non-empty snippets with blank lines, or yields the fallback
    /// literal, then truncates to `word_budget` words.
    pub fn context_text(&self, word_budget: usize) -> String {
        if self.is_empty() {
            return truncate_words(NO_RESULTS_FALLBACK, word_budget).to_string();
        }

        let joined = self
            .hits
            .iter()
            .filter(|h| !h.snippets.is_empty())
            .map(|h| h.snippets.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        truncate_words(&joined, word_budget).to_string()
    }
}

/// Builds the fixed query list for a university and free-text request.
pub fn search_queries(university: &str, user_request: &str, year: u16) -> Vec<String> {
    let mut queries: Vec<String> = TOPIC_TEMPLATES
        .iter()
        .map(|topic| format!("{topic} {university} {year}"))
        .collect();
    queries.push(format!("{user_request} {university}"));
    queries
}

/// Runs every query concurrently and waits for all of them.
///
/// A failing query is logged and recorded as an empty snippet; this never errors.
pub async fn enrich(
    provider: &dyn SearchProvider,
    university: &str,
    user_request: &str,
    year: u16,
) -> Enrichment {
    let queries = search_queries(university, user_request, year);
    debug!("Running {} enrichment queries", queries.len());

    let results = join_all(queries.iter().map(|q| provider.search(q))).await;

    let hits: Vec<QueryHit> = queries
        .into_iter()
        .zip(results)
        .map(|(query, result)| {
            let snippets = match result {
                Ok(snippets) => snippets,
                Err(e) => {
                    warn!("Search failed for '{query}': {e}");
                    String::new()
                }
            };
            QueryHit { query, snippets }
        })
        .collect();

    let enrichment = Enrichment { hits };
    if enrichment.is_empty() {
        warn!("No relevant search results found for '{university}'");
    }
    enrichment
}

/// Returns the prefix of `text` ending after its `budget`-th whitespace-separated word.
///
/// Counts words, not model tokens. The result is always a prefix of the input.
pub fn truncate_words(text: &str, budget: usize) -> &str {
    if budget == 0 {
        return "";
    }

    let mut words = 0;
    let mut in_word = false;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if in_word {
                words += 1;
                if words == budget {
                    return &text[..idx];
                }
            }
            in_word = false;
        } else {
            in_word = true;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchError;
    use async_trait::async_trait;

    struct ScriptedSearch;

    #[async_trait]
    impl SearchProvider for ScriptedSearch {
        async fn search(&self, query: &str) -> Result<String, SearchError> {
            if query.starts_with("common data sets") {
                Ok("Admit rate 4%".to_string())
            } else if query.starts_with("financial aid") {
                Err(SearchError::Api {
                    status: 429,
                    message: "quota".to_string(),
                })
            } else if query.starts_with("How") {
                Ok("Essays matter".to_string())
            } else {
                Ok(String::new())
            }
        }
    }

    struct EmptySearch;

    #[async_trait]
    impl SearchProvider for EmptySearch {
        async fn search(&self, _query: &str) -> Result<String, SearchError> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_queries_interpolate_university_and_request() {
        let queries = search_queries("MIT", "How can I improve?", 2025);
        assert_eq!(queries.len(), 11);
        assert_eq!(queries[0], "common data sets MIT 2025");
        assert_eq!(queries[4], "financial aid options for MIT 2025");
        assert_eq!(queries[10], "How can I improve? MIT");
    }

    #[tokio::test]
    async fn test_enrich_keeps_order_and_swallows_failures() {
        let enrichment = enrich(&ScriptedSearch, "MIT", "How can I improve?", 2025).await;
        assert_eq!(enrichment.hits.len(), 11);
        assert_eq!(enrichment.hits[0].snippets, "Admit rate 4%");
        assert_eq!(enrichment.hits[4].snippets, "");
        assert_eq!(
            enrichment.context_text(100),
            "Admit rate 4%\n\nEssays matter"
        );
    }

    #[tokio::test]
    async fn test_all_empty_yields_fallback() {
        let enrichment = enrich(&EmptySearch, "MIT", "", 2025).await;
        assert!(enrichment.is_empty());
        assert_eq!(enrichment.context_text(3_000), NO_RESULTS_FALLBACK);
    }

    #[test]
    fn test_context_text_applies_budget_to_joined_snippets() {
        let long = "word ".repeat(2_000);
        let enrichment = Enrichment {
            hits: vec![
                QueryHit {
                    query: "a".into(),
                    snippets: long.trim().to_string(),
                },
                QueryHit {
                    query: "b".into(),
                    snippets: long.trim().to_string(),
                },
            ],
        };
        let text = enrichment.context_text(3_000);
        assert_eq!(text.split_whitespace().count(), 3_000);
    }

    #[test]
    fn test_truncate_keeps_at_most_budget_words() {
        let text = "one two\n\nthree  four five";
        let out = truncate_words(text, 3);
        assert_eq!(out, "one two\n\nthree");
        assert!(text.starts_with(out));
        assert_eq!(out.split_whitespace().count(), 3);
    }

    #[test]
    fn test_truncate_under_budget_returns_input() {
        assert_eq!(truncate_words("a b c", 10), "a b c");
        assert_eq!(truncate_words("a b c", 3), "a b c");
        assert_eq!(truncate_words("a b c ", 3), "a b c");
    }

    #[test]
    fn test_truncate_prefix_property_over_budgets() {
        let text = "  Stanford  admits\tabout 4% of applicants.\nDeadline: Jan 5. ";
        let total = text.split_whitespace().count();
        for budget in 0..=total + 2 {
            let out = truncate_words(text, budget);
            assert!(text.starts_with(out));
            assert!(out.split_whitespace().count() <= budget);
            assert_eq!(out.split_whitespace().count(), budget.min(total));
        }
    }

    #[test]
    fn test_truncate_multibyte_text() {
        assert_eq!(truncate_words("école für 学生 extra", 3), "école für 学生");
    }
}
