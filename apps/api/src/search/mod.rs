//! Web search used to enrich prompts with current admissions facts.
//!
//! Search is strictly best effort: callers degrade a failed query to an empty
//! snippet instead of failing the request (see `enrichment::enrich`).

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

pub mod enrichment;

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One remote lookup per query, returning the result snippets joined by newlines.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<String, SearchError>;
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub snippet: Option<String>,
}

impl SearchResponse {
    pub fn snippets(&self) -> String {
        self.items
            .iter()
            .map(|item| item.snippet.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

/// Google Custom Search JSON API client, keyed by API key and engine id (`cx`).
#[derive(Clone)]
pub struct GoogleSearchClient {
    client: Client,
    api_key: String,
    engine_id: String,
    endpoint: String,
}

impl GoogleSearchClient {
    pub fn new(api_key: String, engine_id: String) -> Result<Self> {
        Self::with_endpoint(api_key, engine_id, CUSTOM_SEARCH_URL.to_string())
    }

    pub fn with_endpoint(api_key: String, engine_id: String, endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build search HTTP client")?;
        Ok(Self {
            client,
            api_key,
            engine_id,
            endpoint,
        })
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.snippets())
    }
}
