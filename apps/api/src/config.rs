use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if any required variable is missing or blank.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key (`API_KEY`).
    pub gemini_api_key: String,
    pub search_api_key: String,
    /// Custom Search engine id, sent as `cx`.
    pub search_engine_id: String,
    /// Admission cycle interpolated into the enrichment queries.
    pub admission_year: u16,
    pub enrichment_word_budget: usize,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

const DEFAULT_ADMISSION_YEAR: u16 = 2025;
/// About 20k characters of English snippets at roughly six characters per word.
const DEFAULT_WORD_BUDGET: usize = 3_000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            gemini_api_key: require(&lookup, "API_KEY")?,
            search_api_key: require(&lookup, "CUSTOM_SEARCH_API_KEY")?,
            search_engine_id: require(&lookup, "CUSTOM_SEARCH_ENGINE_ID")?,
            admission_year: optional(&lookup, "ADMISSION_YEAR", DEFAULT_ADMISSION_YEAR)?,
            enrichment_word_budget: optional(
                &lookup,
                "ENRICHMENT_WORD_BUDGET",
                DEFAULT_WORD_BUDGET,
            )?,
            max_upload_bytes: optional(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: optional(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        _ => Ok(default),
    }
}
