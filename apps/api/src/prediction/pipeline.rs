//! Prediction pipeline: CV extraction → enrichment search → prompt assembly →
//! LLM completion → response formatting.
//!
//! Each stage runs to completion before the next. The only concurrency is the
//! search fan-out inside `enrich`.

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::formatting::format_response;
use crate::llm_client::LlmError;
use crate::models::{PredictionResponse, Submission};
use crate::prediction::extract::extract_cv_text;
use crate::prediction::prompts::build_prediction_prompt;
use crate::search::enrichment::enrich;
use crate::state::AppState;

/// Runs the full pipeline for one submission.
pub async fn run_prediction(
    state: &AppState,
    submission: Submission,
) -> Result<PredictionResponse, AppError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{request_id}] Prediction for '{}' (cv: {})",
        submission.university,
        submission.cv.is_some()
    );

    // Step 1: CV text
    let cv_text = match &submission.cv {
        Some(document) => Some(extract_cv_text(document).await?),
        None => None,
    };

    // Step 2: Enrichment search
    let enrichment = enrich(
        state.search.as_ref(),
        &submission.university,
        &submission.message,
        state.config.admission_year,
    )
    .await;
    let search_results = enrichment.context_text(state.config.enrichment_word_budget);
    info!(
        "[{request_id}] Enrichment: {}/{} queries returned snippets",
        enrichment
            .hits
            .iter()
            .filter(|h| !h.snippets.is_empty())
            .count(),
        enrichment.hits.len()
    );
    for hit in enrichment.hits.iter().filter(|h| h.snippets.is_empty()) {
        debug!("[{request_id}] No snippets for '{}'", hit.query);
    }

    // Step 3: Prompt
    let prompt = build_prediction_prompt(&submission, cv_text.as_deref(), &search_results);

    // Step 4: Completion
    let completion = state.llm.complete(&prompt).await.map_err(completion_error)?;
    info!(
        "[{request_id}] Completion received: {} chars",
        completion.len()
    );

    // Step 5: Formatting
    Ok(PredictionResponse {
        message: format_response(&completion),
    })
}

fn completion_error(e: LlmError) -> AppError {
    match e {
        LlmError::EmptyContent => AppError::EmptyCompletion,
        LlmError::Api { message, .. } => AppError::Llm(message),
        other => AppError::Llm(other.to_string()),
    }
}
