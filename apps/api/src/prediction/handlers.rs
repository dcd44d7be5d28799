//! Axum route handlers for the prediction API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::Method,
    Json,
};

use crate::errors::AppError;
use crate::models::PredictionResponse;
use crate::prediction::ingest::read_submission;
use crate::prediction::pipeline::run_prediction;
use crate::state::AppState;

/// POST /api/predict
///
/// Multipart form → formatted admissions advice. A body that is not a valid
/// multipart form fails the same way as any other ingestion error.
pub async fn handle_predict(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictionResponse>, AppError> {
    let multipart = multipart.map_err(|e| AppError::Form(e.body_text()))?;
    let submission = read_submission(multipart).await?;
    let response = run_prediction(&state, submission).await?;
    Ok(Json(response))
}

/// Any method other than POST on /api/predict.
pub async fn handle_method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
