//! Multipart form ingestion for the prediction endpoint.

use axum::extract::multipart::{Field, Multipart, MultipartError};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{Submission, UploadedDocument};

/// Reads every part of the form into a `Submission`.
///
/// Text fields: `message`, `university`, `satScore`, `gpa`, `others`, `beastMode`.
/// File field: `cv` (the first one wins). Anything else is drained and ignored.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "message" => submission.message = read_text(field).await?,
            "university" => submission.university = read_text(field).await?,
            "satScore" => submission.sat_score = read_text(field).await?,
            "gpa" => submission.gpa = read_text(field).await?,
            "others" => submission.others = read_text(field).await?,
            "beastMode" => submission.beast_mode = parse_flag(&read_text(field).await?),
            "cv" if submission.cv.is_none() => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(form_error)?;
                debug!(
                    "Received CV upload: name={:?}, type={:?}, {} bytes",
                    file_name,
                    content_type,
                    bytes.len()
                );
                submission.cv = Some(UploadedDocument {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            other => {
                debug!("Ignoring form field '{other}'");
                field.bytes().await.map_err(form_error)?;
            }
        }
    }

    debug!(
        "Parsed fields: university={:?}, sat_score={:?}, gpa={:?}, others={:?}, message={:?}, beast_mode={}",
        submission.university,
        submission.sat_score,
        submission.gpa,
        submission.others,
        submission.message,
        submission.beast_mode
    );

    Ok(submission)
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(form_error)
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on")
}

fn form_error(e: MultipartError) -> AppError {
    AppError::Form(e.body_text())
}
