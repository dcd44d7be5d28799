//! CV text extraction. The upload lives in a temp file only for the duration
//! of the extraction; the file is removed when the handle drops.

use std::io::Write;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::AppError;
use crate::models::UploadedDocument;

/// Extracts plain text from an uploaded PDF.
///
/// PDF parsing is CPU-bound and runs on the blocking pool. Any failure, including
/// a panic inside the parser, is reported as `AppError::Extraction`.
pub async fn extract_cv_text(document: &UploadedDocument) -> Result<String, AppError> {
    let bytes = document.bytes.clone();

    let text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let mut file = NamedTempFile::new().map_err(extraction_error)?;
        file.write_all(&bytes).map_err(extraction_error)?;
        file.flush().map_err(extraction_error)?;

        pdf_extract::extract_text(file.path()).map_err(extraction_error)
    })
    .await
    .map_err(|e| AppError::Extraction(format!("PDF extraction aborted: {e}")))??;

    debug!(
        "CV text extracted from {:?} ({:?}): {} chars",
        document.file_name,
        document.content_type,
        text.len()
    );
    Ok(text)
}

fn extraction_error(e: impl std::fmt::Display) -> AppError {
    AppError::Extraction(e.to_string())
}
