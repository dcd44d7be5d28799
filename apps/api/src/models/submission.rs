use bytes::Bytes;
use serde::Serialize;

/// One prediction request as submitted by the chat form.
///
/// Every text field is optional in practice: an absent field is an empty string.
/// Nothing is validated; values are passed through to the prompt verbatim.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub university: String,
    pub sat_score: String,
    pub gpa: String,
    /// International / other test scores.
    pub others: String,
    /// Free-text question from the user.
    pub message: String,
    /// Accepted from the predict page; has no effect on the answer.
    pub beast_mode: bool,
    pub cv: Option<UploadedDocument>,
}

/// A file part held in memory for the lifetime of the request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Successful response body: HTML converted from the model's markdown.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub message: String,
}
