pub mod submission;

pub use submission::{PredictionResponse, Submission, UploadedDocument};
