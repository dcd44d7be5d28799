// Prediction endpoint: multipart ingestion, CV extraction, prompt assembly and
// the pipeline that ties them to search and the LLM.
// All model calls go through llm_client; all search calls through search.

pub mod extract;
pub mod handlers;
pub mod ingest;
pub mod pipeline;
pub mod prompts;
