use async_trait::async_trait;

/// Generation bounds passed to the summarization model for every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryBounds {
    pub min_length: usize,
    pub max_length: usize,
    pub do_sample: bool,
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self {
            min_length: 30,
            max_length: 130,
            do_sample: false,
        }
    }
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str, bounds: SummaryBounds)
    -> Result<String, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
