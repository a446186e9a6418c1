use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::Summarizer;
use crate::presentation::config::{SummarizationSettings, SummarizerProvider};

use super::hf_inference_summarizer::HfInferenceSummarizer;
use super::mock_summarizer::MockSummarizer;

#[derive(Debug, thiserror::Error)]
pub enum SummarizerFactoryError {
    #[error("api_token is required for the Hugging Face provider")]
    MissingApiToken,
    #[error("summarizer initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct SummarizerFactory;

impl SummarizerFactory {
    pub fn create(
        settings: &SummarizationSettings,
    ) -> Result<Arc<dyn Summarizer>, SummarizerFactoryError> {
        match settings.provider {
            SummarizerProvider::HuggingFace => {
                let token = settings
                    .api_token
                    .as_deref()
                    .filter(|t| !t.trim().is_empty())
                    .ok_or(SummarizerFactoryError::MissingApiToken)?;
                let summarizer = HfInferenceSummarizer::new(
                    &settings.api_base_url,
                    &settings.model,
                    token.to_string(),
                    Duration::from_secs(settings.request_timeout_secs),
                )
                .map_err(|e| SummarizerFactoryError::InitializationFailed(e.to_string()))?;
                tracing::info!(endpoint = summarizer.endpoint(), "Using Hugging Face summarizer");
                Ok(Arc::new(summarizer))
            }
            SummarizerProvider::Mock => {
                tracing::warn!("Using mock summarizer, summaries are truncations of the input");
                Ok(Arc::new(MockSummarizer))
            }
        }
    }
}
