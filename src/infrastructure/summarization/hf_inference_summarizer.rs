use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError, SummaryBounds};

pub const DEFAULT_API_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Summarizes through a hosted Hugging Face summarization pipeline.
pub struct HfInferenceSummarizer {
    client: Client,
    endpoint: String,
    api_token: String,
}

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: RequestOptions,
}

#[derive(Serialize)]
struct GenerationParameters {
    min_length: usize,
    max_length: usize,
    do_sample: bool,
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

impl HfInferenceSummarizer {
    pub fn new(
        api_base_url: &str,
        model: &str,
        api_token: String,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}", api_base_url.trim_end_matches('/'), model),
            api_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Summarizer for HfInferenceSummarizer {
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    async fn summarize(
        &self,
        text: &str,
        bounds: SummaryBounds,
    ) -> Result<String, SummarizerError> {
        let request_body = SummarizationRequest {
            inputs: text,
            parameters: GenerationParameters {
                min_length: bounds.min_length,
                max_length: bounds.max_length,
                do_sample: bounds.do_sample,
            },
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(SummarizerError::RateLimited),
            reqwest::StatusCode::SERVICE_UNAVAILABLE => {
                let body = response.text().await.unwrap_or_default();
                return Err(SummarizerError::ModelUnavailable(body));
            }
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(SummarizerError::ApiRequestFailed(format!(
                    "HTTP {}: {}",
                    status, body
                )));
            }
            _ => {}
        }

        let outputs: Vec<SummarizationOutput> = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text.trim().to_string())
            .ok_or_else(|| SummarizerError::InvalidResponse("empty response".to_string()))
    }
}
