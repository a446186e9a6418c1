use async_trait::async_trait;

use crate::application::ports::{Summarizer, SummarizerError, SummaryBounds};

/// Offline stand-in that keeps the leading words of each chunk, capped by the
/// requested maximum length.
#[derive(Debug, Default)]
pub struct MockSummarizer;

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        bounds: SummaryBounds,
    ) -> Result<String, SummarizerError> {
        let keep = bounds.min_length.max(1).min(bounds.max_length.max(1));
        Ok(text
            .split_whitespace()
            .take(keep)
            .collect::<Vec<_>>()
            .join(" "))
    }
}
