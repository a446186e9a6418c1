mod hf_inference_summarizer;
mod mock_summarizer;
mod summarizer_factory;

pub use hf_inference_summarizer::{DEFAULT_API_BASE_URL, DEFAULT_MODEL, HfInferenceSummarizer};
pub use mock_summarizer::MockSummarizer;
pub use summarizer_factory::{SummarizerFactory, SummarizerFactoryError};
