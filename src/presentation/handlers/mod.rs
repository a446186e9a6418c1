mod convert;
mod error;
mod health;
mod summarize;
mod upload;

pub use convert::{ConvertResponse, convert_to_word_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::{HealthResponse, health_handler};
pub use summarize::{SummarizeResponse, summarize_handler};
