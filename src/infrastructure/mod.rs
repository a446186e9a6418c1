pub mod conversion;
pub mod observability;
pub mod storage;
pub mod summarization;
pub mod text_processing;
