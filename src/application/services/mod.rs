mod conversion_service;
mod summarization_service;
mod text_normalizer;

pub use conversion_service::{
    ConversionError, ConversionService, ConvertedDocument, docx_filename, is_pdf_filename,
};
pub use summarization_service::{
    DEFAULT_MIN_CHUNK_WORDS, DocumentSummary, SummarizationError, SummarizationOptions,
    SummarizationService,
};
pub use text_normalizer::{TextNormalizer, normalize_text};
