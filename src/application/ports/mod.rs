mod document_converter;
mod file_loader;
mod file_uploader;
mod summarizer;
mod text_splitter;

pub use document_converter::{ConverterError, DocumentConverter};
pub use file_loader::{FileLoader, FileLoaderError};
pub use file_uploader::{FileUploader, UploadError};
pub use summarizer::{Summarizer, SummarizerError, SummaryBounds};
pub use text_splitter::{TextSplitter, TextSplitterError};
