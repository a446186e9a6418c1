mod composite_file_loader;
mod docx_adapter;
mod fixed_character_splitter;
mod pdf_adapter;
mod pdf_text_repair;
mod plain_text_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use fixed_character_splitter::{DEFAULT_MAX_CHUNK_CHARS, FixedCharacterSplitter};
pub use pdf_adapter::PdfAdapter;
pub use pdf_text_repair::repair_pdf_text;
pub use plain_text_adapter::PlainTextAdapter;
