mod pdf_to_docx_converter;

pub use pdf_to_docx_converter::{DEFAULT_CONVERSION_TIMEOUT, PdfToDocxConverter};
