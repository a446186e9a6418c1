mod chunk;
mod document;
mod storage_path;
mod summary;

pub use chunk::{Chunk, DocumentId};
pub use document::{ContentType, Document};
pub use storage_path::StoragePath;
pub use summary::Summary;
