use super::chunk::DocumentId;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

/// Upload formats the summarization endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
    MsWord,
    WordprocessingMl,
}

impl ContentType {
    pub const ACCEPTED: [ContentType; 4] = [
        ContentType::Pdf,
        ContentType::Text,
        ContentType::MsWord,
        ContentType::WordprocessingMl,
    ];

    /// Parameters such as `; charset=utf-8` are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::Text),
            "application/msword" => Some(Self::MsWord),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::WordprocessingMl)
            }
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain",
            Self::MsWord => "application/msword",
            Self::WordprocessingMl => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Self::MsWord | Self::WordprocessingMl)
    }

    pub fn accepted_mimes() -> String {
        Self::ACCEPTED
            .iter()
            .map(ContentType::as_mime)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            size_bytes,
        }
    }
}
