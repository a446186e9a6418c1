mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CloudinarySettings, ConversionSettings, LocalStorageSettings, LoggingSettings,
    NormalizationSettings, ServerSettings, Settings, StorageProvider, StorageSettings,
    SummarizationSettings, SummarizerProvider,
};
