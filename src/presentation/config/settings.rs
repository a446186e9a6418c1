use config::{Config, ConfigBuilder, ConfigError, File, builder::DefaultState};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub summarization: SummarizationSettings,
    pub normalization: NormalizationSettings,
    pub conversion: ConversionSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationSettings {
    pub provider: SummarizerProvider,
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub model: String,
    pub max_chunk_chars: usize,
    pub min_chunk_words: usize,
    pub min_summary_tokens: usize,
    pub max_summary_tokens: usize,
    pub concurrency: usize,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerProvider {
    #[serde(rename = "huggingface")]
    HuggingFace,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizationSettings {
    pub punctuation_spacing: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionSettings {
    pub temp_root: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProvider,
    #[serde(default)]
    pub cloudinary: CloudinarySettings,
    pub local: LocalStorageSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    Cloudinary,
    Local,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloudinarySettings {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub folder: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalStorageSettings {
    pub path: String,
    pub public_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults,
    /// `appsettings.<environment>.toml`, `APP_*` variables (`__` separates
    /// sections, e.g. `APP_SERVER__PORT`), then the conventional `PORT`,
    /// `HF_API_TOKEN` and `CLOUDINARY_*` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str().to_lowercase());

        let settings: Self = Self::defaults_builder()?
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.port", env("PORT"))?
            .set_override_option("summarization.api_token", env("HF_API_TOKEN"))?
            .set_override_option("storage.cloudinary.cloud_name", env("CLOUDINARY_CLOUD_NAME"))?
            .set_override_option("storage.cloudinary.api_key", env("CLOUDINARY_API_KEY"))?
            .set_override_option("storage.cloudinary.api_secret", env("CLOUDINARY_API_SECRET"))?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values that would only fail once requests arrive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let summarization = &self.summarization;
        if summarization.max_chunk_chars == 0 {
            return Err(ConfigError::Message(
                "summarization.max_chunk_chars must be greater than 0".to_string(),
            ));
        }
        if summarization.min_summary_tokens > summarization.max_summary_tokens {
            return Err(ConfigError::Message(format!(
                "summarization.min_summary_tokens ({}) exceeds max_summary_tokens ({})",
                summarization.min_summary_tokens, summarization.max_summary_tokens
            )));
        }
        if self.server.max_upload_size_mb == 0 {
            return Err(ConfigError::Message(
                "server.max_upload_size_mb must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Built-in defaults only, ignoring files and the environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::defaults_builder()?.build()?.try_deserialize()
    }

    fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("server.max_upload_size_mb", 25_i64)?
            .set_default("summarization.provider", "huggingface")?
            .set_default(
                "summarization.api_base_url",
                crate::infrastructure::summarization::DEFAULT_API_BASE_URL,
            )?
            .set_default(
                "summarization.model",
                crate::infrastructure::summarization::DEFAULT_MODEL,
            )?
            .set_default("summarization.max_chunk_chars", 1024_i64)?
            .set_default("summarization.min_chunk_words", 50_i64)?
            .set_default("summarization.min_summary_tokens", 30_i64)?
            .set_default("summarization.max_summary_tokens", 130_i64)?
            .set_default("summarization.concurrency", 1_i64)?
            .set_default("summarization.request_timeout_secs", 120_i64)?
            .set_default("normalization.punctuation_spacing", false)?
            .set_default("conversion.timeout_secs", 120_i64)?
            .set_default("storage.provider", "cloudinary")?
            .set_default("storage.local.path", "uploads")?
            .set_default("storage.local.public_base_url", "http://localhost:8080/files")?
            .set_default("logging.json", false)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_size_mb.saturating_mul(1024 * 1024)
    }
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
