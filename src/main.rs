use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use docdigest::application::ports::SummaryBounds;
use docdigest::application::services::{
    ConversionService, SummarizationOptions, SummarizationService, TextNormalizer,
};
use docdigest::infrastructure::conversion::PdfToDocxConverter;
use docdigest::infrastructure::observability::{TracingConfig, init_tracing};
use docdigest::infrastructure::storage::UploaderFactory;
use docdigest::infrastructure::summarization::SummarizerFactory;
use docdigest::infrastructure::text_processing::{CompositeFileLoader, FixedCharacterSplitter};
use docdigest::presentation::config::StorageProvider;
use docdigest::presentation::{AppState, Environment, RouterOptions, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    let json_format = settings.logging.json || TracingConfig::default().json_format;
    init_tracing(&TracingConfig::new(environment.as_str(), json_format));

    // Credentials are checked here so a misconfigured deployment never starts.
    let summarizer = SummarizerFactory::create(&settings.summarization)?;
    let uploader = UploaderFactory::create(&settings.storage)?;

    let summarization = &settings.summarization;
    let summarization_service = Arc::new(SummarizationService::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        Arc::new(FixedCharacterSplitter::new(summarization.max_chunk_chars)),
        summarizer,
        SummarizationOptions {
            normalizer: TextNormalizer::new(settings.normalization.punctuation_spacing),
            min_chunk_words: summarization.min_chunk_words,
            bounds: SummaryBounds {
                min_length: summarization.min_summary_tokens,
                max_length: summarization.max_summary_tokens,
                do_sample: false,
            },
            concurrency: summarization.concurrency,
        },
    ));

    let conversion_service = Arc::new(ConversionService::new(
        Arc::new(PdfToDocxConverter::new(Duration::from_secs(
            settings.conversion.timeout_secs,
        ))),
        uploader,
        settings.conversion.temp_root.as_ref().map(PathBuf::from),
    ));

    let state = AppState {
        summarization_service,
        conversion_service,
    };

    let public_files_dir = match settings.storage.provider {
        StorageProvider::Local => Some(PathBuf::from(&settings.storage.local.path)),
        StorageProvider::Cloudinary => None,
    };

    let router = create_router(
        state,
        RouterOptions {
            max_upload_bytes: settings.max_upload_bytes(),
            public_files_dir,
        },
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(address = %addr, environment = %environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
