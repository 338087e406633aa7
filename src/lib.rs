/// TLDW - a batch job that summarizes recent YouTube videos into a Telegram chat.
///
/// One run scans the configured channels for recent videos, fetches each
/// video's transcript, distills it with Gemini and posts the result to a
/// Telegram chat, followed by a summary report of the run.
///
/// # Architecture
///
/// - `worker` drives the run: discovery, per-item processing, delivery
/// - `clients` holds the collaborator traits and their HTTP implementations
/// - `core` holds configuration, the data model and the observer channel
/// - `utils` holds message chunking and delivery pacing
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tldw::clients::{GeminiClient, SampleTranscriptClient, TelegramClient, YouTubeClient};
/// use tldw::core::config::AppConfig;
/// use tldw::core::events::EventSink;
/// use tldw::worker::{Collaborators, Orchestrator, RunSettings};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     tldw::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let clients = Collaborators {
///         discovery: Arc::new(YouTubeClient::new(config.lookback_hours)),
///         content: Arc::new(SampleTranscriptClient::new()),
///         transform: Arc::new(GeminiClient::new(config.gemini_model.clone())),
///         delivery: Arc::new(TelegramClient::new()),
///     };
///     let orchestrator = Orchestrator::new(
///         clients,
///         RunSettings::default().with_timezone(config.timezone),
///         EventSink::disabled(),
///     );
///
///     let report = orchestrator.start(&config.run_request()).await?;
///     println!("processed {} of {}", report.processed, report.processed + report.failed);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod messages;
pub mod prompt;
pub mod utils;
pub mod worker;

pub use errors::{ClientError, ItemFailure, StartError};

/// Configure structured JSON logging.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// tldw::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
