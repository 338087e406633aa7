use std::sync::Arc;

use anyhow::{Context, Result};
use tldw::clients::{GeminiClient, SampleTranscriptClient, TelegramClient, YouTubeClient};
use tldw::core::config::AppConfig;
use tldw::core::events::{EventSink, RunEvent};
use tldw::worker::{Collaborators, Orchestrator, RunSettings};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tldw::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::anyhow!(e)
    })?;
    info!("Loaded configuration: {:?}", config);
    warn!("Transcript fetching is simulated; every video uses the sample transcript");

    let clients = Collaborators {
        discovery: Arc::new(YouTubeClient::new(config.lookback_hours)),
        content: Arc::new(SampleTranscriptClient::new()),
        transform: Arc::new(GeminiClient::new(config.gemini_model.clone())),
        delivery: Arc::new(TelegramClient::new()),
    };

    let (sink, mut events) = EventSink::channel();
    let observer = tokio::spawn(async move {
        let mut final_report = None;
        while let Some(event) = events.recv().await {
            match event {
                RunEvent::Progress(p) => info!(current = p.current, total = p.total, "progress"),
                RunEvent::Completed(report) => final_report = Some(report),
                // Already mirrored to tracing by the sink.
                RunEvent::Log(_) => {}
            }
        }
        final_report
    });

    let orchestrator = Orchestrator::new(
        clients,
        RunSettings::default().with_timezone(config.timezone),
        sink,
    );
    let result = orchestrator.start(&config.run_request()).await;
    // Closes the event channel so the observer can finish.
    drop(orchestrator);

    let final_report = observer.await.context("event observer task failed")?;
    result.context("run did not start")?;

    if let Some(report) = final_report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
