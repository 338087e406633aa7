//! End-to-end run driver.
//!
//! A run goes Idle -> Running -> Idle: discovery, then every queued item in
//! order, then the final report. Only one run may be in flight per
//! [`Orchestrator`]; the state flips back to Idle when the run future ends,
//! however it ends.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono_tz::Tz;
use tracing::{info, warn};
use uuid::Uuid;

use super::deliver::deliver_chunks;
use super::discover::{ITEM_CAP, discover_items};
use super::process::ItemProcessor;
use crate::clients::{ContentClient, DeliveryClient, SourceDiscoveryClient, TransformClient};
use crate::core::config::RunRequest;
use crate::core::events::EventSink;
use crate::core::models::{Destination, RunReport, RunState};
use crate::core::report::ReportAccumulator;
use crate::errors::StartError;
use crate::messages::format_report_message;
use crate::utils::{DELIVERY_INTERVAL, MAX_MESSAGE_CHARS, Throttle, split_message};

/// The external services a run talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub discovery: Arc<dyn SourceDiscoveryClient>,
    pub content: Arc<dyn ContentClient>,
    pub transform: Arc<dyn TransformClient>,
    pub delivery: Arc<dyn DeliveryClient>,
}

#[derive(Debug, Clone, Copy)]
pub struct RunSettings {
    pub item_cap: usize,
    pub max_chunk_chars: usize,
    pub delivery_interval: Duration,
    pub timezone: Tz,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            item_cap: ITEM_CAP,
            max_chunk_chars: MAX_MESSAGE_CHARS,
            delivery_interval: DELIVERY_INTERVAL,
            timezone: Tz::UTC,
        }
    }
}

impl RunSettings {
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

pub struct Orchestrator {
    clients: Collaborators,
    settings: RunSettings,
    sink: EventSink,
    running: AtomicBool,
}

/// Holds the Running flag for the lifetime of one run.
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Orchestrator {
    #[must_use]
    pub fn new(clients: Collaborators, settings: RunSettings, sink: EventSink) -> Self {
        Self {
            clients,
            settings,
            sink,
            running: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        if self.running.load(Ordering::Acquire) {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// Starts a run and drives it to completion.
    ///
    /// Item, source and delivery failures never end a run early; they show up
    /// in the returned report and the event stream.
    ///
    /// # Errors
    ///
    /// Returns a [`StartError`] without touching the run state when credentials
    /// are missing, no source is configured, or another run is in flight.
    pub async fn start(&self, request: &RunRequest) -> Result<RunReport, StartError> {
        let credentials = match request.credentials.validated() {
            Ok(credentials) => credentials,
            Err(missing) => {
                let err = StartError::MissingCredentials(missing);
                self.sink.error(format!("{}. Please fill all fields.", err));
                return Err(err);
            }
        };
        if request.sources.is_empty() {
            let err = StartError::NoSources;
            self.sink.error(format!("{}.", err));
            return Err(err);
        }
        let Some(_guard) = RunGuard::acquire(&self.running) else {
            let err = StartError::AlreadyRunning;
            warn!("Start request rejected: {}", err);
            self.sink.error(format!("{}.", err));
            return Err(err);
        };

        let run_id = Uuid::new_v4();
        info!(
            "Run {} started with {} sources",
            run_id,
            request.sources.len()
        );
        self.sink.info("Starting process...");

        let mut report = ReportAccumulator::start();
        let mut throttle = Throttle::new(self.settings.delivery_interval);
        let destination = Destination {
            target: credentials.telegram_chat_id,
            credential: credentials.telegram_bot_token,
        };

        let queue = discover_items(
            self.clients.discovery.as_ref(),
            &request.sources,
            credentials.youtube_api_key,
            self.settings.item_cap,
            &mut report,
            &self.sink,
        )
        .await;

        let total = queue.len();
        self.sink.progress(0, total);

        let processor = ItemProcessor {
            content: self.clients.content.as_ref(),
            transform: self.clients.transform.as_ref(),
            delivery: self.clients.delivery.as_ref(),
            sink: &self.sink,
            max_chunk_chars: self.settings.max_chunk_chars,
            timezone: self.settings.timezone,
        };

        for (index, item) in queue.into_iter().enumerate() {
            let outcome = processor
                .process(item, credentials.gemini_api_key, destination, &mut throttle)
                .await;
            report.record_outcome(&outcome);
            self.sink.progress(index + 1, total);
        }

        let report = report.finalize();
        self.sink.completed(&report);
        self.send_report(&report, destination, &mut throttle).await;

        info!(
            "Run {} finished: processed={} failed={} discovered={} scanned={}",
            run_id,
            report.processed,
            report.failed,
            report.total_discovered,
            report.scanned_sources
        );
        Ok(report)
    }

    async fn send_report(
        &self,
        report: &RunReport,
        destination: Destination<'_>,
        throttle: &mut Throttle,
    ) {
        let message = format_report_message(report, self.settings.timezone);
        let chunks = split_message(&message, self.settings.max_chunk_chars);
        match deliver_chunks(self.clients.delivery.as_ref(), destination, &chunks, throttle).await {
            Ok(()) => self.sink.success("Final report sent to Telegram."),
            Err(e) => self
                .sink
                .error(format!("Failed to send final report to Telegram: {}", e)),
        }
    }
}
