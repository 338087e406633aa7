#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Notify;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

use tldw::clients::{ContentClient, DeliveryClient, SourceDiscoveryClient, TransformClient};
use tldw::core::config::{Credentials, RunRequest};
use tldw::core::events::{EventSink, RunEvent};
use tldw::core::models::{Item, LogEvent, Severity, Source};
use tldw::errors::ClientError;
use tldw::worker::{Collaborators, Orchestrator, RunSettings};

pub const YOUTUBE_KEY: &str = "yt-key";
pub const GEMINI_KEY: &str = "gemini-key";
pub const BOT_TOKEN: &str = "123:bot-token";
pub const CHAT_ID: &str = "-1001";

pub fn item(id: &str) -> Item {
    Item {
        id: id.to_string(),
        title: format!("Title {id}"),
        origin: "Test Channel".to_string(),
        published_at: Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap(),
    }
}

pub fn items(prefix: &str, count: usize) -> Vec<Item> {
    (0..count).map(|i| item(&format!("{prefix}-{i}"))).collect()
}

pub fn credentials() -> Credentials {
    Credentials {
        youtube_api_key: Some(YOUTUBE_KEY.to_string()),
        gemini_api_key: Some(GEMINI_KEY.to_string()),
        telegram_bot_token: Some(BOT_TOKEN.to_string()),
        telegram_chat_id: Some(CHAT_ID.to_string()),
    }
}

pub fn request(sources: &[&str]) -> RunRequest {
    RunRequest {
        credentials: credentials(),
        sources: sources.iter().map(|s| Source::new(*s)).collect(),
    }
}

#[derive(Default)]
pub struct FakeDiscovery {
    responses: HashMap<String, Result<Vec<Item>, ClientError>>,
    gate: Option<Arc<Notify>>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl FakeDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, id: &str, response: Result<Vec<Item>, ClientError>) -> Self {
        self.responses.insert(id.to_string(), response);
        self
    }

    /// Every call blocks until the gate is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn queried_sources(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(s, _)| s.clone()).collect()
    }
}

#[async_trait]
impl SourceDiscoveryClient for FakeDiscovery {
    async fn list_recent_items(
        &self,
        source: &Source,
        credential: &str,
    ) -> Result<Vec<Item>, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((source.id().to_string(), credential.to_string()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .get(source.id())
            .cloned()
            .unwrap_or_else(|| Err(ClientError::Transport("unknown source".to_string())))
    }
}

/// Returns `transcript for <id>` unless the id is marked missing, empty or
/// failing.
#[derive(Default)]
pub struct FakeContent {
    missing: HashSet<String>,
    empty: HashSet<String>,
    failing: HashMap<String, ClientError>,
}

impl FakeContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing(mut self, id: &str) -> Self {
        self.missing.insert(id.to_string());
        self
    }

    pub fn empty(mut self, id: &str) -> Self {
        self.empty.insert(id.to_string());
        self
    }

    pub fn failing(mut self, id: &str, error: ClientError) -> Self {
        self.failing.insert(id.to_string(), error);
        self
    }
}

#[async_trait]
impl ContentClient for FakeContent {
    async fn fetch(&self, item_id: &str) -> Result<Option<String>, ClientError> {
        if let Some(error) = self.failing.get(item_id) {
            return Err(error.clone());
        }
        if self.missing.contains(item_id) {
            return Ok(None);
        }
        if self.empty.contains(item_id) {
            return Ok(Some(String::new()));
        }
        Ok(Some(format!("transcript for {item_id}")))
    }
}

pub enum TransformMode {
    Echo,
    Fixed(String),
    FailOn(String, ClientError),
}

pub struct FakeTransform {
    mode: TransformMode,
    pub credentials_seen: Mutex<Vec<String>>,
}

impl FakeTransform {
    pub fn echo() -> Self {
        Self::with_mode(TransformMode::Echo)
    }

    pub fn fixed(text: impl Into<String>) -> Self {
        Self::with_mode(TransformMode::Fixed(text.into()))
    }

    /// Fails whenever the content mentions `marker`.
    pub fn fail_on(marker: &str, error: ClientError) -> Self {
        Self::with_mode(TransformMode::FailOn(marker.to_string(), error))
    }

    fn with_mode(mode: TransformMode) -> Self {
        Self {
            mode,
            credentials_seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TransformClient for FakeTransform {
    async fn transform(&self, content: &str, credential: &str) -> Result<String, ClientError> {
        self.credentials_seen
            .lock()
            .unwrap()
            .push(credential.to_string());
        match &self.mode {
            TransformMode::Echo => Ok(format!("summary of {content}")),
            TransformMode::Fixed(text) => Ok(text.clone()),
            TransformMode::FailOn(marker, error) if content.contains(marker.as_str()) => {
                Err(error.clone())
            }
            TransformMode::FailOn(..) => Ok(format!("summary of {content}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentChunk {
    pub at: Instant,
    pub target: String,
    pub credential: String,
    pub text: String,
}

/// Records every call. Calls whose text contains a failure marker fail.
#[derive(Default)]
pub struct FakeDelivery {
    fail_markers: Vec<String>,
    pub sent: Mutex<Vec<SentChunk>>,
}

impl FakeDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_markers.push(marker.to_string());
        self
    }

    pub fn sent(&self) -> Vec<SentChunk> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|c| c.text).collect()
    }
}

#[async_trait]
impl DeliveryClient for FakeDelivery {
    async fn send(&self, target: &str, credential: &str, chunk: &str) -> Result<(), ClientError> {
        self.sent.lock().unwrap().push(SentChunk {
            at: Instant::now(),
            target: target.to_string(),
            credential: credential.to_string(),
            text: chunk.to_string(),
        });
        if self.fail_markers.iter().any(|m| chunk.contains(m.as_str())) {
            return Err(ClientError::RateLimit("Too Many Requests".to_string()));
        }
        Ok(())
    }
}

pub struct Harness {
    pub discovery: Arc<FakeDiscovery>,
    pub transform: Arc<FakeTransform>,
    pub delivery: Arc<FakeDelivery>,
    pub orchestrator: Arc<Orchestrator>,
    pub events: UnboundedReceiver<RunEvent>,
}

pub fn harness(
    discovery: FakeDiscovery,
    content: FakeContent,
    transform: FakeTransform,
    delivery: FakeDelivery,
) -> Harness {
    let discovery = Arc::new(discovery);
    let transform = Arc::new(transform);
    let delivery = Arc::new(delivery);
    let (sink, events) = EventSink::channel();
    let orchestrator = Orchestrator::new(
        Collaborators {
            discovery: discovery.clone(),
            content: Arc::new(content),
            transform: transform.clone(),
            delivery: delivery.clone(),
        },
        RunSettings::default(),
        sink,
    );
    Harness {
        discovery,
        transform,
        delivery,
        orchestrator: Arc::new(orchestrator),
        events,
    }
}

pub fn drain(events: &mut UnboundedReceiver<RunEvent>) -> Vec<RunEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

pub fn logs(events: &[RunEvent]) -> Vec<LogEvent> {
    events
        .iter()
        .filter_map(|e| match e {
            RunEvent::Log(log) => Some(log.clone()),
            _ => None,
        })
        .collect()
}

pub fn error_messages(events: &[RunEvent]) -> Vec<String> {
    logs(events)
        .into_iter()
        .filter(|l| l.severity == Severity::Error)
        .map(|l| l.message)
        .collect()
}
