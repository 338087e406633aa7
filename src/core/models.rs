use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ItemFailure;

/// A configured origin of items, e.g. a YouTube channel id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source(String);

impl Source {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discovered unit of content, consumed once by the item pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    /// Human-readable name of the source, e.g. the channel title.
    pub origin: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Success,
    Error,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            timestamp: Utc::now(),
        }
    }
}

/// Aggregate outcome of one run. `end_time` is set once the run is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub processed: usize,
    pub failed: usize,
    pub total_discovered: usize,
    pub scanned_sources: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunState {
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

/// Terminal classification of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(ItemFailure),
}

impl Outcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(failure) => Some(failure.to_string()),
        }
    }
}

/// Where messages go: a chat id plus the bot credential allowed to post there.
#[derive(Debug, Clone, Copy)]
pub struct Destination<'a> {
    pub target: &'a str,
    pub credential: &'a str,
}
