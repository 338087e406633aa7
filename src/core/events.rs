//! Observer channel for run progress.
//!
//! Every stage reports through an [`EventSink`]. Log events are mirrored to
//! `tracing`; a dropped receiver never interrupts a run.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::core::models::{LogEvent, Progress, RunReport, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    Log(LogEvent),
    Progress(Progress),
    Completed(RunReport),
}

#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Option<UnboundedSender<RunEvent>>,
}

impl EventSink {
    #[must_use]
    pub fn channel() -> (Self, UnboundedReceiver<RunEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// A sink with no observer; events only reach `tracing`.
    #[must_use]
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.log(Severity::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    pub fn system(&self, message: impl Into<String>) {
        self.log(Severity::System, message);
    }

    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        let event = LogEvent::new(severity, message);
        match severity {
            Severity::Error => error!(severity = "ERROR", "{}", event.message),
            Severity::System => debug!(severity = "SYSTEM", "{}", event.message),
            Severity::Info => info!(severity = "INFO", "{}", event.message),
            Severity::Success => info!(severity = "SUCCESS", "{}", event.message),
        }
        self.emit(RunEvent::Log(event));
    }

    pub fn progress(&self, current: usize, total: usize) {
        self.emit(RunEvent::Progress(Progress { current, total }));
    }

    pub fn completed(&self, report: &RunReport) {
        self.emit(RunEvent::Completed(report.clone()));
    }

    fn emit(&self, event: RunEvent) {
        if let Some(tx) = &self.tx
            && tx.send(event).is_err()
        {
            debug!("Run observer has gone away; event dropped");
        }
    }
}
