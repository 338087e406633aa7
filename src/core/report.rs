use chrono::Utc;

use crate::core::models::{Outcome, RunReport};

/// Tallies one run. `finalize` consumes the accumulator, so a finalized
/// report can no longer be mutated.
#[derive(Debug)]
pub struct ReportAccumulator {
    report: RunReport,
}

impl ReportAccumulator {
    #[must_use]
    pub fn start() -> Self {
        Self {
            report: RunReport {
                processed: 0,
                failed: 0,
                total_discovered: 0,
                scanned_sources: 0,
                start_time: Utc::now(),
                end_time: None,
            },
        }
    }

    pub fn record_source_scanned(&mut self) {
        self.report.scanned_sources += 1;
    }

    pub fn record_discovered(&mut self, count: usize) {
        self.report.total_discovered += count;
    }

    pub fn record_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success => self.report.processed += 1,
            Outcome::Failure(_) => self.report.failed += 1,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &RunReport {
        &self.report
    }

    #[must_use]
    pub fn finalize(mut self) -> RunReport {
        self.report.end_time = Some(Utc::now());
        self.report
    }
}
