use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::state::diff::PageDiff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Capture,
    Restore,
    Remove,
}

/// One line of the trace journal.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub operation: Operation,

    pub page: String,
    pub state_file: String,

    pub controls: Option<usize>,
    pub fingerprint: Option<String>,
    pub changes: Option<String>,

    pub outcome: Option<String>,
}

impl TraceEvent {
    pub fn now(operation: Operation, page: &str, state_file: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            operation,
            page: page.to_string(),
            state_file: state_file.to_string(),
            controls: None,
            fingerprint: None,
            changes: None,
            outcome: None,
        }
    }

    pub fn with_controls(mut self, controls: usize) -> Self {
        self.controls = Some(controls);
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl ToString) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }

    pub fn with_changes(mut self, changes: &PageDiff) -> Self {
        self.changes = Some(changes.summary());
        self
    }

    pub fn with_outcome(mut self, outcome: impl ToString) -> Self {
        self.outcome = Some(outcome.to_string());
        self
    }
}
