//! Log record structure

use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One log record as handed to the handler by the logging front-end.
///
/// Records are transient: created per log call, routed once, discarded.
/// Context carries caller-supplied structured data; extra carries data
/// attached by processors further up the chain. Both default to an empty
/// JSON array so the verbose template always has something to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub context: Value,
    pub extra: Value,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: Self::sanitize_message(&message.into()),
            context: Value::Array(Vec::new()),
            extra: Value::Array(Vec::new()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_context(mut self, context: impl Into<Value>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_extra(mut self, extra: impl Into<Value>) -> Self {
        self.extra = extra.into();
        self
    }
}
