//! Message templates for rendered records
//!
//! Two templates are supported:
//! - Standard: message only (default)
//! - Verbose: message followed by context and extra as compact JSON

use super::record::LogRecord;

/// Template used to render a record into the console message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageTemplate {
    /// `{message}`
    #[default]
    Standard,

    /// `{message} {context} {extra}`
    ///
    /// Example: `test ["context"] []`
    Verbose,
}

impl MessageTemplate {
    /// Render a record according to this template. Pure, no side effects.
    pub fn render(&self, record: &LogRecord) -> String {
        match self {
            MessageTemplate::Standard => record.message.clone(),
            MessageTemplate::Verbose => format!(
                "{} {} {}",
                record.message,
                Self::compact_json(&record.context),
                Self::compact_json(&record.extra),
            ),
        }
    }

    fn compact_json(value: &serde_json::Value) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
    }
}
