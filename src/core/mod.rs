//! Core handler types and traits

pub mod console;
pub mod error;
pub mod formatter;
pub mod record;
pub mod severity;
pub mod severity_map;

pub use console::{ConsoleOutput, WriteOutcome};
pub use error::{HandlerError, Result};
pub use formatter::MessageTemplate;
pub use record::LogRecord;
pub use severity::Severity;
pub use severity_map::{OutputTarget, SeverityMap, SeverityMapEntry};
