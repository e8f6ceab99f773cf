//! # CLI Console Handler
//!
//! A log handler that routes structured records into a host CLI tool's
//! console output functions, driven by an immutable severity map.
//!
//! ## Features
//!
//! - **Severity Map**: eight syslog-style levels, each mapped to an output
//!   target, a level-name prefix flag, and a termination flag
//! - **Injected Console**: the host's output functions arrive as a trait,
//!   so tests substitute a fake without simulating an environment
//! - **Exit-Free Core**: termination is reported as an outcome; only the
//!   live console boundary ends the process

pub mod core;
pub mod handlers;

pub mod prelude {
    pub use crate::core::{
        ConsoleOutput, HandlerError, LogRecord, MessageTemplate, OutputTarget, Result, Severity,
        SeverityMap, SeverityMapEntry, WriteOutcome,
    };
    pub use crate::handlers::ConsoleHandler;

    #[cfg(feature = "console")]
    pub use crate::handlers::HostConsole;
}

pub use crate::core::{
    ConsoleOutput, HandlerError, LogRecord, MessageTemplate, OutputTarget, Result, Severity,
    SeverityMap, SeverityMapEntry, WriteOutcome,
};
pub use crate::handlers::ConsoleHandler;

#[cfg(feature = "console")]
pub use crate::handlers::HostConsole;
