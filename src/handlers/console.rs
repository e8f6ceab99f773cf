//! Console handler: routes log records to the host CLI's console
//!
//! The handler is a thin, synchronous router. Per record it gates on the
//! configured minimum level, looks the severity up in the severity map,
//! renders the message, optionally prefixes the level name, and dispatches
//! to one of the host's four output functions. Severities whose map entry
//! terminates the process are reported back as [`WriteOutcome::Terminate`];
//! the actual exit happens at the console boundary, never here.

use crate::core::{
    ConsoleOutput, HandlerError, LogRecord, MessageTemplate, OutputTarget, Result, Severity,
    SeverityMap, WriteOutcome,
};

#[derive(Debug)]
pub struct ConsoleHandler<C: ConsoleOutput> {
    console: C,
    map: SeverityMap,
    minimum_level: Severity,
    bubble: bool,
    template: MessageTemplate,
}

impl<C: ConsoleOutput> ConsoleHandler<C> {
    /// Create a handler bound to the given console.
    ///
    /// Fails with [`HandlerError::EnvironmentNotActive`] when the console
    /// reports the host runtime as inactive, and propagates any severity
    /// map construction failure.
    pub fn new(console: C, minimum_level: Severity, bubble: bool, verbose: bool) -> Result<Self> {
        if !console.is_active() {
            return Err(HandlerError::EnvironmentNotActive);
        }
        Ok(Self {
            console,
            map: SeverityMap::build()?,
            minimum_level,
            bubble,
            template: if verbose {
                MessageTemplate::Verbose
            } else {
                MessageTemplate::Standard
            },
        })
    }

    /// Create a handler with the default configuration: minimum level
    /// Info, bubbling enabled, standard template.
    pub fn with_defaults(console: C) -> Result<Self> {
        Self::new(console, Severity::Info, true, false)
    }

    /// Replace the default severity map with a custom one.
    #[must_use]
    pub fn with_severity_map(mut self, map: SeverityMap) -> Self {
        self.map = map;
        self
    }

    /// Whether a handled record should continue to subsequent handlers.
    pub fn bubble(&self) -> bool {
        self.bubble
    }

    pub fn minimum_level(&self) -> Severity {
        self.minimum_level
    }

    /// Whether this handler will process the record.
    ///
    /// Debug records at or above the minimum level are always claimed,
    /// even when the map has no Debug entry: the host CLI owns its own
    /// debug-output toggle and decides visibility itself. Every other
    /// severity is claimed only when the map covers it.
    pub fn is_handling(&self, record: &LogRecord) -> bool {
        if record.severity < self.minimum_level {
            return false;
        }
        if record.severity == Severity::Debug {
            return true;
        }
        self.map.lookup(record.severity).is_some()
    }

    /// Route one record to the console.
    ///
    /// Returns `Skipped` without output when the record is gated out or
    /// its severity has no map entry. Records whose entry terminates the
    /// process are still dispatched first (the error output receives the
    /// terminate flag), then reported as `Terminate`.
    pub fn handle(&mut self, record: &LogRecord) -> Result<WriteOutcome> {
        if !self.is_handling(record) {
            return Ok(WriteOutcome::Skipped);
        }

        // Debug records pass is_handling unconditionally, so a custom map
        // without a Debug entry lands here and must degrade to a no-op.
        let Some(entry) = self.map.lookup(record.severity) else {
            return Ok(WriteOutcome::Skipped);
        };

        let mut message = self.template.render(record);
        if entry.include_level_name() {
            message = format!("({}) {}", entry.severity(), message);
        }

        match entry.target() {
            OutputTarget::Debug => self.console.debug(&message),
            OutputTarget::Log => self.console.log(&message),
            OutputTarget::Warning => self.console.warning(&message),
            OutputTarget::Error => self.console.error(&message, entry.terminates_process()),
        }

        Ok(if entry.terminates_process() {
            WriteOutcome::Terminate
        } else {
            WriteOutcome::Handled
        })
    }
}
