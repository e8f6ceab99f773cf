//! Severity map: the level-to-action dispatch table
//!
//! Associates each supported severity level with a console output target,
//! a level-name prefix flag, and a process-termination flag. The map is
//! built once, validated at construction, and never mutated afterwards.

use super::error::{HandlerError, Result};
use super::severity::Severity;

/// The host console function a severity dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    Debug,
    Log,
    Warning,
    Error,
}

/// One row of the severity map.
///
/// Only constructible through [`SeverityMapEntry::new`], which enforces
/// that process termination is reserved for Error-and-above severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityMapEntry {
    severity: Severity,
    target: OutputTarget,
    include_level_name: bool,
    terminates_process: bool,
}

impl SeverityMapEntry {
    pub fn new(
        severity: Severity,
        target: OutputTarget,
        include_level_name: bool,
        terminates_process: bool,
    ) -> Result<Self> {
        if terminates_process && severity < Severity::Error {
            return Err(HandlerError::config(
                "SeverityMap",
                format!(
                    "severity {} may not terminate the process; termination requires {} or above",
                    severity,
                    Severity::Error
                ),
            ));
        }
        Ok(Self {
            severity,
            target,
            include_level_name,
            terminates_process,
        })
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn target(&self) -> OutputTarget {
        self.target
    }

    pub fn include_level_name(&self) -> bool {
        self.include_level_name
    }

    pub fn terminates_process(&self) -> bool {
        self.terminates_process
    }
}

/// Ordered, immutable table of severity map entries.
#[derive(Debug, Clone)]
pub struct SeverityMap {
    entries: Vec<SeverityMapEntry>,
}

impl SeverityMap {
    /// Build the default map covering all eight severity levels.
    ///
    /// Info and Notice share the plain `log` target; Error and above all
    /// route to `error`, with termination starting at Critical.
    pub fn build() -> Result<Self> {
        use OutputTarget::*;
        Self::from_entries(vec![
            SeverityMapEntry::new(Severity::Debug, Debug, false, false)?,
            SeverityMapEntry::new(Severity::Info, Log, false, false)?,
            SeverityMapEntry::new(Severity::Notice, Log, false, false)?,
            SeverityMapEntry::new(Severity::Warning, Warning, false, false)?,
            SeverityMapEntry::new(Severity::Error, Error, true, false)?,
            SeverityMapEntry::new(Severity::Critical, Error, true, true)?,
            SeverityMapEntry::new(Severity::Alert, Error, true, true)?,
            SeverityMapEntry::new(Severity::Emergency, Error, true, true)?,
        ])
    }

    /// Build a map from custom entries. Duplicate severities are rejected.
    pub fn from_entries(entries: Vec<SeverityMapEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.severity == entry.severity) {
                return Err(HandlerError::config(
                    "SeverityMap",
                    format!("duplicate entry for severity {}", entry.severity),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Exact-match lookup. `None` means the level is not covered and the
    /// record should be skipped rather than dispatched.
    pub fn lookup(&self, severity: Severity) -> Option<&SeverityMapEntry> {
        self.entries.iter().find(|e| e.severity == severity)
    }

    pub fn entries(&self) -> &[SeverityMapEntry] {
        &self.entries
    }
}
