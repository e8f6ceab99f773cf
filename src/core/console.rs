//! Console output trait: the injected host capability

/// Output functions the host CLI tool exposes to the handler.
///
/// The handler never touches process-wide state; everything it needs from
/// the host arrives through this trait. `is_active` is the runtime probe:
/// handler construction fails when the host reports itself inactive.
///
/// `error` receives `should_terminate` so a live console can end the
/// process after printing. Implementations that must stay alive (tests,
/// dry runs) are free to ignore the flag; the handler independently
/// reports termination through [`WriteOutcome::Terminate`].
pub trait ConsoleOutput: Send + Sync {
    /// Whether the host CLI runtime is up and able to receive output.
    fn is_active(&self) -> bool;

    fn debug(&self, message: &str);
    fn log(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str, should_terminate: bool);
}

/// Result of routing one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The record was not dispatched (below the gate, or no map entry).
    Skipped,
    /// The record was dispatched; processing continues normally.
    Handled,
    /// The record was dispatched and the process must now terminate.
    /// The handler itself never exits; the caller or the console boundary
    /// performs the actual process exit.
    Terminate,
}

impl WriteOutcome {
    pub fn is_handled(&self) -> bool {
        !matches!(self, WriteOutcome::Skipped)
    }
}
