//! Live console implementation for a running host CLI
//!
//! `debug` and `log` go to stdout; `warning` and `error` go to stderr with
//! colored tags. This is the only place in the crate that ends the
//! process: `error` honors its terminate flag after printing, so handler
//! cores and tests stay exit-free.

use crate::core::{ConsoleOutput, Severity};
use colored::Colorize;

pub struct HostConsole {
    active: bool,
    use_colors: bool,
    exit_code: i32,
}

impl HostConsole {
    /// Console for an active host runtime, with colored output.
    pub fn new() -> Self {
        Self {
            active: true,
            use_colors: true,
            exit_code: 1,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Console that reports the host runtime as inactive. Hosts that
    /// build their plumbing before the runtime is up hand this out so
    /// handler construction fails early instead of writing into the void.
    pub fn inactive() -> Self {
        Self {
            active: false,
            ..Self::new()
        }
    }

    /// Exit code used when a terminating error is printed.
    #[must_use]
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    fn tag(&self, name: &str, color: colored::Color) -> String {
        if self.use_colors {
            name.color(color).to_string()
        } else {
            name.to_string()
        }
    }
}

impl Default for HostConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleOutput for HostConsole {
    fn is_active(&self) -> bool {
        self.active
    }

    fn debug(&self, message: &str) {
        println!("{}: {}", self.tag("Debug", Severity::Debug.color_code()), message);
    }

    fn log(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{}: {}", self.tag("Warning", Severity::Warning.color_code()), message);
    }

    fn error(&self, message: &str, should_terminate: bool) {
        eprintln!("{}: {}", self.tag("Error", Severity::Error.color_code()), message);
        if should_terminate {
            use std::io::Write;
            let _ = std::io::stdout().flush();
            let _ = std::io::stderr().flush();
            std::process::exit(self.exit_code);
        }
    }
}
