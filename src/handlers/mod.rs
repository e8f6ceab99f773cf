//! Handler implementations

pub mod console;

#[cfg(feature = "console")]
pub mod host;

pub use console::ConsoleHandler;

#[cfg(feature = "console")]
pub use host::HostConsole;

// Re-export the capability trait alongside its consumers
pub use crate::core::ConsoleOutput;
