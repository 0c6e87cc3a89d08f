//! Error handling for the dashboard.
//!
//! Reports are `eyre` reports with `color_eyre` sections attached, so the
//! operator gets the error type and a suggestion when something fatal
//! reaches `main`.

use color_eyre::{Section, SectionExt};
use eyre::Report;

/// Result type alias for application operations
pub type Result<T> = eyre::Result<T>;

/// What the host loop should do with an error
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryStrategy {
    /// Transient terminal I/O, keep polling
    Retry,
    /// Log it and carry on
    Ignore,
    /// Stop the program with a non-zero status
    Exit,
}

pub trait RecoveryExt {
    fn recovery_strategy(&self) -> RecoveryStrategy;

    fn is_fatal(&self) -> bool {
        matches!(self.recovery_strategy(), RecoveryStrategy::Exit)
    }

    fn is_retryable(&self) -> bool {
        matches!(self.recovery_strategy(), RecoveryStrategy::Retry)
    }
}

impl RecoveryExt for Report {
    fn recovery_strategy(&self) -> RecoveryStrategy {
        if let Some(io_err) = self.downcast_ref::<std::io::Error>() {
            return match io_err.kind() {
                std::io::ErrorKind::TimedOut
                | std::io::ErrorKind::Interrupted
                | std::io::ErrorKind::WouldBlock => RecoveryStrategy::Retry,
                _ => RecoveryStrategy::Exit,
            };
        }

        let error_str = self.to_string().to_lowercase();
        if error_str.contains("logging") {
            RecoveryStrategy::Ignore
        } else {
            RecoveryStrategy::Exit
        }
    }
}

/// Helper functions for creating contextual errors
pub mod context {
    use super::*;

    pub fn terminal_init(message: impl Into<String>) -> Report {
        eyre::eyre!("{}", message.into())
            .with_section(|| "Terminal initialization failed".header("Error Type:"))
            .with_section(|| {
                "Run from an interactive terminal that supports raw mode".header("Suggestion:")
            })
    }

    /// The view registry and the active view id disagree. Unrecoverable.
    pub fn configuration(message: impl Into<String>) -> Report {
        eyre::eyre!("{}", message.into())
            .with_section(|| "Configuration error".header("Error Type:"))
            .with_section(|| {
                "Every view id must be registered at startup".header("Suggestion:")
            })
    }

    pub fn logging(message: impl Into<String>) -> Report {
        eyre::eyre!("logging: {}", message.into())
            .with_section(|| "Logging setup failed".header("Error Type:"))
            .with_section(|| {
                "The dashboard keeps running without a log file".header("Recovery:")
            })
    }
}

/// Extension trait for adding terminal-specific context to errors
pub trait TerminalErrorExt {
    fn with_terminal_context(self, raw_mode: bool, alternate_screen: bool) -> Report;
}

impl<E> TerminalErrorExt for E
where
    E: Into<Report>,
{
    fn with_terminal_context(self, raw_mode: bool, alternate_screen: bool) -> Report {
        self.into()
            .with_section(move || format!("Raw mode: {}", raw_mode).header("Terminal State:"))
            .with_section(move || {
                format!("Alternate screen: {}", alternate_screen).header("Screen Mode:")
            })
    }
}
