//! Error reporting capability.
//!
//! Components never decide on their own how a failure reaches the user. They
//! are handed an [`ErrorReporter`] by the application and call into it: once
//! for failures that abort the current operation, and once for failures that
//! nothing can recover from.

use crate::{cf_eprint, cf_error};

/// Exit code used when the process is terminated by a catastrophic error.
pub const FATAL_EXIT_CODE: i32 = 33;

/// Sink for failures raised by platform components.
pub trait ErrorReporter: Send + Sync {
    /// Report an error that aborts the current operation but not the process.
    fn error(&self, message: &str);

    /// Report an unrecoverable error.
    ///
    /// Implementations are expected not to return. Callers still propagate an
    /// error afterwards so that a non-terminating reporter leaves them in a
    /// consistent state.
    fn catastrophic(&self, message: &str);
}

/// Reporter that writes to stderr and exits on catastrophic errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ErrorReporter for ConsoleReporter {
    fn error(&self, message: &str) {
        tracing::error!(reason = message, "operation aborted");
        cf_error!("Error: {}", message);
    }

    fn catastrophic(&self, message: &str) {
        tracing::error!(reason = message, "catastrophic failure, exiting");
        cf_eprint!("\n\nUnexpected error: {}\n", message);
        std::process::exit(FATAL_EXIT_CODE);
    }
}

/// Severity of a recorded report.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Catastrophic,
}

/// Reporter that records every message and never terminates.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: std::sync::Mutex<Vec<(Severity, String)>>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first.
    pub fn reports(&self) -> Vec<(Severity, String)> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.reports()
            .iter()
            .filter(|(recorded, _)| *recorded == severity)
            .count()
    }

    fn record(&self, severity: Severity, message: &str) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push((severity, message.to_string()));
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl ErrorReporter for RecordingReporter {
    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }

    fn catastrophic(&self, message: &str) {
        self.record(Severity::Catastrophic, message);
    }
}

// Shared handles are reporters too, so tests can keep a clone for inspection.
impl<R: ErrorReporter + ?Sized> ErrorReporter for std::sync::Arc<R> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn catastrophic(&self, message: &str) {
        (**self).catastrophic(message)
    }
}
