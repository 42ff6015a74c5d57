pub mod error;
pub mod output_macros;
pub mod reporting;
pub mod tracing_init;

pub use error::{CfError, Result};
pub use reporting::{ConsoleReporter, ErrorReporter, FATAL_EXIT_CODE};

#[cfg(any(test, feature = "test-helpers"))]
pub use reporting::{RecordingReporter, Severity};
