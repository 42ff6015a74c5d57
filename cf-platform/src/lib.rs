//! Platform services for the Context Free renderer.
//!
//! This crate hides three unrelated OS-facing concerns behind one capability
//! interface, [`PlatformServices`]:
//!
//! - scratch files: resolving the temp directory, creating uniquely named
//!   files atomically, finding and deleting them;
//! - physical memory detection for sizing render buffers, with the query
//!   mechanism chosen at compile time;
//! - NFKC normalization of filenames so equivalent spellings compare equal.

pub mod config;
pub mod memory;
pub mod paths;
pub mod providers;
pub mod registry;
pub mod services;
pub mod temp_dir;
pub mod temp_files;
pub mod terminal;
pub mod traits;
pub mod unicode;

// Re-export commonly used items
pub use config::PlatformConfig;
pub use memory::{MemoryDetector, DEFAULT_MAXIMUM_MEMORY};
pub use registry::ProbeRegistry;
pub use services::SystemServices;
pub use temp_files::{TempFile, TempKind, TEMP_PREFIX_ALL};
pub use traits::{MemoryProbe, PlatformServices};
pub use unicode::WideString;

/// Convenience functions for stateless queries
pub mod platform {
    use crate::memory::MemoryDetector;
    use crate::temp_dir;
    use std::path::PathBuf;

    /// Get the scratch directory from the environment
    pub fn temp_file_directory() -> PathBuf {
        temp_dir::resolve_temp_dir()
    }

    /// Get installed physical memory in bytes (0 if unknown)
    pub fn physical_memory() -> u64 {
        MemoryDetector::new().physical_memory_bytes()
    }
}
