//! Core traits for platform abstraction.
//!
//! This module defines the capability interfaces the renderer talks to. Each
//! platform-specific concern sits behind one of these traits so callers never
//! need their own `#[cfg]` conditionals.

use crate::temp_files::{TempFile, TempKind};
use crate::unicode::WideString;
use cf_core::error::Result;
use std::path::{Path, PathBuf};

/// Platform services consumed by the renderer.
///
/// Implementations are single-threaded: the Unicode handles behind
/// [`normalize`](PlatformServices::normalize) are owned by the instance and
/// unsynchronized, so each thread needs its own instance.
pub trait PlatformServices {
    // === Temporary Files ===

    /// Directory used for scratch files. Never fails; may name an unwritable path.
    fn temp_file_directory(&self) -> PathBuf;

    /// Atomically create a new, empty scratch file of the given kind.
    ///
    /// Returns `None` when the file could not be created. Nothing is left on
    /// disk in that case.
    fn temp_file_for_write(&self, kind: TempKind) -> Option<TempFile>;

    /// Remove a scratch file, returning 0 on success and -1 on failure.
    fn delete_temp_file(&self, name: &Path) -> i32;

    /// Snapshot of every scratch file currently in the temp directory.
    fn find_temp_files(&self) -> Vec<PathBuf>;

    // === System Information ===

    /// Installed physical memory in bytes, clamped; 0 means unknown.
    fn physical_memory(&self) -> u64;

    // === Filenames ===

    /// NFKC-normalize UTF-8 filename text into wide characters.
    fn normalize(&mut self, utf8_name: &[u8]) -> Result<WideString>;

    /// Resolve `rel` against the directory part of `base`.
    fn relative_file_path(&self, base: &str, rel: &str) -> String;

    // === Process & Terminal ===

    /// Report an unrecoverable failure; the process is expected to exit.
    fn catastrophic_error(&self, what: &str);

    /// Erase the current terminal line and return to column zero.
    fn clear_and_cr(&self);
}

/// Source of the installed physical memory size.
///
/// One implementation exists per OS query mechanism; the registry picks the
/// right one at compile time.
pub trait MemoryProbe: Send + Sync {
    /// Probe name (e.g., "sysconf", "sysctl", "unsupported")
    fn name(&self) -> &'static str;

    /// Raw reading in bytes, or `None` when the platform cannot tell.
    fn total_physical_memory(&self) -> Option<u64>;
}
