//! The platform services facade.

use crate::config::PlatformConfig;
use crate::memory::MemoryDetector;
use crate::paths;
use crate::registry::ProbeRegistry;
use crate::temp_dir::TempDirResolver;
use crate::temp_files::{TempFile, TempFileManager, TempKind};
use crate::terminal;
use crate::traits::{MemoryProbe, PlatformServices};
use crate::unicode::{DefaultBackend, UnicodeBackend, UnicodeNormalizer, WideString};
use cf_core::error::Result;
use cf_core::reporting::{ConsoleReporter, ErrorReporter};
use std::io;
use std::path::{Path, PathBuf};

/// Default [`PlatformServices`] implementation for POSIX-style systems.
///
/// Owns its Unicode engine handles, so one instance serves one thread.
pub struct SystemServices {
    config: PlatformConfig,
    temp_files: TempFileManager,
    memory: MemoryDetector,
    unicode: UnicodeNormalizer,
    reporter: Box<dyn ErrorReporter>,
}

impl SystemServices {
    pub fn new() -> Self {
        Self::with_config(PlatformConfig::default())
    }

    pub fn with_config(config: PlatformConfig) -> Self {
        let resolver = TempDirResolver::with_override(config.temp_dir.clone());
        Self {
            temp_files: TempFileManager::new(resolver),
            memory: MemoryDetector::with_probe(ProbeRegistry::current(), config.maximum_memory),
            unicode: UnicodeNormalizer::new(Box::new(DefaultBackend)),
            reporter: Box::new(ConsoleReporter),
            config,
        }
    }

    /// Replace the reporter used for conversion and catastrophic errors.
    pub fn with_reporter(mut self, reporter: impl ErrorReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Replace the memory probe; the configured ceiling still applies.
    pub fn with_memory_probe(mut self, probe: Box<dyn MemoryProbe>) -> Self {
        self.memory = MemoryDetector::with_probe(probe, self.config.maximum_memory);
        self
    }

    /// Replace the Unicode engine. Handles are opened on the next `normalize`.
    pub fn with_unicode_backend(mut self, backend: Box<dyn UnicodeBackend>) -> Self {
        self.unicode = UnicodeNormalizer::new(backend);
        self
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn memory_probe_name(&self) -> &'static str {
        self.memory.probe_name()
    }
}

impl Default for SystemServices {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformServices for SystemServices {
    fn temp_file_directory(&self) -> PathBuf {
        let dir = self.temp_files.directory();
        tracing::debug!(dir = %dir.display(), "resolved temp dir");
        dir
    }

    fn temp_file_for_write(&self, kind: TempKind) -> Option<TempFile> {
        self.temp_files.create(kind)
    }

    fn delete_temp_file(&self, name: &Path) -> i32 {
        self.temp_files.delete(name)
    }

    fn find_temp_files(&self) -> Vec<PathBuf> {
        self.temp_files.find()
    }

    fn physical_memory(&self) -> u64 {
        self.memory.physical_memory_bytes()
    }

    fn normalize(&mut self, utf8_name: &[u8]) -> Result<WideString> {
        self.unicode.normalize(utf8_name, self.reporter.as_ref())
    }

    fn relative_file_path(&self, base: &str, rel: &str) -> String {
        paths::relative_file_path(base, rel)
    }

    fn catastrophic_error(&self, what: &str) {
        self.reporter.catastrophic(what);
    }

    fn clear_and_cr(&self) {
        terminal::clear_progress_line(&mut io::stderr().lock());
    }
}
