//! Scratch file lifecycle: creation, discovery and deletion.
//!
//! Every scratch file name is `<kind prefix><6 random chars><kind suffix>`,
//! and every kind prefix starts with [`TEMP_PREFIX_ALL`]. Discovery matches
//! on that shared prefix only, so unrelated files in a shared temp
//! directory are never touched.

use crate::temp_dir::TempDirResolver;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Leading prefix shared by every scratch file kind.
pub const TEMP_PREFIX_ALL: &str = "cf_";

/// Number of random characters substituted into each generated name.
pub const RANDOM_NAME_LEN: usize = 6;

/// Category of scratch file, selecting its naming pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempKind {
    /// Rendered image output awaiting its final destination.
    Image,
    /// Movie frames being assembled.
    Movie,
    /// Intermediate shape expansion data.
    Expansion,
}

impl TempKind {
    pub const ALL: [TempKind; 3] = [TempKind::Image, TempKind::Movie, TempKind::Expansion];

    pub fn prefix(self) -> &'static str {
        match self {
            TempKind::Image => "cf_",
            TempKind::Movie => "cf_mov_",
            TempKind::Expansion => "cf_exp_",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TempKind::Image => ".tmp",
            TempKind::Movie => ".mov",
            TempKind::Expansion => ".cfx",
        }
    }
}

/// A freshly created scratch file, open for writing.
///
/// The file is not removed when this value is dropped; the caller owns it and
/// deletes it with [`TempFileManager::delete`] when done.
#[derive(Debug)]
pub struct TempFile {
    stream: BufWriter<File>,
    path: PathBuf,
}

impl TempFile {
    /// Full path of the generated file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stream(&mut self) -> &mut BufWriter<File> {
        &mut self.stream
    }

    pub fn into_parts(self) -> (BufWriter<File>, PathBuf) {
        (self.stream, self.path)
    }
}

impl Write for TempFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

/// Creates, finds and deletes scratch files in the resolved temp directory.
#[derive(Debug, Clone, Default)]
pub struct TempFileManager {
    resolver: TempDirResolver,
}

impl TempFileManager {
    pub fn new(resolver: TempDirResolver) -> Self {
        Self { resolver }
    }

    pub fn directory(&self) -> PathBuf {
        self.resolver.resolve()
    }

    /// Create a new empty scratch file of the given kind.
    ///
    /// The name is generated and the file opened exclusively in one step, so
    /// concurrent callers (in this or other processes) never collide. On
    /// failure `None` is returned and no file is left behind.
    pub fn create(&self, kind: TempKind) -> Option<TempFile> {
        create_in(&self.directory(), kind)
    }

    /// Remove a scratch file. Returns 0 on success and -1 on failure.
    pub fn delete(&self, name: &Path) -> i32 {
        match fs::remove_file(name) {
            Ok(()) => 0,
            Err(e) => {
                tracing::debug!(path = %name.display(), error = %e, "could not delete temp file");
                -1
            }
        }
    }

    /// List every scratch file in the temp directory, across all kinds.
    ///
    /// An unreadable directory yields an empty list.
    pub fn find(&self) -> Vec<PathBuf> {
        find_in(&self.directory())
    }
}

/// List every scratch file in `dir`; empty if `dir` cannot be read.
pub fn find_in(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "could not list temp dir");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .filter(|name| name.to_string_lossy().starts_with(TEMP_PREFIX_ALL))
        .map(|name| dir.join(name))
        .collect()
}

/// Create a new empty scratch file of the given kind in `dir`.
pub fn create_in(dir: &Path, kind: TempKind) -> Option<TempFile> {
    let named = match Builder::new()
        .prefix(kind.prefix())
        .suffix(kind.suffix())
        .rand_bytes(RANDOM_NAME_LEN)
        .tempfile_in(dir)
    {
        Ok(named) => named,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), ?kind, error = %e, "could not create temp file");
            return None;
        }
    };

    // A failed keep drops the NamedTempFile, which removes the file again.
    match named.keep() {
        Ok((file, path)) => {
            tracing::debug!(path = %path.display(), ?kind, "created temp file");
            Some(TempFile {
                stream: BufWriter::new(file),
                path,
            })
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), ?kind, error = %e.error, "could not keep temp file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> TempFileManager {
        TempFileManager::new(TempDirResolver::with_override(Some(dir.path().to_path_buf())))
    }

    #[test]
    fn test_every_kind_shares_common_prefix() {
        for kind in TempKind::ALL {
            assert!(kind.prefix().starts_with(TEMP_PREFIX_ALL));
            assert!(kind.suffix().starts_with('.'));
        }
    }

    #[test]
    fn test_create_uses_kind_pattern() {
        let scratch = TempDir::new().unwrap();
        let manager = manager_in(&scratch);

        for kind in TempKind::ALL {
            let file = manager.create(kind).expect("temp file");
            let name = file.path().file_name().unwrap().to_string_lossy().into_owned();

            assert_eq!(file.path().parent(), Some(scratch.path()));
            assert!(name.starts_with(kind.prefix()));
            assert!(name.ends_with(kind.suffix()));
            assert_eq!(
                name.len(),
                kind.prefix().len() + RANDOM_NAME_LEN + kind.suffix().len()
            );
        }
    }

    #[test]
    fn test_created_file_is_empty_and_writable() {
        let scratch = TempDir::new().unwrap();
        let manager = manager_in(&scratch);

        let mut file = manager.create(TempKind::Image).expect("temp file");
        assert_eq!(fs::metadata(file.path()).unwrap().len(), 0);

        file.write_all(b"PNG").unwrap();
        file.flush().unwrap();
        assert_eq!(fs::read(file.path()).unwrap(), b"PNG");
    }

    #[test]
    fn test_file_survives_handle_drop() {
        let scratch = TempDir::new().unwrap();
        let manager = manager_in(&scratch);

        let path = manager.create(TempKind::Movie).expect("temp file").path().to_path_buf();
        assert!(path.exists());
    }

    #[test]
    fn test_create_in_missing_directory_fails_cleanly() {
        let scratch = TempDir::new().unwrap();
        let missing = scratch.path().join("missing");

        assert!(create_in(&missing, TempKind::Image).is_none());
        assert!(!missing.exists());
        assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_delete_reports_status() {
        let scratch = TempDir::new().unwrap();
        let manager = manager_in(&scratch);

        let path = manager.create(TempKind::Expansion).unwrap().path().to_path_buf();
        assert_eq!(manager.delete(&path), 0);
        assert!(!path.exists());
        assert_eq!(manager.delete(&path), -1);
    }

    #[test]
    fn test_find_ignores_unrelated_files() {
        let scratch = TempDir::new().unwrap();
        let manager = manager_in(&scratch);
        fs::write(scratch.path().join("notes.txt"), "keep").unwrap();
        fs::write(scratch.path().join("cfdata.bin"), "keep").unwrap();

        let image = manager.create(TempKind::Image).unwrap().path().to_path_buf();
        let movie = manager.create(TempKind::Movie).unwrap().path().to_path_buf();

        let mut found = manager.find();
        found.sort();
        let mut expected = vec![image, movie];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_find_in_missing_directory_is_empty() {
        let scratch = TempDir::new().unwrap();
        assert!(find_in(&scratch.path().join("missing")).is_empty());
    }

    #[test]
    fn test_find_is_a_restartable_snapshot() {
        let scratch = TempDir::new().unwrap();
        let manager = manager_in(&scratch);
        manager.create(TempKind::Image).unwrap();

        let first = manager.find();
        manager.create(TempKind::Image).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(manager.find().len(), 2);
    }
}
