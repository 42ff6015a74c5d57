//! Scratch directory resolution.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variables probed for a scratch directory, in priority order.
pub const TEMP_DIR_ENV_VARS: [&str; 3] = ["TMPDIR", "TEMP", "TMP"];

/// Used when no environment variable names an existing directory.
pub const FALLBACK_TEMP_DIR: &str = "/tmp/";

/// Resolve the scratch directory from the process environment.
pub fn resolve_temp_dir() -> PathBuf {
    resolve_temp_dir_with(|name| env::var_os(name))
}

/// Resolve the scratch directory using `lookup` in place of the environment.
///
/// A candidate is accepted only if it names an existing directory. The
/// result is never checked for writability.
pub fn resolve_temp_dir_with<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    TEMP_DIR_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(PathBuf::from)
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_TEMP_DIR))
}

/// Resolver with an optional configured directory taking precedence.
#[derive(Debug, Clone, Default)]
pub struct TempDirResolver {
    override_dir: Option<PathBuf>,
}

impl TempDirResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    pub fn resolve(&self) -> PathBuf {
        self.resolve_with(|name| env::var_os(name))
    }

    pub fn resolve_with<F>(&self, lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(dir) = &self.override_dir {
            if dir.is_dir() {
                return dir.clone();
            }
            tracing::debug!(dir = %dir.display(), "configured temp dir is not a directory, probing environment");
        }
        resolve_temp_dir_with(lookup)
    }
}
