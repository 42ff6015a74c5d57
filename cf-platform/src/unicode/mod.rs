//! Filename normalization: UTF-8 → UTF-16 → NFKC wide characters.
//!
//! Names typed by a user, read from a `.cfdg` file, or returned by the
//! filesystem can spell the same character differently (precomposed vs.
//! combining sequences, fullwidth forms, ligatures). Normalizing both sides
//! to NFKC before comparing makes lookups agree.
//!
//! The engine boundary is expressed as two traits, [`Converter`] and
//! [`Normalizer`], both following the same convention: write into a
//! caller-supplied buffer, or report the size actually required. The
//! [`UnicodeNormalizer`] opens one of each lazily and keeps them for its
//! whole lifetime.

mod buffer;
mod converter;
mod normalizer;

pub use buffer::grow_and_retry;
pub use converter::Utf8Converter;
pub use normalizer::{NfkcNormalizer, PassthroughNormalizer};

use cf_core::error::{CfError, Result};
use cf_core::reporting::ErrorReporter;
use std::fmt;
use thiserror::Error;

/// Outcome of a single engine call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnicodeError {
    #[error("buffer too small, {required} code units required")]
    BufferOverflow { required: usize },

    #[error("invalid input at offset {offset}")]
    InvalidInput { offset: usize },

    #[error("unicode engine unavailable: {0}")]
    EngineUnavailable(String),
}

/// UTF-8 to UTF-16 converter.
pub trait Converter: Send {
    /// Convert `src` into `dest`, returning the number of code units written.
    ///
    /// Reports [`UnicodeError::BufferOverflow`] with the full output length
    /// when `dest` is too small.
    fn convert(&mut self, src: &[u8], dest: &mut [u16]) -> std::result::Result<usize, UnicodeError>;
}

/// Normalizer over UTF-16 text, with the same buffer convention as [`Converter`].
pub trait Normalizer: Send {
    fn normalize(&self, src: &[u16], dest: &mut [u16]) -> std::result::Result<usize, UnicodeError>;
}

/// Factory for engine handles.
pub trait UnicodeBackend: Send {
    fn open_converter(&self) -> std::result::Result<Box<dyn Converter>, UnicodeError>;

    fn nfkc_instance(&self) -> std::result::Result<Box<dyn Normalizer>, UnicodeError>;
}

/// Built-in engine.
///
/// With the `no-normalize` feature the normalizer is a pass-through, so
/// names are only decoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBackend;

impl UnicodeBackend for DefaultBackend {
    fn open_converter(&self) -> std::result::Result<Box<dyn Converter>, UnicodeError> {
        Ok(Box::new(Utf8Converter))
    }

    #[cfg(not(feature = "no-normalize"))]
    fn nfkc_instance(&self) -> std::result::Result<Box<dyn Normalizer>, UnicodeError> {
        Ok(Box::new(NfkcNormalizer))
    }

    #[cfg(feature = "no-normalize")]
    fn nfkc_instance(&self) -> std::result::Result<Box<dyn Normalizer>, UnicodeError> {
        Ok(Box::new(PassthroughNormalizer))
    }
}

/// Normalized filename as UTF-16 code units.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WideString(Vec<u16>);

impl WideString {
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u16> {
        self.0
    }

    /// Back to UTF-8; unpaired surrogates become U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self {
        Self(units)
    }
}

impl From<&str> for WideString {
    fn from(text: &str) -> Self {
        Self(text.encode_utf16().collect())
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideString({:?})", self.to_string_lossy())
    }
}

/// Lazily opened converter/normalizer pair.
///
/// Handles are created on the first call and reused until this value is
/// dropped. Not shareable between threads; use one instance per thread.
pub struct UnicodeNormalizer {
    backend: Box<dyn UnicodeBackend>,
    converter: Option<Box<dyn Converter>>,
    normalizer: Option<Box<dyn Normalizer>>,
}

impl UnicodeNormalizer {
    pub fn new(backend: Box<dyn UnicodeBackend>) -> Self {
        Self {
            backend,
            converter: None,
            normalizer: None,
        }
    }

    /// True once both engine handles have been opened.
    pub fn is_open(&self) -> bool {
        self.converter.is_some() && self.normalizer.is_some()
    }

    /// Normalize UTF-8 text to NFKC wide characters.
    ///
    /// Malformed input is reported through `reporter.error` and returned as
    /// [`CfError::Conversion`] or [`CfError::Normalization`]. A missing or
    /// broken engine goes through `reporter.catastrophic`.
    pub fn normalize(&mut self, utf8: &[u8], reporter: &dyn ErrorReporter) -> Result<WideString> {
        self.open(reporter)?;
        let (Some(converter), Some(normalizer)) =
            (self.converter.as_mut(), self.normalizer.as_ref())
        else {
            return Err(CfError::Internal("unicode handles not open".to_string()));
        };

        let utf16 = grow_and_retry(utf8.len(), |buf| converter.convert(utf8, buf))
            .map_err(|e| stage_failed(e, reporter, CfError::Conversion))?;

        let normalized = grow_and_retry(utf16.len(), |buf| normalizer.normalize(&utf16, buf))
            .map_err(|e| stage_failed(e, reporter, CfError::Normalization))?;

        Ok(WideString(normalized))
    }

    fn open(&mut self, reporter: &dyn ErrorReporter) -> Result<()> {
        if self.converter.is_none() {
            match self.backend.open_converter() {
                Ok(converter) => self.converter = Some(converter),
                Err(e) => {
                    tracing::error!(error = %e, "could not open UTF-8 converter");
                    return Err(catastrophic("No Converter", reporter));
                }
            }
        }

        if self.normalizer.is_none() {
            match self.backend.nfkc_instance() {
                Ok(normalizer) => self.normalizer = Some(normalizer),
                Err(e) => {
                    tracing::error!(error = %e, "Error getting NFKC normalizer");
                    return Err(catastrophic("No Normalizer", reporter));
                }
            }
        }

        Ok(())
    }
}

impl Default for UnicodeNormalizer {
    fn default() -> Self {
        Self::new(Box::new(DefaultBackend))
    }
}

fn catastrophic(what: &str, reporter: &dyn ErrorReporter) -> CfError {
    reporter.catastrophic(what);
    CfError::Catastrophic(what.to_string())
}

fn stage_failed(
    e: UnicodeError,
    reporter: &dyn ErrorReporter,
    wrap: fn(String) -> CfError,
) -> CfError {
    match e {
        UnicodeError::EngineUnavailable(_) => {
            tracing::error!(error = %e, "unicode engine failed");
            catastrophic("Unicode engine failure", reporter)
        }
        _ => {
            reporter.error("String conversion error");
            wrap(e.to_string())
        }
    }
}
