//! UTF-8 to UTF-16 conversion stage.

use super::{Converter, UnicodeError};

/// Strict UTF-8 decoder producing UTF-16 code units.
///
/// Malformed input is rejected rather than replaced, since a filename that
/// silently changes during lookup is worse than one that fails loudly.
#[derive(Debug, Default)]
pub struct Utf8Converter;

impl Converter for Utf8Converter {
    fn convert(&mut self, src: &[u8], dest: &mut [u16]) -> Result<usize, UnicodeError> {
        let text = std::str::from_utf8(src).map_err(|e| UnicodeError::InvalidInput {
            offset: e.valid_up_to(),
        })?;

        let required = text.encode_utf16().count();
        if required > dest.len() {
            return Err(UnicodeError::BufferOverflow { required });
        }

        for (slot, unit) in dest.iter_mut().zip(text.encode_utf16()) {
            *slot = unit;
        }
        Ok(required)
    }
}
