//! NFKC normalization stage over UTF-16 text.

use super::{Normalizer, UnicodeError};
use unicode_normalization::UnicodeNormalization;

/// Compatibility decomposition followed by canonical composition.
#[derive(Debug, Default)]
pub struct NfkcNormalizer;

impl Normalizer for NfkcNormalizer {
    fn normalize(&self, src: &[u16], dest: &mut [u16]) -> Result<usize, UnicodeError> {
        let text = decode(src)?;

        let mut required = 0;
        let mut encoded = [0u16; 2];
        for ch in text.nfkc() {
            for &unit in ch.encode_utf16(&mut encoded).iter() {
                if let Some(slot) = dest.get_mut(required) {
                    *slot = unit;
                }
                required += 1;
            }
        }

        if required > dest.len() {
            return Err(UnicodeError::BufferOverflow { required });
        }
        Ok(required)
    }
}

/// Copies text through unchanged, for builds without normalization.
#[derive(Debug, Default)]
pub struct PassthroughNormalizer;

impl Normalizer for PassthroughNormalizer {
    fn normalize(&self, src: &[u16], dest: &mut [u16]) -> Result<usize, UnicodeError> {
        if src.len() > dest.len() {
            return Err(UnicodeError::BufferOverflow { required: src.len() });
        }
        dest[..src.len()].copy_from_slice(src);
        Ok(src.len())
    }
}

fn decode(src: &[u16]) -> Result<String, UnicodeError> {
    let mut text = String::with_capacity(src.len());
    let mut offset = 0;
    for decoded in char::decode_utf16(src.iter().copied()) {
        let ch = decoded.map_err(|_| UnicodeError::InvalidInput { offset })?;
        text.push(ch);
        offset += ch.len_utf16();
    }
    Ok(text)
}
