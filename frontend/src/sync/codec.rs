//! Transport encoding of file contents: base64 over the UTF-8 bytes.
//!
//! The contents API wraps its base64 payload at 60 columns, so whitespace is
//! stripped before decoding. Decoding yields raw bytes first and only then
//! interprets them as UTF-8, which keeps multi-byte text intact.

use crate::error::SyncError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub fn decode_content(encoded: &str) -> Result<String, SyncError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| SyncError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SyncError::Encoding(e.to_string()))
}

pub fn encode_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}
