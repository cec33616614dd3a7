//! Turns an uploaded image file into a self-contained `data:` URI.

use crate::config;
use crate::error::ThumbnailError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Checks the declared type and size before any bytes are read.
pub fn check_upload(mime: &str, size: usize) -> Result<(), ThumbnailError> {
    if !mime.starts_with("image/") {
        return Err(ThumbnailError::NotAnImage);
    }
    if size > config::MAX_THUMBNAIL_BYTES {
        return Err(ThumbnailError::TooLarge {
            size,
            limit: config::MAX_THUMBNAIL_BYTES,
        });
    }
    Ok(())
}

pub async fn read_as_data_uri(file: &File) -> Result<String, ThumbnailError> {
    let mime = file.type_();
    check_upload(&mime, file.size() as usize)?;

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ThumbnailError::Read(format!("{:?}", e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(to_data_uri(&mime, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_layout() {
        assert_eq!(to_data_uri("image/png", b"\x89PNG"), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_upload_checks() {
        assert_eq!(check_upload("text/plain", 10), Err(ThumbnailError::NotAnImage));
        assert!(matches!(
            check_upload("image/jpeg", config::MAX_THUMBNAIL_BYTES + 1),
            Err(ThumbnailError::TooLarge { .. })
        ));
        assert!(check_upload("image/webp", 2048).is_ok());
    }
}
