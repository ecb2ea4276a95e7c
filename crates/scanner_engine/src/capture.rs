use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;

use crate::types::{CaptureError, LoadedImage};

/// Declared when the bytes are not a recognizable raster format.
const FALLBACK_MEDIA_TYPE: &str = "image/jpeg";

/// Reads the file fully into memory and encodes it as a base64 data-URL.
///
/// No validation beyond readability: unrecognizable bytes are still
/// encoded and declared with the fallback media type.
pub fn load_image(path: &str) -> Result<LoadedImage, CaptureError> {
    let bytes =
        std::fs::read(path).map_err(|err| CaptureError::new(path, err.to_string()))?;

    let media_type = sniff_media_type(&bytes);
    let payload = general_purpose::STANDARD.encode(&bytes);

    Ok(LoadedImage {
        source_name: file_name(path),
        media_type: media_type.to_string(),
        encoded: format!("data:{media_type};base64,{payload}"),
        byte_len: bytes.len() as u64,
    })
}

fn sniff_media_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(_) | Err(_) => FALLBACK_MEDIA_TYPE,
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
