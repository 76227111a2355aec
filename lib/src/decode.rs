//! Image decoding
//!
//! Turns encoded bytes or files into RGBA pixels. The rest of the crate
//! only ever sees decoded [`RgbaImage`]s.

use crate::error::{AsciiError, Result};
use image::RgbaImage;
use std::path::Path;

/// Decode an in-memory image (format guessed from its header)
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    ensure_not_empty(img)
}

/// Read and decode an image file
pub fn open_image(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

fn ensure_not_empty(img: RgbaImage) -> Result<RgbaImage> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(AsciiError::EmptyImage { width, height });
    }
    Ok(img)
}
