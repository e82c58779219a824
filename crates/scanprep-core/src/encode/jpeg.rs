//! JPEG encoding for upload payloads.
//!
//! Uses the `image` crate's JPEG encoder with a configurable quality
//! setting. The normalization default of 85 favors small payload size
//! over fidelity.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::decode::Raster;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match the raster dimensions
    #[error("invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGB raster to JPEG bytes.
///
/// # Arguments
///
/// * `raster` - Flattened RGB raster (3 bytes per pixel, row-major order)
/// * `quality` - JPEG quality (0-100 scale, clamped to 1-100)
///
/// # Errors
///
/// Returns an error if the raster has a zero dimension, its pixel buffer
/// does not match its dimensions, or the encoder fails.
pub fn encode_jpeg(raster: &Raster, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = raster.dimensions();

    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if raster.byte_size() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: raster.byte_size(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&raster.pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
