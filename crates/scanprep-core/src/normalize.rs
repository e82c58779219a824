//! The normalization transform.
//!
//! A single-pass, synchronous pipeline: resolve the source bytes, decode
//! to an RGB raster (orientation corrected), bound the longest dimension,
//! re-encode as JPEG, and hand the payload to the caller. No state is kept
//! between calls and no global resources are touched, so calls are safe to
//! run concurrently without coordination.

use thiserror::Error;

use crate::decode::{self, DecodeError};
use crate::encode::{self, EncodeError};
use crate::payload::EncodedPayload;
use crate::source::{ImageSource, SourceError};
use crate::NormalizeOptions;

/// Failure of a normalization pass.
///
/// All variants are unrecoverable at this layer; the transform never
/// retries and surfaces the failure immediately.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The dimension bound is zero.
    #[error("max dimension must be at least 1 pixel")]
    InvalidBound,

    /// The source could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The source bytes are not a decodable image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Re-encoding the bounded raster failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Normalize an image for upload.
///
/// Decodes `source`, bounds its longest dimension to
/// `options.max_dimension` (never upscaling), flattens to RGB, and
/// re-encodes as JPEG at `options.quality`.
///
/// # Errors
///
/// * [`NormalizeError::InvalidBound`] - `options.max_dimension` is zero;
///   checked before any I/O.
/// * [`NormalizeError::Source`] - the source could not be read.
/// * [`NormalizeError::Decode`] - the bytes are not a decodable image.
/// * [`NormalizeError::Encode`] - JPEG re-encoding failed.
pub fn normalize(
    source: impl Into<ImageSource>,
    options: &NormalizeOptions,
) -> Result<EncodedPayload, NormalizeError> {
    if options.max_dimension == 0 {
        return Err(NormalizeError::InvalidBound);
    }

    let bytes = source.into().into_bytes()?;
    let raster = decode::decode_image(&bytes)?;
    let bounded = decode::fit_within(&raster, options.max_dimension, options.filter)?;
    let jpeg = encode::encode_jpeg(&bounded, options.quality)?;

    Ok(EncodedPayload::from_jpeg_bytes(jpeg))
}

/// Normalize an image and return the payload as base64 text.
///
/// Convenience wrapper over [`normalize`] for callers that only need the
/// textual encoding.
pub fn normalize_to_base64(
    source: impl Into<ImageSource>,
    options: &NormalizeOptions,
) -> Result<String, NormalizeError> {
    normalize(source, options).map(|payload| payload.to_base64())
}
