//! Scanprep Core - Image normalization library
//!
//! This crate prepares raster images for upload to a multimodal extraction
//! endpoint: decode, bound the longest dimension, flatten to RGB, re-encode
//! as JPEG, and expose the result as base64 text.

pub mod decode;
pub mod encode;
pub mod normalize;
pub mod payload;
pub mod source;

pub use decode::{decode_image, fit_within, DecodeError, FilterType, Raster};
pub use normalize::{normalize, normalize_to_base64, NormalizeError};
pub use payload::{EncodedPayload, JPEG_MIME};
pub use source::{ImageSource, SourceError};

/// Default bound on the longest output dimension, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 2048;

/// Default JPEG quality for the re-encoded payload.
///
/// Chosen to favor small upload size over fidelity; extraction endpoints
/// bill and cap by payload size, not visual quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Options controlling a normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NormalizeOptions {
    /// Maximum length of the longest output dimension in pixels.
    /// Inputs already within the bound are never upscaled.
    pub max_dimension: u32,
    /// JPEG quality on a 0-100 scale (clamped to 1-100 at encode time).
    pub quality: u8,
    /// Resampling filter used when downscaling.
    pub filter: FilterType,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_JPEG_QUALITY,
            filter: FilterType::default(),
        }
    }
}

impl NormalizeOptions {
    /// Create options with the default bound, quality, and filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with a custom dimension bound and default quality.
    pub fn bounded(max_dimension: u32) -> Self {
        Self {
            max_dimension,
            ..Self::default()
        }
    }
}
