//! Image decoding pipeline for scanprep.
//!
//! This module provides functionality for:
//! - Decoding raster images in common container formats (JPEG, PNG, WebP,
//!   GIF, BMP, TIFF) into a flat RGB representation
//! - EXIF orientation correction applied before any resize
//! - Bounding the longest dimension while preserving aspect ratio
//!
//! All operations are synchronous and run entirely in memory; the caller
//! owns every buffer for the duration of a single call.

mod loader;
mod resize;
mod types;

pub use loader::{decode_image, decode_image_no_orientation};
pub use resize::{fit_within, scaled_dimensions};
pub use types::{DecodeError, FilterType, Orientation, Raster};
