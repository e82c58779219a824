//! Payload encoding pipeline for scanprep.
//!
//! This module provides functionality for:
//! - Encoding a flattened RGB raster to JPEG at a fixed quality
//!
//! JPEG is the one output format: a lossy stream at moderate quality
//! carries more than enough signal for structured extraction while keeping
//! the upload small.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
