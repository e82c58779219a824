//! Raster decoding with EXIF orientation handling.
//!
//! Inputs arrive in whatever container a scanner, phone, or export tool
//! produced. Decoding always lands on flat RGB: alpha is discarded and
//! single-channel or CMYK-style sources are expanded by the format decoder.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, Orientation, Raster};

/// Decode image bytes into an RGB raster, applying EXIF orientation.
///
/// Camera files routinely store rotation as a tag instead of rotated
/// pixels, and JPEG re-encoding drops EXIF, so the correction happens here
/// before any resize.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidFormat`] if the bytes are not in a
/// recognized image format, [`DecodeError::Corrupted`] if they are
/// recognized but cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let orientation = extract_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    let oriented = apply_orientation(img, orientation);
    Ok(Raster::from_rgb(oriented.into_rgb8()))
}

/// Decode image bytes without applying EXIF orientation.
///
/// Use this when the caller handles rotation itself or the image is known
/// to be correctly oriented.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let img = decode_dynamic(bytes)?;
    Ok(Raster::from_rgb(img.into_rgb8()))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader.decode().map_err(|e| match e {
        image::ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::Corrupted(other.to_string()),
    })
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
