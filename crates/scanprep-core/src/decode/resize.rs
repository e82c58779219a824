//! Dimension bounding for upload-sized output.
//!
//! Provides the resize-to-fit operation using the `image` crate's
//! resampling algorithms. All functions return new `Raster` instances
//! without modifying the input; images already within the bound are never
//! upscaled.

use super::{DecodeError, FilterType, Raster};

/// Bound a raster's longest dimension while preserving aspect ratio.
///
/// If `max(width, height)` exceeds `max_dimension`, the raster is
/// resampled so its longest dimension equals `max_dimension` exactly and
/// the other dimension is scaled proportionally (rounded to the nearest
/// pixel, floor of 1). Rasters already within the bound are returned
/// unchanged.
///
/// Callers validate the bound; a zero `max_dimension` is rejected upstream
/// before this function is reached.
///
/// # Errors
///
/// Returns `DecodeError::Corrupted` if the raster's pixel buffer does not
/// match its dimensions.
pub fn fit_within(
    raster: &Raster,
    max_dimension: u32,
    filter: FilterType,
) -> Result<Raster, DecodeError> {
    debug_assert!(max_dimension > 0, "bound validated by caller");

    // No upscaling: within-bound rasters pass through untouched
    if raster.longest_dimension() <= max_dimension {
        return Ok(raster.clone());
    }

    let (new_width, new_height) = scaled_dimensions(raster.width, raster.height, max_dimension);

    let rgb = raster
        .to_rgb()
        .ok_or_else(|| DecodeError::Corrupted("pixel buffer does not match dimensions".to_string()))?;

    let resized = image::imageops::resize(&rgb, new_width, new_height, filter.to_image_filter());

    Ok(Raster::from_rgb(resized))
}

/// Compute output dimensions for an over-bound raster.
///
/// Both axes are scaled by `max_dimension / max(width, height)` and
/// rounded to the nearest pixel, so the longest axis lands exactly on the
/// bound. A floor of 1 keeps extreme aspect ratios from rounding an axis
/// to zero.
pub fn scaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest == 0 {
        return (0, 0);
    }

    let scale = max_dimension as f64 / longest as f64;
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);
    (new_width, new_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_raster(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        Raster::new(width, height, pixels)
    }

    #[test]
    fn test_fit_landscape() {
        let raster = gradient_raster(400, 300);
        let bounded = fit_within(&raster, 100, FilterType::Lanczos3).unwrap();

        assert_eq!(bounded.dimensions(), (100, 75));
        assert_eq!(bounded.byte_size(), 100 * 75 * 3);
    }

    #[test]
    fn test_fit_portrait() {
        let raster = gradient_raster(300, 400);
        let bounded = fit_within(&raster, 100, FilterType::Lanczos3).unwrap();

        assert_eq!(bounded.dimensions(), (75, 100));
    }

    #[test]
    fn test_fit_square() {
        let raster = gradient_raster(200, 200);
        let bounded = fit_within(&raster, 64, FilterType::Bilinear).unwrap();

        assert_eq!(bounded.dimensions(), (64, 64));
    }

    #[test]
    fn test_within_bound_unchanged() {
        let raster = gradient_raster(100, 50);
        let bounded = fit_within(&raster, 256, FilterType::Lanczos3).unwrap();

        // No upscaling, no resampling
        assert_eq!(bounded.dimensions(), (100, 50));
        assert_eq!(bounded.pixels, raster.pixels);
    }

    #[test]
    fn test_exactly_at_bound_unchanged() {
        let raster = gradient_raster(256, 128);
        let bounded = fit_within(&raster, 256, FilterType::Lanczos3).unwrap();

        assert_eq!(bounded.dimensions(), (256, 128));
    }

    #[test]
    fn test_fit_is_idempotent() {
        let raster = gradient_raster(400, 300);
        let once = fit_within(&raster, 100, FilterType::Lanczos3).unwrap();
        let twice = fit_within(&once, 100, FilterType::Lanczos3).unwrap();

        assert_eq!(once.dimensions(), twice.dimensions());
        assert_eq!(once.pixels, twice.pixels);
    }

    #[test]
    fn test_scaled_dimensions_reference_scan() {
        // 4000x3000 bounded to 2048 lands on 2048x1536
        assert_eq!(scaled_dimensions(4000, 3000, 2048), (2048, 1536));
        assert_eq!(scaled_dimensions(3000, 4000, 2048), (1536, 2048));
    }

    #[test]
    fn test_scaled_dimensions_rounding() {
        // 6000x4000 at 2560: 4000 * (2560/6000) = 1706.67, rounds to 1707
        assert_eq!(scaled_dimensions(6000, 4000, 2560), (2560, 1707));
    }

    #[test]
    fn test_scaled_dimensions_extreme_aspect() {
        // A 1-pixel-tall strip must not round its height to zero
        let (w, h) = scaled_dimensions(10000, 1, 100);
        assert_eq!(w, 100);
        assert_eq!(h, 1);
    }

    #[test]
    fn test_scaled_dimensions_zero_input() {
        assert_eq!(scaled_dimensions(0, 0, 256), (0, 0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
