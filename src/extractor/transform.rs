//! The signature extraction transform
//!
//! luma -> inverse threshold -> closing -> opening -> alpha composite.

use image::{GrayImage, Rgba, RgbImage, RgbaImage};
use log::debug;

use super::{luma, morphology, threshold};

/// Produce a four-channel image whose alpha marks the signature
///
/// Colour channels are copied unchanged; alpha is 255 on ink and 0 on
/// the background, never anything in between.
///
/// # Arguments
/// * `source` - Decoded colour image
/// * `cutoff` - Luma values strictly above this are treated as background
///
/// # Returns
/// An RGBA image with the same dimensions as `source`
pub fn extract_signature(source: &RgbImage, cutoff: u8) -> RgbaImage {
    let mask = build_mask(source, cutoff);
    compose_rgba(source, &mask)
}

/// Compute the final binary mask for an image
pub fn build_mask(source: &RgbImage, cutoff: u8) -> GrayImage {
    let gray = luma::to_luma(source);
    let mask = threshold::inverse_binary(&gray, cutoff);
    debug!("Threshold {} kept {} foreground pixel(s)", cutoff, threshold::foreground_count(&mask));

    let mask = morphology::close(&mask);
    debug!("After closing: {} foreground pixel(s)", threshold::foreground_count(&mask));

    let mask = morphology::open(&mask);
    debug!("After opening: {} foreground pixel(s)", threshold::foreground_count(&mask));

    mask
}

/// Merge RGB colour data with a mask used as alpha
///
/// The mask must have the same dimensions as the colour image.
pub fn compose_rgba(source: &RgbImage, mask: &GrayImage) -> RgbaImage {
    debug_assert_eq!(source.dimensions(), mask.dimensions());

    let mut result = RgbaImage::new(source.width(), source.height());
    for ((rgb, alpha), dst) in source.pixels().zip(mask.pixels()).zip(result.pixels_mut()) {
        *dst = Rgba([rgb[0], rgb[1], rgb[2], alpha[0]]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn assert_colours_preserved(source: &RgbImage, result: &RgbaImage) {
        for (src, dst) in source.pixels().zip(result.pixels()) {
            assert_eq!(&src.0[..], &dst.0[..3]);
        }
    }

    #[test]
    fn test_all_white_is_transparent() {
        let source = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let result = extract_signature(&source, 240);
        assert_eq!(result.dimensions(), (10, 10));
        assert!(result.pixels().all(|p| p[3] == 0));
        assert_colours_preserved(&source, &result);
    }

    #[test]
    fn test_all_black_is_opaque() {
        let source = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let result = extract_signature(&source, 240);
        assert_eq!(result.dimensions(), (10, 10));
        assert!(result.pixels().all(|p| p[3] == 255));
        assert_colours_preserved(&source, &result);
    }

    #[test]
    fn test_isolated_speck_removed() {
        let mut source = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        source.put_pixel(5, 5, Rgb([0, 0, 0]));
        let result = extract_signature(&source, 240);
        assert!(result.pixels().all(|p| p[3] == 0));
        assert_eq!(result.get_pixel(5, 5).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_threshold_boundary_on_uniform_images() {
        let at_cutoff = RgbImage::from_pixel(6, 6, Rgb([240, 240, 240]));
        assert!(extract_signature(&at_cutoff, 240).pixels().all(|p| p[3] == 255));

        let below = RgbImage::from_pixel(6, 6, Rgb([239, 239, 239]));
        assert!(extract_signature(&below, 240).pixels().all(|p| p[3] == 255));

        let above = RgbImage::from_pixel(6, 6, Rgb([241, 241, 241]));
        assert!(extract_signature(&above, 240).pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_configurable_cutoff() {
        let source = RgbImage::from_pixel(4, 4, Rgb([200, 200, 200]));
        assert!(extract_signature(&source, 240).pixels().all(|p| p[3] == 255));
        assert!(extract_signature(&source, 150).pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_stroke_keeps_colour_and_binary_alpha() {
        let mut source = RgbImage::from_pixel(12, 8, Rgb([250, 250, 250]));
        for y in 2..6 {
            for x in 2..10 {
                source.put_pixel(x, y, Rgb([20, 30, 140]));
            }
        }
        // anti-aliased hole inside the stroke
        source.put_pixel(5, 3, Rgb([245, 245, 245]));

        let result = extract_signature(&source, 240);
        assert_eq!(result.dimensions(), source.dimensions());
        assert!(result.pixels().all(|p| p[3] == 0 || p[3] == 255));
        assert_colours_preserved(&source, &result);

        assert_eq!(result.get_pixel(5, 3)[3], 255);
        assert_eq!(result.get_pixel(4, 4)[3], 255);
        assert_eq!(result.get_pixel(0, 0)[3], 0);
        assert_eq!(result.get_pixel(11, 7)[3], 0);
    }

    #[test]
    fn test_empty_image() {
        let source = RgbImage::new(0, 0);
        assert_eq!(extract_signature(&source, 240).dimensions(), (0, 0));
    }
}
