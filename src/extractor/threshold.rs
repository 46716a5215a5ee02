//! Inverse binary thresholding

use image::GrayImage;
use imageproc::contrast::{self, ThresholdType};

/// Mask value for signature pixels
pub const FOREGROUND: u8 = 255;
/// Mask value for background pixels
pub const BACKGROUND: u8 = 0;

/// Build a binary mask from a luma map
///
/// # Arguments
/// * `gray` - Luma map
/// * `threshold` - Cutoff; values strictly greater become 0, all others 255
///
/// # Returns
/// A mask of the same size containing only 0 and 255
pub fn inverse_binary(gray: &GrayImage, threshold: u8) -> GrayImage {
    contrast::threshold(gray, threshold, ThresholdType::BinaryInverted)
}

/// Number of foreground pixels in a mask
pub fn foreground_count(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] == FOREGROUND).count()
}
