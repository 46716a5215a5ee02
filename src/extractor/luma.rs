//! Colour to luma conversion
//!
//! Uses BT.601 weights in 14-bit fixed point so results are reproducible
//! bit for bit, independent of how the decoder orders channels.

use image::{GrayImage, Luma, RgbImage};

const SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const ROUND: u32 = 1 << (SHIFT - 1);

/// Luma of a single RGB sample
///
/// The weights sum to `1 << 14`, so neutral greys map to themselves.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = R_WEIGHT * r as u32 + G_WEIGHT * g as u32 + B_WEIGHT * b as u32 + ROUND;
    (sum >> SHIFT) as u8
}

/// Convert an RGB image to a single-channel luma map of the same size
pub fn to_luma(image: &RgbImage) -> GrayImage {
    let mut gray = GrayImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(gray.pixels_mut()) {
        *dst = Luma([luma(src[0], src[1], src[2])]);
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_neutral_grey_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luma(v, v, v), v);
        }
    }

    #[test]
    fn test_primary_weights() {
        // 255 * 4899 / 16384 = 76.25, 255 * 9617 / 16384 = 149.68, 255 * 1868 / 16384 = 29.07
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_blue_ink_is_dark() {
        assert!(luma(20, 40, 160) < 100);
    }

    #[test]
    fn test_to_luma_dimensions() {
        let image = RgbImage::from_pixel(7, 3, Rgb([10, 20, 30]));
        let gray = to_luma(&image);
        assert_eq!(gray.dimensions(), (7, 3));
        assert!(gray.pixels().all(|p| p[0] == luma(10, 20, 30)));
    }
}
