//! Binary morphology with a 3x3 fully-filled structuring element
//!
//! Dilation takes the maximum and erosion the minimum over each pixel's
//! 3x3 neighbourhood, which is the L-infinity ball of radius 1. Neighbours
//! outside the image are ignored, so the image border neither grows nor
//! eats into the foreground.

use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology;

const ELEMENT: Norm = Norm::LInf;
const RADIUS: u8 = 1;

/// Grow foreground regions by one pixel in every direction
pub fn dilate(mask: &GrayImage) -> GrayImage {
    apply(mask, morphology::dilate)
}

/// Shrink foreground regions by one pixel in every direction
pub fn erode(mask: &GrayImage) -> GrayImage {
    apply(mask, morphology::erode)
}

/// Dilation followed by erosion; fills holes and gaps narrower than the element
pub fn close(mask: &GrayImage) -> GrayImage {
    apply(mask, morphology::close)
}

/// Erosion followed by dilation; removes specks smaller than the element
pub fn open(mask: &GrayImage) -> GrayImage {
    apply(mask, morphology::open)
}

fn apply(mask: &GrayImage, op: fn(&GrayImage, Norm, u8) -> GrayImage) -> GrayImage {
    if mask.width() == 0 || mask.height() == 0 {
        return mask.clone();
    }
    op(mask, ELEMENT, RADIUS)
}
