//! Signature extraction module
//!
//! Turns a colour image of dark ink on a light background into an RGBA
//! image where the background is fully transparent.

pub mod luma;
pub mod threshold;
pub mod morphology;
pub mod transform;

pub use transform::{build_mask, compose_rgba, extract_signature};

use std::path::Path;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbImage, RgbaImage};
use log::debug;

use crate::config::{ExtractConfig, DEFAULT_THRESHOLD};
use crate::errors::ExtractResult;

/// Applies the extraction transform with a fixed cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureExtractor {
    threshold: u8,
}

impl Default for SignatureExtractor {
    fn default() -> Self {
        SignatureExtractor::new(DEFAULT_THRESHOLD)
    }
}

impl SignatureExtractor {
    /// Create an extractor using the given luma cutoff
    pub fn new(threshold: u8) -> Self {
        SignatureExtractor { threshold }
    }

    /// Create an extractor from run configuration
    pub fn from_config(config: &ExtractConfig) -> Self {
        SignatureExtractor::new(config.threshold)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Decode an image file as three 8-bit colour channels
    ///
    /// The format is detected from the file content, not its extension,
    /// and an EXIF orientation tag is applied. Any alpha channel in the
    /// file is dropped.
    pub fn load_source<P: AsRef<Path>>(&self, path: P) -> ExtractResult<RgbImage> {
        let path = path.as_ref();
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        debug!("Detected format {:?} for {}", reader.format(), path.display());

        let mut decoder = reader.into_decoder()?;
        let orientation = decoder.orientation()?;
        let mut image = DynamicImage::from_decoder(decoder)?;
        if orientation != Orientation::NoTransforms {
            debug!("Applying EXIF orientation {:?}", orientation);
            image.apply_orientation(orientation);
        }

        debug!("Decoded {} ({}x{}, {:?})", path.display(), image.width(), image.height(), image.color());
        Ok(image.to_rgb8())
    }

    /// Run the transform on an RGB image
    pub fn extract(&self, source: &RgbImage) -> RgbaImage {
        extract_signature(source, self.threshold)
    }

    /// Run the transform on an image of any colour type
    pub fn extract_dynamic(&self, image: &DynamicImage) -> RgbaImage {
        self.extract(&image.to_rgb8())
    }

    /// Encode a result as PNG, replacing any existing file
    pub fn save_png<P: AsRef<Path>>(&self, result: &RgbaImage, path: P) -> ExtractResult<()> {
        result.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Decode, extract and write a single file
    pub fn extract_to_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> ExtractResult<()> {
        let source = self.load_source(input)?;
        let result = self.extract(&source);
        self.save_png(&result, output)
    }
}
