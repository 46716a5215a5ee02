use std::path::Path;
use image::{DynamicImage, RgbaImage};
use log::info;

use crate::batch::{BatchDriver, BatchReport, FileOutcome};
use crate::config::ExtractConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::SignatureExtractor;

/// Main interface to the sigkit library
pub struct SigKit {
    config: ExtractConfig,
}

impl SigKit {
    /// Create a SigKit instance with default settings
    /// (`Input` -> `Output`, threshold 240, suffix `_extracted`)
    pub fn new() -> Self {
        SigKit::with_config(ExtractConfig::default())
    }

    /// Create a SigKit instance from an explicit configuration
    pub fn with_config(config: ExtractConfig) -> Self {
        SigKit { config }
    }

    /// Create a SigKit instance from a TOML configuration file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        Ok(SigKit::with_config(ExtractConfig::from_file(path)?))
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract the signature from an in-memory image
    ///
    /// # Arguments
    /// * `image` - Any decoded image; alpha in the source is ignored
    ///
    /// # Returns
    /// An RGBA image with a transparent background
    pub fn extract_image(&self, image: &DynamicImage) -> RgbaImage {
        SignatureExtractor::from_config(&self.config).extract_dynamic(image)
    }

    /// Extract a single file into the configured output folder
    ///
    /// # Arguments
    /// * `input_path` - Path to the source image
    ///
    /// # Returns
    /// The path of the written PNG, or an error if decoding or writing failed
    pub fn extract_file<P: AsRef<Path>>(&self, input_path: P) -> ExtractResult<std::path::PathBuf> {
        let driver = BatchDriver::new(&self.config);
        driver.ensure_output_dir()?;

        match driver.process_file(input_path.as_ref()) {
            FileOutcome::Saved { output, .. } => Ok(output),
            FileOutcome::DecodeFailed { input, reason } => Err(ExtractError::GenericError(
                format!("Failed to read image {}: {}", input.display(), reason),
            )),
            FileOutcome::WriteFailed { output, reason, .. } => Err(ExtractError::GenericError(
                format!("Failed to save image {}: {}", output.display(), reason),
            )),
        }
    }

    /// Extract every candidate image in the configured input folder
    ///
    /// Per-file failures are recorded in the report; only a missing input
    /// folder or an uncreatable output folder is returned as an error.
    pub fn extract_all(&self) -> ExtractResult<BatchReport> {
        let report = BatchDriver::new(&self.config).run()?;
        info!("{}", report);
        Ok(report)
    }
}

impl Default for SigKit {
    fn default() -> Self {
        SigKit::new()
    }
}
