//! Batch driver
//!
//! Runs the extraction transform over every candidate image in the input
//! directory. Files are processed one after another; a file that fails to
//! decode or write is logged and recorded, and the run moves on.

use std::fs;
use std::path::Path;
use log::{error, info, warn};

use crate::batch::report::{BatchReport, FileOutcome};
use crate::batch::{discovery, naming};
use crate::config::ExtractConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::SignatureExtractor;
use crate::utils::progress::ProgressTracker;

/// Drives a signature extraction run over a directory
pub struct BatchDriver<'a> {
    config: &'a ExtractConfig,
    extractor: SignatureExtractor,
    show_progress: bool,
}

impl<'a> BatchDriver<'a> {
    /// Create a driver for the given configuration
    pub fn new(config: &'a ExtractConfig) -> Self {
        BatchDriver {
            config,
            extractor: SignatureExtractor::from_config(config),
            show_progress: false,
        }
    }

    /// Show a progress bar while processing
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Process every candidate in the input directory
    ///
    /// # Returns
    /// A report with one outcome per candidate, or an error when the output
    /// directory cannot be created or the input directory cannot be listed
    pub fn run(&self) -> ExtractResult<BatchReport> {
        self.ensure_output_dir()?;

        let candidates = discovery::find_candidates(&self.config.input_dir)?;
        info!("Found {} image file(s) in the input folder.", candidates.len());

        let progress = if self.show_progress {
            ProgressTracker::new(candidates.len() as u64, "Extracting signatures")
        } else {
            ProgressTracker::hidden(candidates.len() as u64)
        };

        let mut report = BatchReport::new();
        for path in &candidates {
            let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            progress.set_message(&name);
            info!("Processing image: {}", name);

            report.push(self.process_file(path));
            progress.increment(1);
        }
        progress.finish();

        if report.is_clean() {
            info!("All images have been processed successfully.");
        } else {
            warn!("Processing finished: {}", report);
            for outcome in report.failures() {
                warn!("Not extracted: {}", outcome.input().display());
            }
        }

        Ok(report)
    }

    /// Decode, transform and write one file
    ///
    /// Errors are logged and returned as an outcome, never propagated.
    pub fn process_file(&self, input: &Path) -> FileOutcome {
        let output = naming::output_path(&self.config.output_dir, input, &self.config.suffix);

        let source = match self.extractor.load_source(input) {
            Ok(source) => source,
            Err(e) => {
                error!("Failed to read image: {} ({})", input.display(), e);
                return FileOutcome::DecodeFailed {
                    input: input.to_path_buf(),
                    reason: e.to_string(),
                };
            }
        };

        let result = self.extractor.extract(&source);

        match self.extractor.save_png(&result, &output) {
            Ok(()) => {
                info!("Saved extracted image to: {}", output.display());
                FileOutcome::Saved {
                    input: input.to_path_buf(),
                    output,
                }
            }
            Err(e) => {
                error!("Failed to save image: {} ({})", output.display(), e);
                FileOutcome::WriteFailed {
                    input: input.to_path_buf(),
                    output,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Create the output directory and its parents if missing
    pub fn ensure_output_dir(&self) -> ExtractResult<()> {
        let dir = &self.config.output_dir;
        if dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(|e| {
            ExtractError::GenericError(format!("Failed to create output folder {}: {}", dir.display(), e))
        })?;
        info!("Created output folder: {}", dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn config_for(root: &Path) -> ExtractConfig {
        ExtractConfig {
            input_dir: root.join("Input"),
            output_dir: root.join("Output").join("nested"),
            ..ExtractConfig::default()
        }
    }

    #[test]
    fn test_creates_nested_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir(&config.input_dir).unwrap();

        let report = BatchDriver::new(&config).run().unwrap();
        assert!(config.output_dir.is_dir());
        assert_eq!(report.total(), 0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_input_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        assert!(matches!(BatchDriver::new(&config).run(), Err(ExtractError::InvalidInputDir(_))));
    }

    #[test]
    fn test_process_file_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.input_dir).unwrap();
        let broken = config.input_dir.join("broken.jpg");
        fs::write(&broken, b"garbage").unwrap();

        let outcome = BatchDriver::new(&config).process_file(&broken);
        assert!(matches!(outcome, FileOutcome::DecodeFailed { .. }));
    }

    #[test]
    fn test_process_file_png_with_jpg_extension() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.input_dir).unwrap();
        fs::create_dir_all(&config.output_dir).unwrap();
        let input = config.input_dir.join("scan.jpg");
        RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]))
            .save_with_format(&input, image::ImageFormat::Png)
            .unwrap();

        match BatchDriver::new(&config).process_file(&input) {
            FileOutcome::Saved { output, .. } => assert_eq!(output, config.output_dir.join("scan_extracted.png")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_process_file_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.input_dir).unwrap();
        let input = config.input_dir.join("ok.png");
        RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])).save(&input).unwrap();

        // output directory deliberately not created
        let outcome = BatchDriver::new(&config).process_file(&input);
        assert!(matches!(outcome, FileOutcome::WriteFailed { .. }));
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.input_dir).unwrap();
        fs::create_dir_all(&config.output_dir).unwrap();
        RgbImage::from_pixel(3, 3, Rgb([0, 0, 0])).save(config.input_dir.join("s.png")).unwrap();
        fs::write(config.output_dir.join("s_extracted.png"), b"stale").unwrap();

        let report = BatchDriver::new(&config).run().unwrap();
        assert_eq!(report.saved_count(), 1);
        let written = image::open(config.output_dir.join("s_extracted.png")).unwrap();
        assert_eq!(written.width(), 3);
    }
}
