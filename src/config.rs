//! Extraction configuration
//!
//! Holds the values that drive a run: where images are read from, where
//! results are written, the luma cutoff, and the output name suffix.
//! Values start from built-in defaults, can be overridden by a TOML file,
//! and finally by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::errors::{ExtractError, ExtractResult};

/// Luma cutoff; pixels brighter than this are background
pub const DEFAULT_THRESHOLD: u8 = 240;
/// Folder scanned for input images
pub const DEFAULT_INPUT_DIR: &str = "Input";
/// Folder receiving the extracted PNG files
pub const DEFAULT_OUTPUT_DIR: &str = "Output";
/// Appended to the input file stem to build the output name
pub const DEFAULT_SUFFIX: &str = "_extracted";

const KNOWN_KEYS: [&str; 4] = ["input_dir", "output_dir", "threshold", "suffix"];

/// Configuration for a signature extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Directory containing the source images
    pub input_dir: PathBuf,
    /// Directory where `<stem><suffix>.png` files are written
    pub output_dir: PathBuf,
    /// Inverse threshold cutoff (luma > threshold is background)
    pub threshold: u8,
    /// Suffix added to each output file stem
    pub suffix: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            threshold: DEFAULT_THRESHOLD,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Load configuration from a TOML file on top of the defaults
    ///
    /// # Arguments
    /// * `path` - Path to the TOML file
    ///
    /// # Returns
    /// The merged configuration or an error if the file is unreadable or invalid
    pub fn from_file<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            ExtractError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text on top of the defaults
    ///
    /// All keys are optional. Unknown keys are reported and ignored.
    pub fn from_toml_str(content: &str) -> ExtractResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| ExtractError::ConfigError(format!("Invalid TOML: {}", e)))?;

        let table = toml_value
            .as_table()
            .ok_or_else(|| ExtractError::ConfigError("Configuration root must be a table".to_string()))?;

        let mut config = ExtractConfig::default();

        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn!("Ignoring unknown configuration key: {}", key);
            }
        }

        if let Some(value) = table.get("input_dir") {
            config.input_dir = PathBuf::from(Self::expect_str(value, "input_dir")?);
        }

        if let Some(value) = table.get("output_dir") {
            config.output_dir = PathBuf::from(Self::expect_str(value, "output_dir")?);
        }

        if let Some(value) = table.get("threshold") {
            let raw = value.as_integer().ok_or_else(|| {
                ExtractError::ConfigError("threshold must be an integer".to_string())
            })?;
            config.threshold = Self::threshold_from_i64(raw)?;
        }

        if let Some(value) = table.get("suffix") {
            config.suffix = Self::expect_str(value, "suffix")?.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a usable run
    pub fn validate(&self) -> ExtractResult<()> {
        if self.suffix.contains('/') || self.suffix.contains('\\') {
            return Err(ExtractError::ConfigError(format!(
                "suffix must not contain path separators: {}", self.suffix
            )));
        }
        Ok(())
    }

    /// Parse a threshold given as text (command line)
    pub fn parse_threshold(text: &str) -> ExtractResult<u8> {
        let raw = text.trim().parse::<i64>().map_err(|_| {
            ExtractError::ConfigError(format!("Invalid threshold '{}'. Expected a number between 0-255", text))
        })?;
        Self::threshold_from_i64(raw)
    }

    fn threshold_from_i64(raw: i64) -> ExtractResult<u8> {
        u8::try_from(raw).map_err(|_| {
            ExtractError::ConfigError(format!("threshold {} is outside 0-255", raw))
        })
    }

    fn expect_str<'v>(value: &'v toml::Value, key: &str) -> ExtractResult<&'v str> {
        value
            .as_str()
            .ok_or_else(|| ExtractError::ConfigError(format!("{} must be a string", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("Input"));
        assert_eq!(config.output_dir, PathBuf::from("Output"));
        assert_eq!(config.threshold, 240);
        assert_eq!(config.suffix, "_extracted");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractConfig::from_toml_str("threshold = 200\n").unwrap();
        assert_eq!(config.threshold, 200);
        assert_eq!(config.input_dir, PathBuf::from("Input"));
        assert_eq!(config.suffix, "_extracted");
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
            input_dir = "scans"
            output_dir = "out/signatures"
            threshold = 225
            suffix = "_sig"
        "#;
        let config = ExtractConfig::from_toml_str(text).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("scans"));
        assert_eq!(config.output_dir, PathBuf::from("out/signatures"));
        assert_eq!(config.threshold, 225);
        assert_eq!(config.suffix, "_sig");
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(ExtractConfig::from_toml_str("threshold = 256").is_err());
        assert!(ExtractConfig::from_toml_str("threshold = -1").is_err());
        assert!(ExtractConfig::from_toml_str("threshold = \"high\"").is_err());
    }

    #[test]
    fn test_suffix_with_separator_rejected() {
        let result = ExtractConfig::from_toml_str("suffix = \"../x\"");
        assert!(matches!(result, Err(ExtractError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ExtractConfig::from_toml_str("threshold = ").is_err());
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(ExtractConfig::parse_threshold("240").unwrap(), 240);
        assert_eq!(ExtractConfig::parse_threshold(" 0 ").unwrap(), 0);
        assert!(ExtractConfig::parse_threshold("300").is_err());
        assert!(ExtractConfig::parse_threshold("abc").is_err());
    }
}
