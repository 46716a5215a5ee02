//! Custom error types for signature extraction

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Extraction error types
#[derive(Debug)]
pub enum ExtractError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding error
    ImageError(image::ImageError),
    /// Invalid configuration value or file
    ConfigError(String),
    /// Input directory missing or unreadable
    InvalidInputDir(PathBuf),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::IoError(e) => write!(f, "I/O error: {}", e),
            ExtractError::ImageError(e) => write!(f, "Image error: {}", e),
            ExtractError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ExtractError::InvalidInputDir(path) => write!(f, "Cannot read input folder: {}", path.display()),
            ExtractError::GenericError(msg) => write!(f, "Extraction error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::IoError(e) => Some(e),
            ExtractError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::IoError(error)
    }
}

impl From<image::ImageError> for ExtractError {
    fn from(error: image::ImageError) -> Self {
        ExtractError::ImageError(error)
    }
}

impl From<String> for ExtractError {
    fn from(msg: String) -> Self {
        ExtractError::GenericError(msg)
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
