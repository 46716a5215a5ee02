//! Utility modules for common functionality
//!
//! This module provides logging and progress reporting used throughout the application.

pub mod logger;
pub mod progress;
