pub mod errors;
pub mod config;
pub mod extractor;
pub mod batch;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::SigKit;

pub use config::ExtractConfig;
pub use errors::{ExtractError, ExtractResult};
pub use extractor::{extract_signature, SignatureExtractor};
pub use batch::{BatchDriver, BatchReport, FileOutcome};
