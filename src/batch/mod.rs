//! Batch processing of an input directory

pub mod discovery;
pub mod naming;
pub mod report;
pub mod driver;

pub use discovery::find_candidates;
pub use driver::BatchDriver;
pub use naming::output_path;
pub use report::{BatchReport, FileOutcome};
