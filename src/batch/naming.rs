//! Input filtering and output file naming

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CANDIDATE_EXTENSION: Regex = Regex::new(r"(?i)\.(png|jpe?g)$")
        .expect("candidate extension pattern is valid");
}

/// Whether a file name ends in `.png`, `.jpg` or `.jpeg` (any case)
pub fn is_candidate_name(name: &str) -> bool {
    CANDIDATE_EXTENSION.is_match(name)
}

/// Whether a path's file name qualifies as an input image
pub fn is_candidate(path: &Path) -> bool {
    path.file_name()
        .map(|name| is_candidate_name(&name.to_string_lossy()))
        .unwrap_or(false)
}

/// Build the output path for an input image
///
/// The input extension is stripped and replaced: `a.jpg` and `a.png`
/// both become `<output_dir>/a<suffix>.png`.
///
/// # Arguments
/// * `output_dir` - Directory receiving the result
/// * `input` - Path of the source image
/// * `suffix` - Text appended to the file stem
pub fn output_path(output_dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new(""));
    output_dir.join(format!("{}{}.png", stem.to_string_lossy(), suffix))
}
