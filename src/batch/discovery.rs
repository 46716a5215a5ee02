//! Candidate file discovery
//!
//! Only the direct entries of the input directory are considered;
//! subdirectories are skipped, never descended into.

use std::path::{Path, PathBuf};
use log::{debug, warn};
use walkdir::WalkDir;

use crate::batch::naming;
use crate::errors::{ExtractError, ExtractResult};

/// List image files directly inside `dir`, sorted by file name
///
/// # Arguments
/// * `dir` - Input directory
///
/// # Returns
/// Candidate paths, or an error if the directory cannot be read
pub fn find_candidates(dir: &Path) -> ExtractResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtractError::InvalidInputDir(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                debug!("Cannot list {}: {}", dir.display(), e);
                return Err(ExtractError::InvalidInputDir(dir.to_path_buf()));
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            debug!("Ignoring non-file entry: {}", entry.path().display());
            continue;
        }

        if naming::is_candidate(entry.path()) {
            candidates.push(entry.into_path());
        } else {
            debug!("Ignoring non-image file: {}", entry.path().display());
        }
    }

    Ok(candidates)
}
