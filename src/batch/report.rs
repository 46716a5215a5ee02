//! Per-file outcomes of a batch run

use std::fmt;
use std::path::PathBuf;

/// What happened to a single candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Extracted and written
    Saved { input: PathBuf, output: PathBuf },
    /// The input could not be decoded as an image
    DecodeFailed { input: PathBuf, reason: String },
    /// The result could not be encoded or written
    WriteFailed { input: PathBuf, output: PathBuf, reason: String },
}

impl FileOutcome {
    pub fn input(&self) -> &PathBuf {
        match self {
            FileOutcome::Saved { input, .. } => input,
            FileOutcome::DecodeFailed { input, .. } => input,
            FileOutcome::WriteFailed { input, .. } => input,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, FileOutcome::Saved { .. })
    }
}

/// Summary of a batch run, one outcome per candidate in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        BatchReport::default()
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of candidates attempted
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn saved_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.saved_count()
    }

    /// True when every candidate was written
    pub fn is_clean(&self) -> bool {
        self.failed_count() == 0
    }

    /// Paths of the files that were written
    pub fn saved_paths(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                FileOutcome::Saved { output, .. } => Some(output),
                _ => None,
            })
            .collect()
    }

    /// Outcomes that did not produce an output file
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_saved())
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} image(s) extracted", self.saved_count(), self.total())?;
        if !self.is_clean() {
            write!(f, ", {} failed", self.failed_count())?;
        }
        Ok(())
    }
}
