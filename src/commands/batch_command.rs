//! Directory extraction command
//!
//! Processes every candidate image in the input folder and writes the
//! transparent results to the output folder.

use clap::ArgMatches;
use log::{debug, info};

use crate::batch::BatchDriver;
use crate::commands::command_traits::Command;
use crate::commands::resolve_config;
use crate::config::ExtractConfig;
use crate::errors::ExtractResult;

/// Command for extracting every image in a directory
pub struct BatchCommand {
    /// Resolved run configuration
    config: ExtractConfig,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl BatchCommand {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches) -> ExtractResult<Self> {
        let config = resolve_config(args)?;
        let show_progress = args.get_flag("progress");
        debug!("Batch configuration: {:?}, progress: {}", config, show_progress);

        Ok(BatchCommand {
            config,
            show_progress,
        })
    }
}

impl Command for BatchCommand {
    fn execute(&self) -> ExtractResult<()> {
        info!("Extracting signatures from {} into {} (threshold {})",
              self.config.input_dir.display(), self.config.output_dir.display(), self.config.threshold);

        let report = BatchDriver::new(&self.config)
            .with_progress(self.show_progress)
            .run()?;

        debug!("Batch summary: {}", report);
        Ok(())
    }
}
