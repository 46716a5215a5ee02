//! Single image extraction command

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::SigKit;
use crate::commands::command_traits::Command;
use crate::commands::resolve_config;
use crate::errors::{ExtractError, ExtractResult};

/// Command for extracting one image file
pub struct SingleCommand {
    /// Path to the input image
    input_file: PathBuf,
    /// Facade configured with the output side of the run
    kit: SigKit,
}

impl SingleCommand {
    /// Create a new single-file command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new SingleCommand instance or an error
    pub fn new(args: &ArgMatches) -> ExtractResult<Self> {
        let input_file = args.get_one::<String>("file")
            .map(PathBuf::from)
            .ok_or_else(|| ExtractError::GenericError("Missing input file".to_string()))?;
        info!("Input file: {}", input_file.display());

        let kit = SigKit::with_config(resolve_config(args)?);

        Ok(SingleCommand {
            input_file,
            kit,
        })
    }
}

impl Command for SingleCommand {
    fn execute(&self) -> ExtractResult<()> {
        info!("Processing image: {}", self.input_file.display());
        self.kit.extract_file(&self.input_file)?;
        Ok(())
    }
}
