//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod batch_command;
pub mod single_command;

pub use command_traits::{Command, CommandFactory};
pub use batch_command::BatchCommand;
pub use single_command::SingleCommand;

use std::path::PathBuf;
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::info;

use crate::config::ExtractConfig;
use crate::errors::ExtractResult;

/// Build the command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("sigkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Extract handwritten signatures from white backgrounds into transparent PNGs")
        .arg(
            Arg::new("input")
                .help("Input folder containing .png/.jpg/.jpeg images [default: Input]")
                .value_name("DIR")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output folder for extracted PNG files [default: Output]")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .help("Luma cutoff; brighter pixels become transparent [default: 240]")
                .value_name("0-255")
                .required(false),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .help("Suffix added to output file names [default: _extracted]")
                .value_name("TEXT")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Process a single image instead of a folder")
                .value_name("FILE")
                .conflicts_with("input")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value("sigkit.log")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .short('p')
                .long("progress")
                .help("Show a progress bar")
                .action(ArgAction::SetTrue),
        )
}

/// Merge defaults, an optional config file and command-line flags
///
/// Later sources win: defaults < `--config` file < individual flags.
pub fn resolve_config(args: &ArgMatches) -> ExtractResult<ExtractConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => {
            info!("Using configuration file: {}", path);
            ExtractConfig::from_file(path)?
        }
        None => ExtractConfig::default(),
    };

    if let Some(input) = args.get_one::<String>("input") {
        config.input_dir = PathBuf::from(input);
    }

    if let Some(output) = args.get_one::<String>("output") {
        config.output_dir = PathBuf::from(output);
    }

    if let Some(threshold) = args.get_one::<String>("threshold") {
        config.threshold = ExtractConfig::parse_threshold(threshold)?;
    }

    if let Some(suffix) = args.get_one::<String>("suffix") {
        config.suffix = suffix.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Factory for creating command instances based on CLI arguments
pub struct SigkitCommandFactory;

impl SigkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SigkitCommandFactory
    }
}

impl Default for SigkitCommandFactory {
    fn default() -> Self {
        SigkitCommandFactory::new()
    }
}

impl CommandFactory for SigkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> ExtractResult<Box<dyn Command>> {
        if args.contains_id("file") {
            Ok(Box::new(SingleCommand::new(args)?))
        } else {
            Ok(Box::new(BatchCommand::new(args)?))
        }
    }
}
