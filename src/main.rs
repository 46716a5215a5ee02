use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use sigkit::utils::logger::Logger;
use sigkit::commands::{build_cli, CommandFactory, SigkitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // The progress bar owns the terminal; keep only problems on the console
    let console_level = if matches.get_flag("progress") {
        LevelFilter::Warn
    } else {
        level
    };

    let log_file = matches.get_one::<String>("log-file").map(Path::new);
    if let Err(e) = Logger::init_global_logger(log_file, level, console_level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = SigkitCommandFactory::new();

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
