//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, writing every record to a log file and echoing
//! records up to a separate level to the console.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, if any
    file: Mutex<Option<File>>,
    /// Most verbose level recorded at all
    level: LevelFilter,
    /// Most verbose level echoed to the console
    console_level: LevelFilter,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Info,
            console_level: LevelFilter::Info,
        })
    }

    /// Creates a logger with no file output
    pub fn console_only() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Info,
            console_level: LevelFilter::Info,
        }
    }

    /// Sets the recording and console levels
    pub fn with_levels(mut self, level: LevelFilter, console_level: LevelFilter) -> Self {
        self.level = level;
        self.console_level = console_level.min(level);
        self
    }

    /// Appends a line to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Installs a logger as the global `log` backend
    ///
    /// # Arguments
    ///
    /// * `log_file` - Log file path; `None` logs to the console only
    /// * `level` - Most verbose level recorded
    /// * `console_level` - Most verbose level echoed to the console
    pub fn init_global_logger(
        log_file: Option<&Path>,
        level: LevelFilter,
        console_level: LevelFilter,
    ) -> io::Result<()> {
        let global_logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::console_only(),
        }
        .with_levels(level, console_level);

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }

    fn format_record(record: &Record) -> String {
        format!("[{}] {}", record.level(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Self::format_record(record);
        let _ = Logger::log(self, &message);

        if record.level() <= self.console_level {
            if record.level() <= Level::Warn {
                eprintln!("{}", message);
            } else {
                println!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
