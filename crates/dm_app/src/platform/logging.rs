//! Platform logging initialization for auto_dm.
//!
//! The terminal belongs to the UI, so log output only ever goes to a file.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the given file, truncating it first.
    File(PathBuf),
    /// Install no logger at all.
    Disabled,
}

/// Initialize the global logger.
///
/// A log file that cannot be created is reported on stderr and logging is
/// skipped; the app still starts.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let path = match destination {
        LogDestination::File(path) => path,
        LogDestination::Disabled => return,
    };

    let Some(file_logger) = create_file_logger(&path, level, build_config()) else {
        return;
    };
    let loggers: Vec<Box<dyn SharedLogger>> = vec![file_logger];
    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
