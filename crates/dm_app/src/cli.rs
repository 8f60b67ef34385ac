use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use dm_engine::SendSettings;
use log::LevelFilter;

use crate::platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "auto_dm",
    version,
    about = "Queue direct messages and watch a simulated send"
)]
pub struct Cli {
    /// Pause before each message is reported as sent, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub delay_ms: u64,

    /// Log file, truncated on every start.
    #[arg(long, value_name = "PATH", default_value = "auto_dm.log")]
    pub log_file: PathBuf,

    /// Do not write a log file.
    #[arg(long)]
    pub no_log: bool,

    /// Log at debug level instead of info.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn send_settings(&self) -> SendSettings {
        SendSettings {
            step_delay: Duration::from_millis(self.delay_ms),
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        if self.no_log {
            LogDestination::Disabled
        } else {
            LogDestination::File(self.log_file.clone())
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
