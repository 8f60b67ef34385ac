mod cli;
mod platform;

use clap::Parser;
use dm_logging::dm_info;

fn main() -> Result<(), platform::AppError> {
    let cli = cli::Cli::parse();
    platform::logging::initialize(cli.log_destination(), cli.log_level());
    dm_info!(
        "auto_dm starting: step_delay={:?} log_level={}",
        cli.send_settings().step_delay,
        cli.log_level()
    );

    platform::run_app(&cli)
}
