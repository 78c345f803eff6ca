use crate::cli::SlipstreamCli;
use clap::Parser;

/// Initialise the CLI and logging for the benchmark runner.
pub fn init() -> SlipstreamCli {
    env_logger::init();

    SlipstreamCli::parse()
}
