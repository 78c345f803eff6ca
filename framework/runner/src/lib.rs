mod cli;
mod client;
mod init;
mod progress;
mod run;
mod trials;

pub mod prelude {
    pub use crate::cli::SlipstreamCli;
    pub use crate::client::{fetch_all_media, fetch_home, TransportError, HOME_ENDPOINT};
    pub use crate::init::init;
    pub use crate::run::{run, ReportData, RunReport};
    pub use crate::trials::{run_trials, NUM_TRIALS};
}
