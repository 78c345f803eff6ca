use clap::Parser;

#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct SlipstreamCli {
    /// Do not show a progress bar while the trials run.
    ///
    /// This is recommended for CI/CD environments where the progress bar isn't being looked at by anyone and is just adding noise to the logs.
    #[clap(long, default_value = "false")]
    pub no_progress: bool,

    /// Do not print the summary tables at the end of the run.
    #[clap(long, default_value = "false")]
    pub no_summary: bool,
}
