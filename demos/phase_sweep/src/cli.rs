use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Domain-wall run plus a phase-transition sweep of the 2D Ising model."
)]
pub struct Cli {
    /// JSON sweep configuration.  Without one a small built-in sweep runs
    /// and writes to `output/phase_sweep`.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
