use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    name = "tyresim",
    about = "Compares the race time of tyre compounds under a forced pit stop policy"
)]
pub struct SimOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging
    #[clap(short, long)]
    pub debug: bool,

    /// Simulate the compounds in parallel
    #[clap(long)]
    pub parallel: bool,

    /// Do not export the results chart
    #[clap(long)]
    pub no_plot: bool,

    /// Additionally write the lap times as CSV file
    #[clap(short, long)]
    pub csv: bool,

    /// Additionally write the results as JSON file
    #[clap(short, long)]
    pub json: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the simulation parameter file (OPTIONAL: if not set, uses the built-in soft,
    /// medium and hard compounds)
    #[clap(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set directory for the result files
    #[clap(short, long, default_value = "output")]
    pub output_dir: PathBuf,
}
