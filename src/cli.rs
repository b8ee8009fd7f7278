use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for rBikeshare.
/// Everything else is asked interactively.
#[derive(Parser, Debug)]
#[command(
    name = "rbikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bike-share trip data: filter by month or day and print travel statistics",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rbikeshare/rbikeshare.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the city CSV files (overrides `data_dir` in the config)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,
}
