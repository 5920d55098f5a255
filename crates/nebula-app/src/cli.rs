use std::path::PathBuf;

use clap::Parser;

/// Nebula, a multi-window web browser shell.
#[derive(Parser, Debug)]
#[command(name = "nebula", version, about)]
pub struct Args {
    /// Address or search terms for the first view of the first window.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug`, `nebula_core=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
