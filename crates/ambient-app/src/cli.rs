use std::path::PathBuf;

use clap::Parser;

/// Ambient: an animated particle and wireframe background.
#[derive(Parser, Debug)]
#[command(name = "ambient", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "ambient=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Run as a click-through window below all others.
    #[arg(long)]
    pub backdrop: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
