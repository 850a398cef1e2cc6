use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "masjid-tui")]
#[command(about = "Full-screen prayer time dashboard for the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Commands {
    /// Show the dashboard (default)
    Run,
    /// Validate the config and print today's prayer timeline
    Check,
    /// Print the default config path
    ConfigPath,
}
