use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "list-vms")]
#[command(about = "List VMs in migration")]
#[command(version)]
pub struct Cli {
    /// Show all VMs including those with status 100
    #[arg(short, long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Disable styling of the table header
    #[arg(long)]
    pub no_color: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (ignored when RUST_LOG is set)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table (default)
    Table,
    /// Pretty printed JSON array of records
    Json,
}
