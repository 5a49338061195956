use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug};

use xcp2incus_status::cli::Cli;
use xcp2incus_status::commands::{ListOptions, list_command};
use xcp2incus_status::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report
    let mut logger = env_logger::Builder::new();
    logger.filter_level(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    logger.parse_default_env();
    logger.init();

    let config = Config::load(cli.config.as_deref())?;
    let options = ListOptions::resolve(&cli, config.get_settings());
    debug!("Resolved options: {:?}", options);

    list_command(options)
}
