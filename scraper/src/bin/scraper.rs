use anyhow::{Context, Result};
use apod_scraper::cli::Cli;
use apod_scraper::run;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    run(&config).context("Failed to start APOD download")?;

    Ok(())
}
