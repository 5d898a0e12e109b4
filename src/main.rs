//! refdesk - terminal admin shell for browsing reference data
//!
//! ## Usage
//!
//! ```bash
//! refdesk                          # run with ./refdesk.toml or the XDG config
//! refdesk --config my.toml         # run with an explicit config file
//! refdesk --generate-config        # write the default config to the XDG path
//! refdesk --generate-config x.toml # write the default config to x.toml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use refdesk::{config::Config, logger::Logger, ui};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "refdesk")]
#[command(about = "Terminal admin shell with a filterable, sortable reference table", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit (XDG config path when PATH is omitted)
    #[arg(long, value_name = "PATH")]
    generate_config: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };

    let logger = Logger::from_config(config.logging.enabled).context("Failed to set up logging")?;

    ui::run_app(&config, logger).await
}
