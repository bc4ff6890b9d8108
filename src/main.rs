mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod logging;
mod output;
mod source;
mod utils;

use clap::Parser;
use tracing::{debug, warn};

use cli::Cli;
use config::{Config, LoadedConfig};

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => match Config::load_from(path) {
            Ok(config) => LoadedConfig {
                config,
                source: Some(path.clone()),
                warnings: Vec::new(),
            },
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
        None => Config::load(),
    };
    let cli = cli.with_config(&loaded.config);

    logging::init(cli.quiet, cli.debug);
    for warning in &loaded.warnings {
        warn!("{warning}");
    }
    if let Some(path) = &loaded.source {
        debug!("loaded config from {}", path.display());
    }

    if let Err(e) = app::run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
