#![forbid(unsafe_code)]

mod carousel_state;
mod config;
mod constants;
mod controller;
mod gui;
mod timer;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::Settings;

/// Image carousel with timed auto-advance
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Directory containing the gallery's images/ folder
    #[arg(long)]
    asset_root: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Read before logging is up so the configured level applies; report afterwards
    let config_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let loaded = Settings::read(&config_path);
    let mut settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => Settings::default(),
    };
    settings.apply_env_overrides();
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }

    let level_parse = settings.log_level.parse::<TraceLevel>();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(*level_parse.as_ref().unwrap_or(&TraceLevel::INFO))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    if level_parse.is_err() {
        warn!(log_level = %settings.log_level, "unknown log level, using info");
    }

    match loaded {
        Ok(Some(_)) => info!("loaded config: {}", config_path.display()),
        Ok(None) => match Settings::default().save(&config_path) {
            Ok(()) => info!("generated config file: {}", config_path.display()),
            Err(e) => warn!("failed to save default config: {e:?}"),
        },
        Err(e) => warn!("ignoring unreadable config, using defaults: {e:?}"),
    }

    if let Some(root) = cli.asset_root {
        settings.asset_root = root;
    }
    settings.validate_and_clamp();
    info!("settings={:#?}", settings);

    gui::run_gui(&settings)
}
