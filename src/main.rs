//! MaintDeck - a terminal dashboard for machine diagnostics
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

use mdeck_app::config::load_settings;
use mdeck_core::prelude::*;

/// MaintDeck - a terminal dashboard for machine diagnostics
#[derive(Parser, Debug)]
#[command(name = "mdeck")]
#[command(about = "Interactive terminal client for a machine-diagnostics backend", long_about = None)]
struct Args {
    /// Directory holding .mdeck/config.toml (defaults to the current directory)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Backend base URL, overriding the configured one
    #[arg(long, value_name = "URL")]
    backend: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    mdeck_core::logging::init()?;

    let dir = args
        .dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut settings = load_settings(&dir);
    if let Some(backend) = args.backend {
        settings.backend.url = backend;
    }

    info!("starting with backend {}", settings.backend.url);
    mdeck_tui::run(settings).await?;

    Ok(())
}
