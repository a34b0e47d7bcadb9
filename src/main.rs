#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{logging, PortfolioConfig};

/// Resolved configuration, set once before launch
static CONFIG: OnceLock<PortfolioConfig> = OnceLock::new();

/// Get the runtime configuration (set from file and flags, or defaults)
pub fn get_config() -> PortfolioConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Vighnesh Parab - Portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page developer portfolio")]
struct Args {
    /// JSON config file (defaults to <config dir>/portfolio/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable marquee, reveal and typing animations
    #[arg(long)]
    reduced_motion: bool,

    /// Tracing filter used when RUST_LOG is unset (e.g. "portfolio_core=debug")
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.log_filter.as_deref()).context("failed to set up logging")?;

    // An explicit --config must exist; the default location is optional.
    let mut config = match (args.config, PortfolioConfig::default_path()) {
        (Some(path), _) => PortfolioConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        (None, Some(path)) => PortfolioConfig::load_or_default(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        (None, None) => PortfolioConfig::default(),
    };
    if args.reduced_motion {
        config.reduced_motion = true;
    }

    tracing::info!(
        reduced_motion = config.reduced_motion,
        reveal_threshold = config.reveal_threshold,
        "Starting portfolio"
    );

    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Vighnesh Parab | Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
