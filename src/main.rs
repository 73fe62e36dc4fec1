#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use delegation_core::logging::LoggingBuilder;
use delegation_core::DashboardConfig;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::DashboardContext;

/// Delegation Dashboard - staking contract overview
#[derive(Parser, Debug)]
#[command(name = "delegation-dashboard")]
#[command(about = "Overview and owner actions for a delegation contract")]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delegation contract to show instead of the configured one
    #[arg(long)]
    contract: Option<String>,

    /// Also append logs as JSONL to this directory
    #[arg(long)]
    logs_dir: Option<PathBuf>,

    /// Increase console verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "info",
        1 => "delegation_core=debug,delegation_dashboard=debug,info",
        _ => "trace",
    };
    let mut logging = LoggingBuilder::new("dashboard").with_filter(filter);
    if let Some(dir) = &args.logs_dir {
        logging = logging.with_logs_dir(dir);
    }
    if let Some(path) = logging.init()? {
        tracing::info!(path = %path.display(), "Writing JSONL log");
    }

    let config_path = args.config.unwrap_or_else(DashboardConfig::default_path);
    let mut config = DashboardConfig::load_or_default(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(contract) = args.contract {
        config.delegation_contract = contract;
    }
    config.validate()?;

    let title = format!(
        "Delegation Dashboard - {}",
        config.network.name
    );
    tracing::info!(
        contract = %config.delegation_contract,
        gateway = %config.network.gateway_address,
        "Starting dashboard"
    );

    let ctx = DashboardContext::connect(config)?;

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(ctx)
        .launch(app::App);

    Ok(())
}
