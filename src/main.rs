#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use aetherflow_core::{logging, ResolverKind, Settings};
use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global settings, resolved from file, environment and command line
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get the launch settings (defaults if main did not set them)
pub fn get_settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// AetherFlow - gesture-driven particle themes
#[derive(Parser, Debug)]
#[command(name = "aetherflow-desktop")]
#[command(about = "AetherFlow - shape a particle field with your hand and your imagination")]
struct Args {
    /// Theme resolver backend (offline, gemini)
    #[arg(short, long)]
    resolver: Option<String>,

    /// Settings file (default: <config dir>/aetherflow/settings.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with the hand tracker switched off
    #[arg(long)]
    no_tracker: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.verbose);

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(kind) = args.resolver {
        settings.resolver = Some(kind.parse::<ResolverKind>()?);
    }
    if args.no_tracker {
        settings.tracker_enabled = false;
    }

    tracing::info!(
        "Starting AetherFlow with the {} resolver, tracker {}",
        settings.resolver_kind(),
        if settings.tracker_enabled { "on" } else { "off" }
    );

    let _ = SETTINGS.set(settings);

    // Wide window; the canvas fills it
    let window_width = 1280.0;
    let window_height = 800.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("AetherFlow")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
