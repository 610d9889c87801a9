use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use crate::config::{load_settings, DEFAULT_CONFIG_PATH};
use crate::ui::MenuGuiApp;

#[derive(Parser, Debug)]
#[command(about = "TasteHub restaurant menu manager")]
struct Args {
    /// Optional TOML settings file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.config)?;
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    tracing::info!(
        config = %args.config.display(),
        currency_prefix = %settings.currency_prefix,
        "starting menu manager"
    );

    let title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(MenuGuiApp::new(settings)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("desktop window exited with an error")
}
