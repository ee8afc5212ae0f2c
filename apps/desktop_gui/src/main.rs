use std::path::PathBuf;

mod controller;
mod ui;

use anyhow::Context;
use catalog_core::{load_settings, AppContext};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use shared::protocol::Intent;
use tracing_subscriber::EnvFilter;

use crate::ui::{theme::PersistedDesktopSettings, theme::SETTINGS_STORAGE_KEY, CatalogApp};

const APP_TITLE: &str = "Government Services";
const INTENT_QUEUE_CAPACITY: usize = 256;

#[derive(Parser, Debug)]
#[command(about = "Browse government websites and submit projects against them")]
struct Args {
    /// Settings file; defaults to ./gov_catalog.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured tracing filter (RUST_LOG still wins).
    #[arg(long)]
    log_filter: Option<String>,
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    let log_filter = args.log_filter.as_deref().unwrap_or(&settings.log_filter);
    tracing_subscriber::fmt().with_env_filter(env_filter(log_filter)).init();
    tracing::info!(
        project_id_strategy = %settings.project_id_strategy,
        "starting catalog desktop app"
    );

    let (intent_tx, intent_rx) = bounded::<Intent>(INTENT_QUEUE_CAPACITY);
    let context = AppContext::new(&settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 800.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| PersistedDesktopSettings::from_storage_text(&text))
            });
            Ok(Box::new(CatalogApp::new(
                context,
                intent_tx,
                intent_rx,
                persisted_settings,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop app exited with error: {err}"))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
